use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::workflows::blood_units::Locale;
use crate::workflows::donors::DonorId;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonationRecordId(pub String);

impl DonationRecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DonationRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DonationRecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Laboratory verdict on the collected blood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestResult {
    Good,
    Poor,
}

impl TestResult {
    pub const fn tag(self) -> &'static str {
        match self {
            TestResult::Good => "good",
            TestResult::Poor => "poor",
        }
    }

    pub const fn display_label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, TestResult::Good) => "Passed",
            (Locale::En, TestResult::Poor) => "Not passed",
            (Locale::Vi, TestResult::Good) => "Máu đạt",
            (Locale::Vi, TestResult::Poor) => "Máu chưa đạt",
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TestResult {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "good" => Ok(TestResult::Good),
            "poor" => Ok(TestResult::Poor),
            _ => Err(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DonationType {
    WholeBlood,
    Plasma,
    Platelets,
}

impl DonationType {
    pub const fn display_label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, DonationType::WholeBlood) => "Whole blood",
            (Locale::En, DonationType::Plasma) => "Plasma",
            (Locale::En, DonationType::Platelets) => "Platelets",
            (Locale::Vi, DonationType::WholeBlood) => "Máu toàn phần",
            (Locale::Vi, DonationType::Plasma) => "Huyết tương",
            (Locale::Vi, DonationType::Platelets) => "Tiểu cầu",
        }
    }
}

/// Bedside record of one donation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub id: DonationRecordId,
    pub donor_id: DonorId,
    pub donor_name: String,
    pub donated_at: NaiveDateTime,
    pub donor_weight_kg: u16,
    pub donor_temperature_c: f64,
    pub donation_type: DonationType,
    pub volume_ml: u32,
    pub test_result: TestResult,
    #[serde(default)]
    pub note: String,
}
