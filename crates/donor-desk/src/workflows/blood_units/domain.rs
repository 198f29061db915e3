use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::workflows::blood_type::BloodType;
use crate::workflows::donors::DonorId;

/// Identifier wrapper for blood units. Identifiers sort in creation order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BloodUnitId(pub String);

impl BloodUnitId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BloodUnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BloodUnitId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Review status of a collected unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    Pending,
    Approved,
    Denied,
    Expired,
}

impl UnitStatus {
    pub const ALL: [UnitStatus; 4] = [
        UnitStatus::Pending,
        UnitStatus::Approved,
        UnitStatus::Denied,
        UnitStatus::Expired,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            UnitStatus::Pending => "pending",
            UnitStatus::Approved => "approved",
            UnitStatus::Denied => "denied",
            UnitStatus::Expired => "expired",
        }
    }

    /// Label shown to staff in the given language.
    pub const fn display_label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, UnitStatus::Pending) => "Pending",
            (Locale::En, UnitStatus::Approved) => "Approved",
            (Locale::En, UnitStatus::Denied) => "Denied",
            (Locale::En, UnitStatus::Expired) => "Expired",
            (Locale::Vi, UnitStatus::Pending) => "Chờ duyệt",
            (Locale::Vi, UnitStatus::Approved) => "Đã duyệt",
            (Locale::Vi, UnitStatus::Denied) => "Từ chối",
            (Locale::Vi, UnitStatus::Expired) => "Hết hạn",
        }
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UnitStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        UnitStatus::ALL
            .into_iter()
            .find(|status| status.label() == normalized)
            .ok_or_else(|| value.to_string())
    }
}

/// Language of the status label tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "vi" => Ok(Locale::Vi),
            _ => Err(value.to_string()),
        }
    }
}

/// One collected donation tracked through review.
///
/// Only `status` (and the `version` that guards it) changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodUnit {
    pub id: BloodUnitId,
    pub blood_type: BloodType,
    pub volume_ml: u32,
    pub donation_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: UnitStatus,
    pub donor_id: DonorId,
    pub version: u64,
}

impl BloodUnit {
    /// Register a freshly collected unit. New units start pending at version 1.
    pub fn new(
        id: BloodUnitId,
        blood_type: BloodType,
        volume_ml: u32,
        donation_date: NaiveDate,
        expiry_date: NaiveDate,
        donor_id: DonorId,
    ) -> Result<Self, InvalidUnit> {
        if volume_ml == 0 {
            return Err(InvalidUnit::ZeroVolume { id });
        }
        if expiry_date <= donation_date {
            return Err(InvalidUnit::ExpiryNotAfterDonation {
                id,
                donation_date,
                expiry_date,
            });
        }

        Ok(Self {
            id,
            blood_type,
            volume_ml,
            donation_date,
            expiry_date,
            status: UnitStatus::Pending,
            donor_id,
            version: 1,
        })
    }

    /// Load a unit whose review already happened elsewhere, e.g. imported inventory.
    pub fn with_status(mut self, status: UnitStatus) -> Self {
        self.status = status;
        self
    }

    /// Shelf-life countdown shown next to the expiry date. This does not change
    /// `status`; expiry is recorded by a separate process.
    pub fn expiry_status(&self, today: NaiveDate) -> ExpiryStatus {
        let days_left = (self.expiry_date - today).num_days();
        if days_left < 0 {
            ExpiryStatus::Expired
        } else if days_left <= EXPIRING_SOON_DAYS {
            ExpiryStatus::ExpiringSoon { days_left }
        } else {
            ExpiryStatus::Normal { days_left }
        }
    }
}

/// A unit as listed to staff, with its shelf-life countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitView {
    #[serde(flatten)]
    pub unit: BloodUnit,
    pub expiry: ExpiryStatus,
}

/// Units within this many days of their expiry date are flagged.
pub const EXPIRING_SOON_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "band", rename_all = "kebab-case")]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon { days_left: i64 },
    Normal { days_left: i64 },
}

impl ExpiryStatus {
    pub fn display_label(self, locale: Locale) -> String {
        match (locale, self) {
            (Locale::En, ExpiryStatus::Expired) => "Past expiry".to_string(),
            (Locale::En, ExpiryStatus::ExpiringSoon { days_left })
            | (Locale::En, ExpiryStatus::Normal { days_left }) => {
                format!("{days_left} days left")
            }
            (Locale::Vi, ExpiryStatus::Expired) => "Đã hết hạn".to_string(),
            (Locale::Vi, ExpiryStatus::ExpiringSoon { days_left })
            | (Locale::Vi, ExpiryStatus::Normal { days_left }) => {
                format!("Còn {days_left} ngày")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUnit {
    #[error("blood unit {id} must have a positive volume")]
    ZeroVolume { id: BloodUnitId },
    #[error("blood unit {id} expires {expiry_date}, not after donation on {donation_date}")]
    ExpiryNotAfterDonation {
        id: BloodUnitId,
        donation_date: NaiveDate,
        expiry_date: NaiveDate,
    },
}
