use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw questionnaire answers as they arrive from a form or API client.
///
/// Numeric answers are signed so out-of-range input reaches the intake guard
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireSubmission {
    pub age: i32,
    pub weight_kg: i32,
    pub feeling_well: bool,
    #[serde(default)]
    pub recent_donation_within_window: bool,
    /// When present, the intake guard derives the donation-interval answer from it.
    #[serde(default)]
    pub last_donation_date: Option<NaiveDate>,
    #[serde(default)]
    pub on_antibiotics: bool,
    #[serde(default)]
    pub recent_dental_work: bool,
    #[serde(default)]
    pub recent_tattoo_or_piercing: bool,
    #[serde(default)]
    pub recent_relevant_travel: bool,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
}

/// Validated questionnaire consumed by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorQuestionnaire {
    pub age: u8,
    pub weight_kg: u16,
    pub feeling_well: bool,
    pub recent_donation_within_window: bool,
    pub on_antibiotics: bool,
    pub recent_dental_work: bool,
    pub recent_tattoo_or_piercing: bool,
    pub recent_relevant_travel: bool,
    pub medical_conditions: BTreeSet<MedicalCondition>,
}

impl DonorQuestionnaire {
    /// A donor who clears every rule. Handy as a starting point for callers that only
    /// collect a handful of answers.
    pub fn healthy_adult(age: u8, weight_kg: u16) -> Self {
        Self {
            age,
            weight_kg,
            feeling_well: true,
            recent_donation_within_window: false,
            on_antibiotics: false,
            recent_dental_work: false,
            recent_tattoo_or_piercing: false,
            recent_relevant_travel: false,
            medical_conditions: BTreeSet::new(),
        }
    }
}

/// Condition tags offered on the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicalCondition {
    Heart,
    Diabetes,
    Cancer,
    Hepatitis,
    Hiv,
    Hypertension,
    Asthma,
    Allergy,
    Anemia,
    Other,
}

impl MedicalCondition {
    pub const ALL: [MedicalCondition; 10] = [
        MedicalCondition::Heart,
        MedicalCondition::Diabetes,
        MedicalCondition::Cancer,
        MedicalCondition::Hepatitis,
        MedicalCondition::Hiv,
        MedicalCondition::Hypertension,
        MedicalCondition::Asthma,
        MedicalCondition::Allergy,
        MedicalCondition::Anemia,
        MedicalCondition::Other,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            MedicalCondition::Heart => "heart",
            MedicalCondition::Diabetes => "diabetes",
            MedicalCondition::Cancer => "cancer",
            MedicalCondition::Hepatitis => "hepatitis",
            MedicalCondition::Hiv => "hiv",
            MedicalCondition::Hypertension => "hypertension",
            MedicalCondition::Asthma => "asthma",
            MedicalCondition::Allergy => "allergy",
            MedicalCondition::Anemia => "anemia",
            MedicalCondition::Other => "other",
        }
    }
}

impl fmt::Display for MedicalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for MedicalCondition {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        MedicalCondition::ALL
            .into_iter()
            .find(|condition| condition.tag() == normalized)
            .ok_or_else(|| value.to_string())
    }
}

/// Disqualification reasons, in the order the rules run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonCode {
    AgeTooLow,
    WeightTooLow,
    NotFeelingWell,
    DonationIntervalNotMet,
    OnAntibiotics,
    RecentDentalWork,
    RecentTattooPiercing,
    RecentTravel,
    DisqualifyingCondition,
}

impl ReasonCode {
    pub const fn code(self) -> &'static str {
        match self {
            ReasonCode::AgeTooLow => "age-too-low",
            ReasonCode::WeightTooLow => "weight-too-low",
            ReasonCode::NotFeelingWell => "not-feeling-well",
            ReasonCode::DonationIntervalNotMet => "donation-interval-not-met",
            ReasonCode::OnAntibiotics => "on-antibiotics",
            ReasonCode::RecentDentalWork => "recent-dental-work",
            ReasonCode::RecentTattooPiercing => "recent-tattoo-piercing",
            ReasonCode::RecentTravel => "recent-travel",
            ReasonCode::DisqualifyingCondition => "disqualifying-condition",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of a questionnaire screening. `eligible` holds exactly when `reasons`
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub reasons: Vec<ReasonCode>,
}

impl EligibilityVerdict {
    pub fn from_reasons(reasons: Vec<ReasonCode>) -> Self {
        Self {
            eligible: reasons.is_empty(),
            reasons,
        }
    }

    pub fn summary(&self) -> String {
        if self.eligible {
            "eligible to donate".to_string()
        } else {
            let codes: Vec<&str> = self.reasons.iter().map(|reason| reason.code()).collect();
            format!("not eligible: {}", codes.join(", "))
        }
    }
}
