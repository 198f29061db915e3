use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::MedicalCondition;

/// Screening thresholds. Every minimum is inclusive: a donor exactly at the
/// threshold passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub minimum_age: u8,
    pub minimum_weight_kg: u16,
    pub donation_interval_days: i64,
    pub dental_work_window_days: i64,
    pub tattoo_piercing_window_days: i64,
    pub disqualifying_conditions: BTreeSet<MedicalCondition>,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            minimum_age: 17,
            minimum_weight_kg: 50,
            donation_interval_days: 56,
            dental_work_window_days: 3,
            tattoo_piercing_window_days: 90,
            disqualifying_conditions: BTreeSet::from([
                MedicalCondition::Heart,
                MedicalCondition::Diabetes,
                MedicalCondition::Cancer,
                MedicalCondition::Hepatitis,
                MedicalCondition::Hiv,
            ]),
        }
    }
}
