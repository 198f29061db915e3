use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::config::EligibilityConfig;
use super::domain::{DonorQuestionnaire, MedicalCondition, QuestionnaireSubmission};
use super::donation_interval_met;

const MAX_AGE: i32 = 120;
const MAX_WEIGHT_KG: i32 = 400;

/// Boundary validation for raw questionnaire answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("invalid questionnaire: age {0} outside 0..=120")]
    AgeOutOfRange(i32),
    #[error("invalid questionnaire: weight {0} kg outside 1..=400")]
    WeightOutOfRange(i32),
    #[error("invalid questionnaire: unknown medical condition '{0}'")]
    UnknownCondition(String),
    #[error("invalid questionnaire: last donation date {last} is after {today}")]
    LastDonationInFuture { last: NaiveDate, today: NaiveDate },
}

impl QuestionnaireError {
    pub const fn field(&self) -> &'static str {
        match self {
            QuestionnaireError::AgeOutOfRange(_) => "age",
            QuestionnaireError::WeightOutOfRange(_) => "weight_kg",
            QuestionnaireError::UnknownCondition(_) => "medical_conditions",
            QuestionnaireError::LastDonationInFuture { .. } => "last_donation_date",
        }
    }
}

/// Turns submissions into validated questionnaires.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    config: EligibilityConfig,
}

impl IntakeGuard {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    /// `today` anchors the donation-interval check when the submission carries a
    /// last donation date.
    pub fn questionnaire_from_submission(
        &self,
        submission: QuestionnaireSubmission,
        today: NaiveDate,
    ) -> Result<DonorQuestionnaire, QuestionnaireError> {
        if !(0..=MAX_AGE).contains(&submission.age) {
            return Err(QuestionnaireError::AgeOutOfRange(submission.age));
        }
        if !(1..=MAX_WEIGHT_KG).contains(&submission.weight_kg) {
            return Err(QuestionnaireError::WeightOutOfRange(submission.weight_kg));
        }

        let medical_conditions = submission
            .medical_conditions
            .iter()
            .map(|tag| {
                tag.parse::<MedicalCondition>()
                    .map_err(QuestionnaireError::UnknownCondition)
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        let mut recent_donation_within_window = submission.recent_donation_within_window;
        if let Some(last) = submission.last_donation_date {
            if last > today {
                return Err(QuestionnaireError::LastDonationInFuture { last, today });
            }
            recent_donation_within_window |= !donation_interval_met(last, today, &self.config);
        }

        Ok(DonorQuestionnaire {
            age: submission.age as u8,
            weight_kg: submission.weight_kg as u16,
            feeling_well: submission.feeling_well,
            recent_donation_within_window,
            on_antibiotics: submission.on_antibiotics,
            recent_dental_work: submission.recent_dental_work,
            recent_tattoo_or_piercing: submission.recent_tattoo_or_piercing,
            recent_relevant_travel: submission.recent_relevant_travel,
            medical_conditions,
        })
    }
}
