//! Donor questionnaire screening.
//!
//! Submissions pass through [`IntakeGuard`] for boundary validation and then through
//! [`EligibilityEvaluator`], a pure rule pass that reports every failed rule in a
//! fixed order.

mod config;
pub mod domain;
mod intake;
pub mod router;
mod rules;

#[cfg(test)]
mod tests;

use chrono::NaiveDate;
use tracing::debug;

pub use config::EligibilityConfig;
pub use domain::{
    DonorQuestionnaire, EligibilityVerdict, MedicalCondition, QuestionnaireSubmission, ReasonCode,
};
pub use intake::{IntakeGuard, QuestionnaireError};
pub use router::eligibility_router;

/// Stateless evaluator applying the screening thresholds to a questionnaire.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEvaluator {
    config: EligibilityConfig,
}

impl EligibilityEvaluator {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    pub fn evaluate(&self, questionnaire: &DonorQuestionnaire) -> EligibilityVerdict {
        let verdict = EligibilityVerdict::from_reasons(rules::failed_rules(
            questionnaire,
            &self.config,
        ));
        debug!(
            eligible = verdict.eligible,
            reasons = verdict.reasons.len(),
            "questionnaire evaluated"
        );
        verdict
    }

    /// Explanations for each reason on the verdict, in the verdict's order.
    pub fn explain(&self, verdict: &EligibilityVerdict) -> Vec<String> {
        verdict
            .reasons
            .iter()
            .map(|reason| rules::describe(*reason, &self.config))
            .collect()
    }
}

/// Evaluate with the standard thresholds.
pub fn evaluate(questionnaire: &DonorQuestionnaire) -> EligibilityVerdict {
    EligibilityEvaluator::default().evaluate(questionnaire)
}

/// Whether the minimum inter-donation interval has elapsed between `last_donation`
/// and `today`. Exactly the interval counts as met.
pub fn donation_interval_met(
    last_donation: NaiveDate,
    today: NaiveDate,
    config: &EligibilityConfig,
) -> bool {
    today.signed_duration_since(last_donation).num_days() >= config.donation_interval_days
}
