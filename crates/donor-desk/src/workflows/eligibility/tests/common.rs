use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::eligibility::router::{eligibility_router, EligibilityState};
use crate::workflows::eligibility::{
    DonorQuestionnaire, EligibilityEvaluator, IntakeGuard, MedicalCondition,
    QuestionnaireSubmission, ReasonCode,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

pub(super) fn eligible_questionnaire() -> DonorQuestionnaire {
    DonorQuestionnaire::healthy_adult(32, 68)
}

pub(super) fn submission() -> QuestionnaireSubmission {
    QuestionnaireSubmission {
        age: 32,
        weight_kg: 68,
        feeling_well: true,
        recent_donation_within_window: false,
        last_donation_date: None,
        on_antibiotics: false,
        recent_dental_work: false,
        recent_tattoo_or_piercing: false,
        recent_relevant_travel: false,
        medical_conditions: Vec::new(),
    }
}

/// One questionnaire per rule, each failing only that rule.
pub(super) fn single_failures() -> Vec<(ReasonCode, DonorQuestionnaire)> {
    let base = eligible_questionnaire();
    vec![
        (
            ReasonCode::AgeTooLow,
            DonorQuestionnaire {
                age: 16,
                ..base.clone()
            },
        ),
        (
            ReasonCode::WeightTooLow,
            DonorQuestionnaire {
                weight_kg: 49,
                ..base.clone()
            },
        ),
        (
            ReasonCode::NotFeelingWell,
            DonorQuestionnaire {
                feeling_well: false,
                ..base.clone()
            },
        ),
        (
            ReasonCode::DonationIntervalNotMet,
            DonorQuestionnaire {
                recent_donation_within_window: true,
                ..base.clone()
            },
        ),
        (
            ReasonCode::OnAntibiotics,
            DonorQuestionnaire {
                on_antibiotics: true,
                ..base.clone()
            },
        ),
        (
            ReasonCode::RecentDentalWork,
            DonorQuestionnaire {
                recent_dental_work: true,
                ..base.clone()
            },
        ),
        (
            ReasonCode::RecentTattooPiercing,
            DonorQuestionnaire {
                recent_tattoo_or_piercing: true,
                ..base.clone()
            },
        ),
        (
            ReasonCode::RecentTravel,
            DonorQuestionnaire {
                recent_relevant_travel: true,
                ..base.clone()
            },
        ),
        (
            ReasonCode::DisqualifyingCondition,
            DonorQuestionnaire {
                medical_conditions: [MedicalCondition::Hepatitis].into_iter().collect(),
                ..base
            },
        ),
    ]
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

pub(super) fn router() -> axum::Router {
    let mut state = EligibilityState::new(EligibilityEvaluator::default());
    state.today = Some(today());
    eligibility_router(Arc::new(state))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
