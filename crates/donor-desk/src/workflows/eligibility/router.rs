use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use super::domain::{QuestionnaireSubmission, ReasonCode};
use super::{EligibilityEvaluator, IntakeGuard};
use crate::workflows::blood_type::BloodType;

/// Shared state for the donor-facing screening endpoints.
pub struct EligibilityState {
    pub guard: IntakeGuard,
    pub evaluator: EligibilityEvaluator,
    /// Fixed reference date for tests; `None` uses the local calendar date.
    pub today: Option<NaiveDate>,
}

impl EligibilityState {
    pub fn new(evaluator: EligibilityEvaluator) -> Self {
        Self {
            guard: IntakeGuard::new(evaluator.config().clone()),
            evaluator,
            today: None,
        }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Debug, Serialize)]
pub struct EligibilityResponse {
    pub eligible: bool,
    pub reasons: Vec<ReasonCode>,
    pub details: Vec<String>,
}

/// Public routes: questionnaire screening and blood-type lookup.
pub fn eligibility_router(state: Arc<EligibilityState>) -> Router {
    Router::new()
        .route("/api/v1/eligibility", post(evaluate_handler))
        .route("/api/v1/blood-types/:blood_type", get(blood_type_handler))
        .with_state(state)
}

pub(crate) async fn evaluate_handler(
    State(state): State<Arc<EligibilityState>>,
    Json(submission): Json<QuestionnaireSubmission>,
) -> Response {
    let questionnaire = match state
        .guard
        .questionnaire_from_submission(submission, state.today())
    {
        Ok(questionnaire) => questionnaire,
        Err(error) => {
            info!(field = error.field(), %error, "questionnaire rejected at intake");
            let payload = json!({
                "error": error.to_string(),
                "field": error.field(),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    let verdict = state.evaluator.evaluate(&questionnaire);
    let details = state.evaluator.explain(&verdict);
    let response = EligibilityResponse {
        eligible: verdict.eligible,
        reasons: verdict.reasons,
        details,
    };
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn blood_type_handler(Path(raw): Path<String>) -> Response {
    match raw.parse::<BloodType>() {
        Ok(blood_type) => (StatusCode::OK, Json(blood_type.compatibility())).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
