use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::audit::TransitionLog;
use super::domain::{BloodUnitId, Locale};
use super::error::WorkflowError;
use super::query::{SortMode, StatusFilter, UnitQuery};
use super::repository::BloodUnitRepository;
use super::service::BloodUnitWorkflow;
use crate::session::SessionContext;

/// Query string accepted by the unit listing.
#[derive(Debug, Default, Deserialize)]
pub struct UnitQueryParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub locale: Option<String>,
}

impl UnitQueryParams {
    pub fn into_query(self, default_locale: Locale) -> Result<UnitQuery, WorkflowError> {
        let status = match self.status.as_deref() {
            Some(raw) => raw.parse::<StatusFilter>()?,
            None => StatusFilter::All,
        };
        let sort = match self.sort.as_deref() {
            Some(raw) => raw.parse::<SortMode>()?,
            None => SortMode::default(),
        };
        let locale = match self.locale {
            Some(raw) => raw.parse::<Locale>().map_err(WorkflowError::InvalidLocale)?,
            None => default_locale,
        };

        Ok(UnitQuery {
            status,
            search: self.search.unwrap_or_default(),
            sort,
            page: self.page.unwrap_or(1),
            locale,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub status: String,
    #[serde(default)]
    pub expected_version: Option<u64>,
}

/// Staff-only routes for the blood-unit inventory.
pub fn blood_unit_router<R, L>(workflow: Arc<BloodUnitWorkflow<R, L>>) -> Router
where
    R: BloodUnitRepository + 'static,
    L: TransitionLog + 'static,
{
    Router::new()
        .route("/api/v1/blood-units", get(list_handler::<R, L>))
        .route("/api/v1/blood-units/stats", get(stats_handler::<R, L>))
        .route("/api/v1/blood-units/:unit_id", get(unit_handler::<R, L>))
        .route(
            "/api/v1/blood-units/:unit_id/history",
            get(history_handler::<R, L>),
        )
        .route(
            "/api/v1/blood-units/:unit_id/status",
            post(transition_handler::<R, L>),
        )
        .with_state(workflow)
}

pub(crate) fn error_response(error: WorkflowError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (error.status_code(), Json(payload)).into_response()
}

fn staff_only(headers: &HeaderMap) -> Result<(), WorkflowError> {
    SessionContext::from_headers(headers).require_staff()?;
    Ok(())
}

pub(crate) async fn list_handler<R, L>(
    State(workflow): State<Arc<BloodUnitWorkflow<R, L>>>,
    headers: HeaderMap,
    Query(params): Query<UnitQueryParams>,
) -> Response
where
    R: BloodUnitRepository + 'static,
    L: TransitionLog + 'static,
{
    let result = staff_only(&headers)
        .and_then(|_| params.into_query(workflow.default_locale()))
        .and_then(|query| workflow.query(&query));

    match result {
        Ok(page) => {
            let page = page.map(|unit| workflow.view(unit));
            (StatusCode::OK, Json(page)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stats_handler<R, L>(
    State(workflow): State<Arc<BloodUnitWorkflow<R, L>>>,
    headers: HeaderMap,
) -> Response
where
    R: BloodUnitRepository + 'static,
    L: TransitionLog + 'static,
{
    match staff_only(&headers).and_then(|_| workflow.statistics()) {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn unit_handler<R, L>(
    State(workflow): State<Arc<BloodUnitWorkflow<R, L>>>,
    headers: HeaderMap,
    Path(unit_id): Path<String>,
) -> Response
where
    R: BloodUnitRepository + 'static,
    L: TransitionLog + 'static,
{
    let id = BloodUnitId(unit_id);
    match staff_only(&headers).and_then(|_| workflow.get(&id)) {
        Ok(unit) => (StatusCode::OK, Json(workflow.view(unit))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn history_handler<R, L>(
    State(workflow): State<Arc<BloodUnitWorkflow<R, L>>>,
    headers: HeaderMap,
    Path(unit_id): Path<String>,
) -> Response
where
    R: BloodUnitRepository + 'static,
    L: TransitionLog + 'static,
{
    let id = BloodUnitId(unit_id);
    match staff_only(&headers).and_then(|_| workflow.history(&id)) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn transition_handler<R, L>(
    State(workflow): State<Arc<BloodUnitWorkflow<R, L>>>,
    headers: HeaderMap,
    Path(unit_id): Path<String>,
    Json(request): Json<TransitionRequest>,
) -> Response
where
    R: BloodUnitRepository + 'static,
    L: TransitionLog + 'static,
{
    let id = BloodUnitId(unit_id);
    let result = staff_only(&headers).and_then(|_| match request.expected_version {
        Some(version) => workflow.transition_checked(&id, &request.status, version),
        None => workflow.transition(&id, &request.status),
    });

    match result {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}
