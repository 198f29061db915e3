use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{DonationRecord, DonationRecordId, TestResult};
use super::registry::{DonationRecordRegistry, RecordError, RecordQuery, TestResultFilter};
use crate::session::SessionContext;

#[derive(Debug, Default, Deserialize)]
pub struct RecordQueryParams {
    #[serde(default)]
    pub test_result: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

impl RecordQueryParams {
    pub fn into_query(self) -> Result<RecordQuery, RecordError> {
        let test_result = match self.test_result.as_deref() {
            Some(raw) => raw.parse::<TestResultFilter>()?,
            None => TestResultFilter::All,
        };
        Ok(RecordQuery {
            test_result,
            search: self.search.unwrap_or_default(),
            page: self.page.unwrap_or(1),
        })
    }
}

/// Body of a record amendment; absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct RecordUpdateRequest {
    #[serde(default)]
    pub test_result: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Staff-only donation record routes.
pub fn donation_record_router(registry: DonationRecordRegistry) -> Router {
    Router::new()
        .route("/api/v1/donation-records", get(list_handler))
        .route("/api/v1/donation-records/stats", get(stats_handler))
        .route(
            "/api/v1/donation-records/:record_id",
            get(record_handler).patch(update_handler),
        )
        .with_state(registry)
}

fn error_response(error: RecordError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (error.status_code(), Json(payload)).into_response()
}

fn staff_only(headers: &HeaderMap) -> Result<(), RecordError> {
    SessionContext::from_headers(headers).require_staff()?;
    Ok(())
}

pub(crate) async fn list_handler(
    State(registry): State<DonationRecordRegistry>,
    headers: HeaderMap,
    Query(params): Query<RecordQueryParams>,
) -> Response {
    let result = staff_only(&headers)
        .and_then(|_| params.into_query())
        .and_then(|query| registry.query(&query));

    match result {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stats_handler(
    State(registry): State<DonationRecordRegistry>,
    headers: HeaderMap,
) -> Response {
    match staff_only(&headers).and_then(|_| registry.statistics()) {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn record_handler(
    State(registry): State<DonationRecordRegistry>,
    headers: HeaderMap,
    Path(record_id): Path<String>,
) -> Response {
    let id = DonationRecordId(record_id);
    match staff_only(&headers).and_then(|_| registry.get(&id)) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler(
    State(registry): State<DonationRecordRegistry>,
    headers: HeaderMap,
    Path(record_id): Path<String>,
    Json(request): Json<RecordUpdateRequest>,
) -> Response {
    let id = DonationRecordId(record_id);
    match staff_only(&headers).and_then(|_| apply_update(&registry, &id, request)) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

fn apply_update(
    registry: &DonationRecordRegistry,
    id: &DonationRecordId,
    request: RecordUpdateRequest,
) -> Result<DonationRecord, RecordError> {
    // Validate the whole body before touching the record.
    let test_result = request
        .test_result
        .as_deref()
        .map(|raw| raw.parse::<TestResult>().map_err(RecordError::InvalidTestResult))
        .transpose()?;

    let mut record = registry.get(id)?;
    if let Some(result) = test_result {
        record = registry.update_test_result(id, result)?;
    }
    if let Some(note) = request.note.as_deref() {
        record = registry.update_note(id, note)?;
    }
    Ok(record)
}
