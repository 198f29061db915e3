use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::directory::{BloodTypeFilter, DirectoryError, DonorDirectory, DonorQuery};
use super::domain::DonorId;
use crate::session::SessionContext;

pub struct DonorDirectoryState {
    pub directory: DonorDirectory,
    /// Fixed reference date for tests; `None` uses the local calendar date.
    pub today: Option<NaiveDate>,
}

impl DonorDirectoryState {
    pub fn new(directory: DonorDirectory) -> Self {
        Self {
            directory,
            today: None,
        }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DonorQueryParams {
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

impl DonorQueryParams {
    pub fn into_query(self) -> Result<DonorQuery, DirectoryError> {
        let blood_type = match self.blood_type.as_deref() {
            Some(raw) => raw.parse::<BloodTypeFilter>()?,
            None => BloodTypeFilter::All,
        };
        Ok(DonorQuery {
            blood_type,
            search: self.search.unwrap_or_default(),
            page: self.page.unwrap_or(1),
        })
    }
}

/// Staff-only donor directory routes.
pub fn donor_router(state: Arc<DonorDirectoryState>) -> Router {
    Router::new()
        .route("/api/v1/donors", get(list_handler))
        .route("/api/v1/donors/stats", get(stats_handler))
        .route("/api/v1/donors/:donor_id", get(donor_handler))
        .with_state(state)
}

fn error_response(error: DirectoryError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (error.status_code(), Json(payload)).into_response()
}

fn staff_only(headers: &HeaderMap) -> Result<(), DirectoryError> {
    SessionContext::from_headers(headers).require_staff()?;
    Ok(())
}

pub(crate) async fn list_handler(
    State(state): State<Arc<DonorDirectoryState>>,
    headers: HeaderMap,
    Query(params): Query<DonorQueryParams>,
) -> Response {
    let result = staff_only(&headers)
        .and_then(|_| params.into_query())
        .map(|query| state.directory.query(&query, state.today()));

    match result {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stats_handler(
    State(state): State<Arc<DonorDirectoryState>>,
    headers: HeaderMap,
) -> Response {
    match staff_only(&headers).map(|_| state.directory.statistics(state.today())) {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn donor_handler(
    State(state): State<Arc<DonorDirectoryState>>,
    headers: HeaderMap,
    Path(donor_id): Path<u32>,
) -> Response {
    let result =
        staff_only(&headers).and_then(|_| state.directory.get(DonorId(donor_id), state.today()));

    match result {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}
