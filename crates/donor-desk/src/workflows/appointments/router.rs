use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::book::{AppointmentBook, BookingError};
use super::domain::{Appointment, AppointmentRequest, TimeSlot};
use super::drives::BloodDriveCatalog;

/// Shared state for the donor-facing booking endpoints.
pub struct AppointmentState {
    pub book: AppointmentBook,
    pub drives: BloodDriveCatalog,
    /// Fixed reference date for tests; `None` uses the local calendar date.
    pub today: Option<NaiveDate>,
}

impl AppointmentState {
    pub fn new(book: AppointmentBook, drives: BloodDriveCatalog) -> Self {
        Self {
            book,
            drives,
            today: None,
        }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NextAppointmentParams {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DriveSearchParams {
    #[serde(default)]
    pub zip: String,
}

#[derive(Debug, Serialize)]
struct NextAppointment {
    appointment: Appointment,
    reminder: String,
}

/// Public routes: locations, time slots, bookings and the blood-drive finder.
pub fn appointment_router(state: Arc<AppointmentState>) -> Router {
    Router::new()
        .route("/api/v1/locations", get(locations_handler))
        .route("/api/v1/appointment-slots", get(slots_handler))
        .route("/api/v1/appointments", post(book_handler))
        .route("/api/v1/appointments/next", get(next_handler))
        .route("/api/v1/blood-drives", get(drives_handler))
        .with_state(state)
}

fn booking_error_response(error: BookingError) -> Response {
    let payload = json!({
        "error": error.to_string(),
        "field": error.field(),
    });
    (error.status_code(), Json(payload)).into_response()
}

pub(crate) async fn locations_handler(State(state): State<Arc<AppointmentState>>) -> Response {
    (StatusCode::OK, Json(state.book.locations())).into_response()
}

pub(crate) async fn slots_handler() -> Response {
    let slots: Vec<String> = TimeSlot::all().into_iter().map(TimeSlot::label).collect();
    (StatusCode::OK, Json(slots)).into_response()
}

pub(crate) async fn book_handler(
    State(state): State<Arc<AppointmentState>>,
    Json(request): Json<AppointmentRequest>,
) -> Response {
    match state.book.book(request, state.today()) {
        Ok(appointment) => (StatusCode::CREATED, Json(appointment)).into_response(),
        Err(error) => {
            info!(field = error.field(), %error, "appointment rejected");
            booking_error_response(error)
        }
    }
}

pub(crate) async fn next_handler(
    State(state): State<Arc<AppointmentState>>,
    Query(params): Query<NextAppointmentParams>,
) -> Response {
    match state
        .book
        .next_upcoming(params.email.as_deref(), state.today())
    {
        Ok(Some(appointment)) => {
            let reminder = appointment.reminder();
            (
                StatusCode::OK,
                Json(NextAppointment {
                    appointment,
                    reminder,
                }),
            )
                .into_response()
        }
        Ok(None) => {
            let payload = json!({ "error": "no upcoming appointment" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(error) => booking_error_response(error),
    }
}

pub(crate) async fn drives_handler(
    State(state): State<Arc<AppointmentState>>,
    Query(params): Query<DriveSearchParams>,
) -> Response {
    match state.drives.search(&params.zip) {
        Ok(drives) => (StatusCode::OK, Json(drives)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string(), "field": "zip" });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
