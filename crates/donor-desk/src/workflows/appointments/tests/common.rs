use std::sync::Arc;

use axum::response::Response;
use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;

use crate::workflows::appointments::{
    appointment_router, AppointmentBook, AppointmentRequest, AppointmentState, BloodDrive,
    BloodDriveCatalog,
};

pub(super) fn today() -> NaiveDate {
    date(2024, 6, 1)
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn book() -> AppointmentBook {
    AppointmentBook::new(crate::seed::locations())
}

/// A complete booking at the main centre.
pub(super) fn request(email: &str, day: NaiveDate, time: &str) -> AppointmentRequest {
    AppointmentRequest {
        first_name: "Lan".to_string(),
        last_name: "Ngo".to_string(),
        email: email.to_string(),
        phone: "0901234567".to_string(),
        location_id: Some(1),
        date: Some(day),
        time: time.to_string(),
        blood_type: Some("O+".to_string()),
        first_time: true,
    }
}

fn drive(id: u32, name: &str, distance_miles: f64) -> BloodDrive {
    BloodDrive {
        id,
        name: name.to_string(),
        address: "1 Test St".to_string(),
        city: "Anytown".to_string(),
        date: date(2024, 6, 10),
        starts_at: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
        ends_at: NaiveTime::from_hms_opt(15, 0, 0).expect("valid time"),
        distance_miles,
    }
}

pub(super) fn catalog() -> BloodDriveCatalog {
    BloodDriveCatalog::new(vec![
        drive(1, "Library", 4.2),
        drive(2, "Town Hall", 0.8),
        drive(3, "Stadium", 2.5),
    ])
}

pub(super) fn router() -> axum::Router {
    let mut state = AppointmentState::new(book(), catalog());
    state.today = Some(today());
    appointment_router(Arc::new(state))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
