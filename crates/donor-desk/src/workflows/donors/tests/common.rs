use std::sync::Arc;

use axum::http::{HeaderValue, Request};
use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::session::{LOGGED_IN_HEADER, ROLE_HEADER};
use crate::workflows::blood_type::BloodType;
use crate::workflows::donors::{donor_router, Donor, DonorDirectory, DonorDirectoryState, DonorId};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

pub(super) fn donor(id: u32, name: &str, blood_type: BloodType, days_ago: Option<i64>) -> Donor {
    Donor {
        id: DonorId(id),
        name: name.to_string(),
        email: format!("donor{id}@example.com"),
        phone: format!("09000000{id:02}"),
        blood_type,
        birth_date: NaiveDate::from_ymd_opt(1990, 6, 2).expect("valid date"),
        last_donation_date: days_ago.map(|days| today() - Duration::days(days)),
        total_donations: if days_ago.is_some() { 3 } else { 0 },
    }
}

pub(super) fn roster() -> Vec<Donor> {
    vec![
        donor(1, "Nguyen Van An", BloodType::OPositive, Some(90)),
        donor(2, "Tran Thi Binh", BloodType::APositive, Some(56)),
        donor(3, "Le Van Cuong", BloodType::BPositive, Some(55)),
        donor(4, "Pham Thi Dung", BloodType::APositive, Some(30)),
        donor(5, "Hoang Van Em", BloodType::AbNegative, Some(29)),
        donor(6, "Vu Thi Giang", BloodType::ONegative, None),
    ]
}

pub(super) fn directory() -> DonorDirectory {
    DonorDirectory::new(roster())
}

pub(super) fn router() -> axum::Router {
    let mut state = DonorDirectoryState::new(directory());
    state.today = Some(today());
    donor_router(Arc::new(state))
}

pub(super) fn as_staff<B>(mut request: Request<B>) -> Request<B> {
    let headers = request.headers_mut();
    headers.insert(LOGGED_IN_HEADER, HeaderValue::from_static("true"));
    headers.insert(ROLE_HEADER, HeaderValue::from_static("staff"));
    request
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
