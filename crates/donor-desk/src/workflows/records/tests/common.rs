use axum::http::{HeaderValue, Request};
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::session::{LOGGED_IN_HEADER, ROLE_HEADER};
use crate::workflows::donors::DonorId;
use crate::workflows::records::{
    donation_record_router, DonationRecord, DonationRecordId, DonationRecordRegistry,
    DonationType, TestResult,
};

pub(super) fn record(
    id: &str,
    donor_id: u32,
    donor_name: &str,
    day: u32,
    test_result: TestResult,
) -> DonationRecord {
    DonationRecord {
        id: DonationRecordId::from(id),
        donor_id: DonorId(donor_id),
        donor_name: donor_name.to_string(),
        donated_at: NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .expect("valid timestamp"),
        donor_weight_kg: 60,
        donor_temperature_c: 36.5,
        donation_type: DonationType::WholeBlood,
        volume_ml: 450,
        test_result,
        note: String::new(),
    }
}

pub(super) fn records() -> Vec<DonationRecord> {
    vec![
        record("DR20240115001", 1, "Nguyen Van Anh", 15, TestResult::Good),
        record("DR20240114001", 2, "Tran Thi Binh", 14, TestResult::Poor),
        record("DR20240113001", 3, "Le Minh Cuong", 13, TestResult::Good),
        record("DR20240112001", 12, "Pham Thi Dung", 12, TestResult::Poor),
        record("DR20240111001", 21, "Vo Van Em", 11, TestResult::Good),
    ]
}

pub(super) fn registry() -> DonationRecordRegistry {
    DonationRecordRegistry::new(records())
}

pub(super) fn router() -> axum::Router {
    donation_record_router(registry())
}

pub(super) fn as_staff<B>(mut request: Request<B>) -> Request<B> {
    let headers = request.headers_mut();
    headers.insert(LOGGED_IN_HEADER, HeaderValue::from_static("true"));
    headers.insert(ROLE_HEADER, HeaderValue::from_static("staff"));
    request
}

pub(super) fn ids(records: &[DonationRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
