use std::sync::Arc;

use axum::http::{HeaderValue, Request};
use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::session::{LOGGED_IN_HEADER, ROLE_HEADER};
use crate::workflows::blood_type::BloodType;
use crate::workflows::blood_units::{
    blood_unit_router, BloodUnit, BloodUnitId, BloodUnitWorkflow, MemoryBloodUnitRepository,
    MemoryTransitionLog, UnitStatus,
};
use crate::workflows::donors::DonorId;

pub(super) type Workflow = BloodUnitWorkflow<MemoryBloodUnitRepository, MemoryTransitionLog>;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn unit(
    id: &str,
    blood_type: BloodType,
    donated: NaiveDate,
    status: UnitStatus,
) -> BloodUnit {
    BloodUnit::new(
        BloodUnitId::from(id),
        blood_type,
        450,
        donated,
        donated + Duration::days(42),
        DonorId(1),
    )
    .expect("valid unit")
    .with_status(status)
}

/// Small mixed inventory used by most service tests.
pub(super) fn inventory() -> Vec<BloodUnit> {
    vec![
        unit("BU001", BloodType::APositive, date(2024, 1, 15), UnitStatus::Denied),
        unit("BU002", BloodType::ONegative, date(2024, 1, 14), UnitStatus::Pending),
        unit("BU003", BloodType::BPositive, date(2024, 1, 13), UnitStatus::Approved),
        unit("BU004", BloodType::AbNegative, date(2024, 1, 12), UnitStatus::Expired),
        unit("BU005", BloodType::APositive, date(2024, 1, 11), UnitStatus::Pending),
    ]
}

/// Twenty-five pending units donated on consecutive days.
pub(super) fn bulk_inventory() -> Vec<BloodUnit> {
    (0..25)
        .map(|index| {
            unit(
                &format!("BU{:03}", index + 1),
                BloodType::OPositive,
                date(2024, 2, 1) + Duration::days(index),
                UnitStatus::Pending,
            )
        })
        .collect()
}

pub(super) fn build_workflow(
    units: Vec<BloodUnit>,
) -> (Workflow, MemoryBloodUnitRepository, MemoryTransitionLog) {
    let repository = MemoryBloodUnitRepository::with_units(units).expect("unique ids");
    let log = MemoryTransitionLog::default();
    let workflow = BloodUnitWorkflow::new(Arc::new(repository.clone()), Arc::new(log.clone()));
    (workflow, repository, log)
}

pub(super) fn router(units: Vec<BloodUnit>) -> axum::Router {
    let (workflow, _, _) = build_workflow(units);
    blood_unit_router(Arc::new(workflow))
}

pub(super) fn as_staff<B>(mut request: Request<B>) -> Request<B> {
    let headers = request.headers_mut();
    headers.insert(LOGGED_IN_HEADER, HeaderValue::from_static("true"));
    headers.insert(ROLE_HEADER, HeaderValue::from_static("staff"));
    request
}

pub(super) fn ids(units: &[BloodUnit]) -> Vec<&str> {
    units.iter().map(|unit| unit.id.as_str()).collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
