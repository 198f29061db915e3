use crate::infra::{AppState, Dashboard};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use donor_desk::workflows::appointments::appointment_router;
use donor_desk::workflows::blood_units::blood_unit_router;
use donor_desk::workflows::donors::donor_router;
use donor_desk::workflows::eligibility::eligibility_router;
use donor_desk::workflows::records::donation_record_router;
use serde_json::json;

pub(crate) fn with_dashboard_routes(dashboard: &Dashboard) -> axum::Router {
    eligibility_router(dashboard.eligibility.clone())
        .merge(appointment_router(dashboard.appointments.clone()))
        .merge(blood_unit_router(dashboard.units.clone()))
        .merge(donor_router(dashboard.donors.clone()))
        .merge(donation_record_router(dashboard.records.clone()))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
