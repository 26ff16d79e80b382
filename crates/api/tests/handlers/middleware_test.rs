use axum::{http::StatusCode, response::IntoResponse};
use coachdesk_api::middleware::error_handling::AppError;
use coachdesk_core::errors::BookingError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use crate::test_utils::TestContext;

#[rstest]
#[case(BookingError::NotFound("recX".into()), StatusCode::NOT_FOUND)]
#[case(BookingError::Validation("Invalid input".into()), StatusCode::BAD_REQUEST)]
#[case(BookingError::Unavailable("HTTP 503".into()), StatusCode::SERVICE_UNAVAILABLE)]
#[case(BookingError::Configuration("no token".into()), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(BookingError::Database(eyre::eyre!("decode failed")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(BookingError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    let response = AppError(error).into_response();

    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_health_reports_store_backend() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "ok", "store": "memory"}));
}

#[tokio::test]
async fn test_version() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/version").await;

    response.assert_json(&json!({"version": env!("CARGO_PKG_VERSION")}));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let ctx = TestContext::new();

    ctx.server
        .get("/api/nope")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
