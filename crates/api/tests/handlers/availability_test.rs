use std::sync::Arc;

use axum::http::StatusCode;
use coachdesk_core::models::booking::TimeSlot;
use coachdesk_store::{StoreError, mock::MockRecordStore};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, server_with};

fn taken(slots: &[TimeSlot]) -> Vec<String> {
    slots
        .iter()
        .filter(|s| !s.available)
        .map(|s| s.start.format("%H:%M").to_string())
        .collect()
}

#[tokio::test]
async fn test_empty_day_has_eight_open_slots() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get("/api/availability")
        .add_query_param("date", "2025-11-21")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 8);
    assert_eq!(body[0], json!({"start": "09:00", "end": "10:00", "available": true}));
    assert_eq!(body[7], json!({"start": "16:00", "end": "17:00", "available": true}));
}

#[tokio::test]
async fn test_reserved_hours_are_flagged_for_that_day_only() {
    let ctx = TestContext::new();
    ctx.seed_bookings(&[("2025-11-21", "09:00"), ("2025-11-21", "14:00"), ("2025-11-24", "10:00")])
        .await;
    // 15:00Z is 10:00 in New York
    ctx.seed("Booked", vec![json!({"dateAndTime": "2025-11-21T15:00:00.000Z"})])
        .await;

    let slots: Vec<TimeSlot> = ctx
        .server
        .get("/api/availability")
        .add_query_param("date", "2025-11-21")
        .await
        .json();

    assert_eq!(slots.len(), 8);
    assert_eq!(taken(&slots), vec!["09:00", "10:00", "14:00"]);
}

#[tokio::test]
async fn test_missing_date_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/availability").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Date parameter is required"}));
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get("/api/availability")
        .add_query_param("date", "21/11/2025")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_store_outage_is_503_with_generic_message() {
    let mut store = MockRecordStore::new();
    store
        .expect_list_records()
        .returning(|_, _| Err(StoreError::Transient("HTTP 429: rate limited".into())));
    let server = server_with(Arc::new(store));

    let response = server
        .get("/api/availability")
        .add_query_param("date", "2025-11-21")
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(!message.contains("429"));
}

#[tokio::test]
async fn test_fully_booked_dates() {
    let ctx = TestContext::new();
    let full_day: Vec<(&str, &str)> = ["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00"]
        .into_iter()
        .map(|start| ("2025-11-21", start))
        .collect();
    ctx.seed_bookings(&full_day).await;
    ctx.seed_bookings(&[("2025-11-24", "09:00"), ("2025-11-24", "10:00"), ("2025-12-01", "09:00")])
        .await;

    let response = ctx
        .server
        .get("/api/booked-dates")
        .add_query_param("year", "2025")
        .add_query_param("month", "11")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!(["2025-11-21"]));
}

#[tokio::test]
async fn test_booked_dates_requires_valid_month() {
    let ctx = TestContext::new();

    for (year, month) in [("2025", "13"), ("2025", "0"), ("", "11"), ("2025", "nov")] {
        let response = ctx
            .server
            .get("/api/booked-dates")
            .add_query_param("year", year)
            .add_query_param("month", month)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({"error": "Valid year and month (1-12) parameters are required"}));
    }
}
