use std::sync::Arc;

use axum::http::StatusCode;
use coachdesk_core::models::booking::{CreatedBooking, TimeSlot};
use coachdesk_store::{StoreError, mock::MockRecordStore, schema::fields};
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::{FirstName, LastName}},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, server_with};

fn booking_body(date: &str, start: &str, end: &str) -> Value {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    let email: String = SafeEmail().fake();
    json!({
        "firstName": first,
        "lastName": last,
        "email": email,
        "bookingType": "Free Consultation",
        "dateBooked": date,
        "timeSlotStart": start,
        "timeSlotEnd": end,
        "userTimezone": "America/Los_Angeles",
        "userLocalTime": "6:00 AM - 7:00 AM"
    })
}

#[test_log::test(tokio::test)]
async fn test_create_booking_persists_reservation() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&booking_body("2025-11-21", "09:00", "10:00"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: CreatedBooking = response.json();
    assert!(created.success);
    assert!(created.id.starts_with("rec"));

    let body: Value = response.json();
    assert_eq!(body["dateAndTime"], json!("2025-11-21T14:00:00Z"));

    let stored = ctx.store.records("Booked").await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, created.id);
    assert_eq!(stored[0].text(fields::DATE_AND_TIME), Some("2025-11-21T14:00:00.000Z"));
    assert_eq!(stored[0].text(fields::USER_LOCAL_TIME), Some("6:00 AM - 7:00 AM"));
}

#[tokio::test]
async fn test_booked_slot_shows_unavailable_afterwards() {
    let ctx = TestContext::new();

    ctx.server
        .post("/api/bookings")
        .json(&booking_body("2025-11-21", "09:00", "10:00"))
        .await
        .assert_status(StatusCode::CREATED);

    let slots: Vec<TimeSlot> = ctx
        .server
        .get("/api/availability")
        .add_query_param("date", "2025-11-21")
        .await
        .json();

    assert!(!slots[0].available);
    assert!(slots[1..].iter().all(|s| s.available));
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let ctx = TestContext::new();
    let mut body = booking_body("2025-11-21", "09:00", "10:00");
    body.as_object_mut().unwrap().remove("lastName");

    let response = ctx.server.post("/api/bookings").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Missing required fields"}));
    assert!(ctx.store.records("Booked").await.is_empty());
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let ctx = TestContext::new();
    let mut body = booking_body("2025-11-21", "09:00", "10:00");
    body["email"] = json!("not an email");

    let response = ctx.server.post("/api/bookings").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Invalid email format"}));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/bookings")
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_rejected_write_is_500_with_generic_message() {
    let mut store = MockRecordStore::new();
    store.expect_create_record().times(1).returning(|_, _| {
        Err(StoreError::Rejected {
            status: 422,
            message: "Unknown field name: \"dateAndTime\"".into(),
        })
    });
    let server = server_with(Arc::new(store));

    let response = server
        .post("/api/bookings")
        .json(&booking_body("2025-11-21", "09:00", "10:00"))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({"error": "Something went wrong on our side. Please try again."}));
}

#[tokio::test]
async fn test_get_is_not_allowed() {
    let ctx = TestContext::new();

    ctx.server
        .get("/api/bookings")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
