use axum::http::StatusCode;
use coachdesk_core::models::booking::CreatedRecord;
use coachdesk_store::schema::fields;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

fn client_body() -> Value {
    json!({
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": "grace@example.com",
        "phone": "555-0100",
        "relationship": "married",
        "householdSize": 4,
        "ageRange": "35-44",
        "employmentStatus": "Self-employed",
        "reasonForVisit": "Debt Management",
        "currentDebtType": ["Student Loans", "Car Loan"],
        "preferredContactMethod": "Phone",
        "consent": true,
        "bookedRecordId": "recBooking"
    })
}

#[tokio::test]
async fn test_create_client_links_reservation() {
    let ctx = TestContext::new();

    let response = ctx.server.post("/api/clients").json(&client_body()).await;

    response.assert_status(StatusCode::CREATED);
    let created: CreatedRecord = response.json();
    assert!(created.success);

    let stored = ctx.store.records("Clients").await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].fields.get(fields::BOOKED_RECORD), Some(&json!(["recBooking"])));
    assert_eq!(stored[0].fields.get(fields::AGE_RANGE), Some(&json!("35-44")));
    assert_eq!(
        stored[0].fields.get(fields::CURRENT_DEBT_TYPE),
        Some(&json!(["Student Loans", "Car Loan"]))
    );
}

#[tokio::test]
async fn test_consent_is_required() {
    let ctx = TestContext::new();
    let mut body = client_body();
    body["consent"] = json!(false);

    let response = ctx.server.post("/api/clients").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Missing required fields"}));
}

#[tokio::test]
async fn test_unknown_enum_value_is_rejected() {
    let ctx = TestContext::new();
    let mut body = client_body();
    body["reasonForVisit"] = json!("Lottery Strategy");

    let response = ctx.server.post("/api/clients").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.store.records("Clients").await.is_empty());
}
