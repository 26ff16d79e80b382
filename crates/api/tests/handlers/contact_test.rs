use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::{TestContext, object};

#[tokio::test]
async fn test_contact_submission_is_trimmed_and_stored() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/contact")
        .json(&json!({
            "Name": "  Ada  ",
            "Email": "ada@example.com ",
            "Phone": "",
            "Message": " Hello there "
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let stored = ctx.store.records("Contacts").await;
    assert_eq!(
        stored[0].fields,
        object(json!({"Name": "Ada", "Email": "ada@example.com", "Message": "Hello there"}))
    );
}

#[tokio::test]
async fn test_contact_requires_name_then_email() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/contact")
        .json(&json!({"Name": " ", "Email": ""}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Name is required"}));

    let response = ctx
        .server
        .post("/api/contact")
        .json(&json!({"Name": "Ada"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Email is required"}));
}
