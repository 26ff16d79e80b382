use coachdesk_core::models::contact::Testimonial;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::TestContext;

async fn seeded() -> TestContext {
    let ctx = TestContext::new();
    let rows = (1..=12)
        .map(|day| {
            json!({
                "Name": format!("Client {}", day),
                "Notes": "Very helpful session",
                "DateCreated": format!("2025-03-{:02}", day)
            })
        })
        .collect();
    ctx.seed("Testimonials", rows).await;
    ctx
}

#[tokio::test]
async fn test_default_limit_is_ten_newest_first() {
    let ctx = seeded().await;

    let testimonials: Vec<Testimonial> = ctx.server.get("/api/testimonials").await.json();

    assert_eq!(testimonials.len(), 10);
    assert_eq!(testimonials[0].name, "Client 12");
    assert_eq!(testimonials[0].date_created, "2025-03-12");
}

#[tokio::test]
async fn test_limit_and_offset() {
    let ctx = seeded().await;

    let testimonials: Vec<Testimonial> = ctx
        .server
        .get("/api/testimonials")
        .add_query_param("limit", "3")
        .add_query_param("offset", "2")
        .await
        .json();

    let names: Vec<_> = testimonials.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Client 10", "Client 9", "Client 8"]);
}

#[tokio::test]
async fn test_unparseable_limit_falls_back_to_default() {
    let ctx = seeded().await;

    let testimonials: Vec<Testimonial> = ctx
        .server
        .get("/api/testimonials")
        .add_query_param("limit", "lots")
        .await
        .json();

    assert_eq!(testimonials.len(), 10);
}

#[tokio::test]
async fn test_response_is_camel_case() {
    let ctx = seeded().await;

    let response = ctx
        .server
        .get("/api/testimonials")
        .add_query_param("limit", "1")
        .await;

    response.assert_json(&json!([{
        "id": "recSeed0011",
        "name": "Client 12",
        "notes": "Very helpful session",
        "dateCreated": "2025-03-12"
    }]));
}
