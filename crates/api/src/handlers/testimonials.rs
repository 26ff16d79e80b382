use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use coachdesk_core::models::contact::{Testimonial, TestimonialsQuery};
use coachdesk_store::repositories::testimonials::DEFAULT_LIMIT;

use crate::{ApiState, middleware::error_handling::AppError};

/// Unparseable or zero values fall back to the default.
fn positive_or(value: Option<&str>, default: usize) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[axum::debug_handler]
pub async fn list_testimonials(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<TestimonialsQuery>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    let limit = positive_or(query.limit.as_deref(), DEFAULT_LIMIT);
    let offset = positive_or(query.offset.as_deref(), 0);

    let testimonials = state.service.testimonials(limit, offset).await?;
    Ok(Json(testimonials))
}
