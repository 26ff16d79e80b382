use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use coachdesk_core::models::{booking::CreatedRecord, contact::ContactSubmission};

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn submit_contact(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedRecord>), AppError> {
    let Json(submission) = payload?;
    let submission = submission.validate()?;

    let created = state.service.submit_contact(&submission).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
