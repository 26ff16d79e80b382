use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use coachdesk_core::{
    models::{booking::CreatedRecord, client::CreateClientRequest},
    service::SchedulingService,
};

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn create_client(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateClientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedRecord>), AppError> {
    let Json(request) = payload?;
    let profile = request.validate()?;

    let created = state.service.create_client(&profile).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
