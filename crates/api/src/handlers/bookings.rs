use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use coachdesk_core::{
    models::booking::{CreateBookingRequest, CreatedBooking},
    service::SchedulingService,
};

use crate::{ApiState, middleware::error_handling::AppError};

/// Stores a reservation and returns its id for linking a client profile.
///
/// Availability is not re-checked here; the calendar only offers open slots.
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedBooking>), AppError> {
    let Json(request) = payload?;
    let consultation = request.validate()?;

    let created = state.service.create_reservation(&consultation).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
