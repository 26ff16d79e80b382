//! # Calendar Handlers
//!
//! Read-only views the booking calendar renders from: the hourly slot grid of
//! one day, and the days of a month that have no slot left.

use std::{collections::BTreeSet, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use coachdesk_core::{
    calendar::MonthKey,
    errors::BookingError,
    models::booking::{AvailabilityQuery, BookedDatesQuery, TimeSlot},
    service::SchedulingService,
    validation,
};

use crate::{ApiState, middleware::error_handling::AppError};

const MONTH_PARAMS_REQUIRED: &str = "Valid year and month (1-12) parameters are required";

/// All eight slots of a day, taken ones flagged `available: false`.
///
/// ```text
/// GET /api/availability?date=2025-11-21
/// ```
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<TimeSlot>>, AppError> {
    let date = query
        .date
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| BookingError::Validation("Date parameter is required".to_string()))?;
    let date = validation::parse_date(date)?;

    let slots = state.service.available_slots(date).await?;
    Ok(Json(slots))
}

/// Fully booked days of a month as `YYYY-MM-DD` strings.
///
/// ```text
/// GET /api/booked-dates?year=2025&month=11
/// ```
#[axum::debug_handler]
pub async fn get_booked_dates(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<BookedDatesQuery>,
) -> Result<Json<BTreeSet<NaiveDate>>, AppError> {
    let month = parse_month(&query)?;

    let dates = state
        .service
        .fully_booked_dates(month.year, month.month)
        .await?;
    Ok(Json(dates))
}

fn parse_month(query: &BookedDatesQuery) -> Result<MonthKey, BookingError> {
    let invalid = || BookingError::Validation(MONTH_PARAMS_REQUIRED.to_string());

    let year: i32 = query
        .year
        .as_deref()
        .and_then(|y| y.trim().parse().ok())
        .ok_or_else(invalid)?;
    let month: u32 = query
        .month
        .as_deref()
        .and_then(|m| m.trim().parse().ok())
        .ok_or_else(invalid)?;

    MonthKey::new(year, month)
}
