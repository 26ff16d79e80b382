//! # Error Handling Middleware
//!
//! Maps [`BookingError`] onto HTTP status codes and a `{"error": message}`
//! body. Only validation messages reach the client verbatim; everything else
//! is replaced by its public message and the detail is logged.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coachdesk_core::errors::BookingError;
use serde_json::json;
use tracing::{error, warn};

/// Application error wrapper that provides HTTP status code mapping
///
/// Handlers return `Result<_, AppError>` and use `?` on anything yielding a
/// [`BookingError`].
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            BookingError::Configuration(_)
            | BookingError::Database(_)
            | BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(status = status.as_u16(), "Request failed: {}", self.0);
        } else {
            warn!(status = status.as_u16(), "Request rejected: {}", self.0);
        }

        let body = Json(json!({ "error": self.0.public_message() }));
        (status, body).into_response()
    }
}

/// Allows `?` on functions returning `BookingResult<T>` inside handlers.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Unreadable JSON bodies become a 400 in the usual error shape.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(BookingError::Validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    }
}
