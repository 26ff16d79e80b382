use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    /// Whether repeating the same call may succeed.
    ///
    /// Validation and configuration problems never go away on their own, so
    /// only store-side failures qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BookingError::Unavailable(_) | BookingError::Database(_))
    }

    /// Text that is safe to show a visitor.
    ///
    /// Validation messages are written for humans already; everything else is
    /// replaced with a generic sentence so store details never leak.
    pub fn public_message(&self) -> String {
        match self {
            BookingError::Validation(message) => message.clone(),
            BookingError::NotFound(_) => "The requested item could not be found".to_string(),
            BookingError::Unavailable(_) => {
                "The booking service is temporarily unavailable. Please try again shortly."
                    .to_string()
            }
            BookingError::Configuration(_)
            | BookingError::Database(_)
            | BookingError::Internal(_) => {
                "Something went wrong on our side. Please try again.".to_string()
            }
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
