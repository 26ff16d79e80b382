use coachdesk_core::errors::BookingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Network failure, rate limiting or a 5xx from the store.
    #[error("Transient store failure: {0}")]
    Transient(String),

    #[error("Store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected store response: {0}")]
    Decode(String),

    #[error("Record store is not configured: {0}")]
    NotConfigured(String),
}

impl StoreError {
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Transient(_))
    }
}

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Transient(message) => BookingError::Unavailable(message),
            StoreError::NotConfigured(message) => BookingError::Configuration(message),
            other => BookingError::Database(eyre::Report::new(other)),
        }
    }
}
