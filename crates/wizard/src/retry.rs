use std::{future::Future, time::Duration};

use coachdesk_core::errors::BookingResult;
use tracing::{debug, warn};

/// Fixed-delay retry for calls that may hit a transient store failure.
///
/// Only errors reporting [`is_retryable`](coachdesk_core::errors::BookingError::is_retryable)
/// are repeated; anything else is returned on the first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// No waiting between attempts.
    pub fn immediate(max_retries: u32) -> Self {
        Self::new(max_retries, Duration::ZERO)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    pub async fn run<T, F, Fut>(&self, operation: &str, mut call: F) -> BookingResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = BookingResult<T>>,
    {
        let mut attempt = 1;
        loop {
            match call().await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!(operation, attempt, "Succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(err) if err.is_retryable() && attempt < self.max_attempts() => {
                    warn!(operation, attempt, "Retrying after failure: {}", err);
                    attempt += 1;
                    if !self.delay.is_zero() {
                        tokio::time::sleep(self.delay).await;
                    }
                }
                Err(err) => return Err(err),
            }
        }
    }
}
