use std::{env, time::Duration};

use coachdesk_core::errors::BookingResult;

use crate::{http::ApiClient, retry::RetryPolicy, wizard::BookingWizard};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Where the wizard finds the booking API and how hard it retries.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    pub api_base_url: String,
    pub retry: RetryPolicy,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

impl WizardConfig {
    /// Reads `WIZARD_API_URL`, `WIZARD_MAX_RETRIES` and
    /// `WIZARD_RETRY_DELAY_MS`, keeping defaults for anything unset or
    /// unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_base_url = env::var("WIZARD_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_base_url);
        let max_retries = env::var("WIZARD_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.retry.max_retries);
        let delay = env::var("WIZARD_RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.retry.delay);

        Self {
            api_base_url,
            retry: RetryPolicy::new(max_retries, delay),
        }
    }

    /// A wizard talking to the configured API.
    pub fn connect(&self) -> BookingResult<BookingWizard<ApiClient>> {
        let client = ApiClient::new(&self.api_base_url)?;
        Ok(BookingWizard::new(client, self.retry))
    }
}
