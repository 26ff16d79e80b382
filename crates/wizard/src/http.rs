//! [`SchedulingService`] over the public HTTP API.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use coachdesk_core::{
    errors::{BookingError, BookingResult},
    models::{
        booking::{Consultation, CreatedBooking, CreatedRecord, TimeSlot},
        client::ClientProfile,
    },
    service::SchedulingService,
};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> BookingResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(BookingError::Configuration("API base URL is empty".to_string()));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| BookingError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> BookingResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| BookingError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| BookingError::Database(eyre::eyre!("Unreadable API response: {}", e)));
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());
        debug!(status = status.as_u16(), "API call failed: {}", message);

        Err(match status {
            StatusCode::BAD_REQUEST => BookingError::Validation(message),
            StatusCode::NOT_FOUND => BookingError::NotFound(message),
            StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::TOO_MANY_REQUESTS
            | StatusCode::REQUEST_TIMEOUT => BookingError::Unavailable(message),
            _ => BookingError::Database(eyre::eyre!("HTTP {}: {}", status.as_u16(), message)),
        })
    }
}

#[async_trait]
impl SchedulingService for ApiClient {
    async fn available_slots(&self, date: NaiveDate) -> BookingResult<Vec<TimeSlot>> {
        let request = self
            .client
            .get(self.url("/api/availability"))
            .query(&[("date", date.format("%Y-%m-%d").to_string())]);
        self.send(request).await
    }

    async fn fully_booked_dates(&self, year: i32, month: u32) -> BookingResult<BTreeSet<NaiveDate>> {
        let request = self
            .client
            .get(self.url("/api/booked-dates"))
            .query(&[("year", year.to_string()), ("month", month.to_string())]);
        self.send(request).await
    }

    async fn create_reservation(&self, consultation: &Consultation) -> BookingResult<CreatedBooking> {
        let request = self.client.post(self.url("/api/bookings")).json(consultation);
        self.send(request).await
    }

    async fn create_client(&self, profile: &ClientProfile) -> BookingResult<CreatedRecord> {
        let request = self.client.post(self.url("/api/clients")).json(profile);
        self.send(request).await
    }
}
