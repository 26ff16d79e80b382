use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    errors::BookingResult,
    models::{
        booking::{Consultation, CreatedBooking, CreatedRecord, TimeSlot},
        client::ClientProfile,
    },
};

/// The read and write operations the booking wizard drives.
///
/// Implemented in-process by the API's booking service and over HTTP by the
/// wizard's API client.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait SchedulingService: Send + Sync {
    /// All eight slots of `date`, taken ones flagged unavailable.
    async fn available_slots(&self, date: NaiveDate) -> BookingResult<Vec<TimeSlot>>;

    /// Days of the month on which every slot is taken.
    async fn fully_booked_dates(&self, year: i32, month: u32) -> BookingResult<BTreeSet<NaiveDate>>;

    async fn create_reservation(&self, consultation: &Consultation) -> BookingResult<CreatedBooking>;

    async fn create_client(&self, profile: &ClientProfile) -> BookingResult<CreatedRecord>;
}
