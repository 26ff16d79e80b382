use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::hhmm;

/// One bookable hour in the business timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingType {
    #[default]
    #[serde(rename = "Free Consultation")]
    Free,
    #[serde(rename = "Paid Consultation")]
    Paid,
}

impl BookingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingType::Free => "Free Consultation",
            BookingType::Paid => "Paid Consultation",
        }
    }
}

/// A validated reservation, ready to be written to the store.
///
/// `date_booked` and the slot times are business-timezone wall-clock values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub booking_type: BookingType,
    pub date_booked: NaiveDate,
    #[serde(with = "hhmm")]
    pub time_slot_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub time_slot_end: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_local_time: Option<String>,
}

/// Body of `POST /api/bookings` as it arrives on the wire.
///
/// Every field is optional at this stage so a missing value becomes a
/// readable 400 instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub booking_type: Option<BookingType>,
    pub date_booked: String,
    pub time_slot_start: String,
    pub time_slot_end: String,
    pub user_timezone: Option<String>,
    pub user_local_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBooking {
    pub id: String,
    pub success: bool,
    /// Absolute slot start, present when the store keeps the combined instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_and_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    pub id: String,
    pub success: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookedDatesQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}
