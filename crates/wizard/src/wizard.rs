//! # Booking Wizard
//!
//! Four steps, one owner:
//!
//! ```text
//! Calendar --select_date--> TimeSlots --select_slot--> ContactInfo --submit--> Success
//!    ^                          |                          |
//!    +-------- back ------------+                          |
//!                               ^-------- back ------------+
//! ```
//!
//! Every transition takes `&mut self`, so resolver calls are awaited one at a
//! time in the order read, read, write. A failed read degrades to an empty
//! result after the retry policy gives up; a failed reservation write keeps
//! the visitor on the contact step with an inline message.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use coachdesk_core::{
    calendar::{self, MonthKey},
    errors::BookingError,
    models::booking::{BookingType, Consultation, TimeSlot},
    service::SchedulingService,
    timezone::{self, UsaTimezone},
};
use tracing::{debug, info, warn};

use crate::{cache::MonthCache, form::ContactForm, retry::RetryPolicy};

pub const SLOTS_UNAVAILABLE: &str =
    "We couldn't load the available times for this day. Please try again or pick another day.";
pub const SELECT_SLOT_FIRST: &str = "Please select a date and time slot";
pub const BOOKING_FAILED: &str = "Failed to create booking. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Calendar,
    TimeSlots,
    ContactInfo,
    Success,
}

/// What the success screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub booking_id: String,
    /// `None` when the intake record could not be stored.
    pub client_id: Option<String>,
    pub date: NaiveDate,
    pub slot: TimeSlot,
    /// Slot range as the visitor's clock shows it.
    pub local_time: String,
    pub timezone: String,
}

pub struct BookingWizard<S> {
    service: S,
    retry: RetryPolicy,
    cache: MonthCache,
    /// Fixed reference day; `None` follows the host clock.
    today: Option<NaiveDate>,
    timezone: Tz,
    month: MonthKey,
    step: Step,
    selected_date: Option<NaiveDate>,
    slots: Vec<TimeSlot>,
    selected_slot: Option<TimeSlot>,
    notice: Option<String>,
    form_error: Option<String>,
    confirmation: Option<Confirmation>,
}

/// The detected host zone, else Eastern.
pub fn default_timezone() -> Tz {
    default_timezone_from(timezone::detect_timezone())
}

/// The detected zone is used unchanged for conversions; only the picker
/// label goes through the normalization table.
pub fn default_timezone_from(detected: Option<Tz>) -> Tz {
    detected.unwrap_or(UsaTimezone::Est.tz())
}

impl<S: SchedulingService> BookingWizard<S> {
    pub fn new(service: S, retry: RetryPolicy) -> Self {
        Self::build(service, retry, None)
    }

    /// A wizard whose notion of "today" is fixed, for past-date checks.
    pub fn with_today(service: S, retry: RetryPolicy, today: NaiveDate) -> Self {
        Self::build(service, retry, Some(today))
    }

    fn build(service: S, retry: RetryPolicy, today: Option<NaiveDate>) -> Self {
        let month = MonthKey::of(today.unwrap_or_else(|| Local::now().date_naive()));
        Self {
            service,
            retry,
            cache: MonthCache::new(),
            today,
            timezone: default_timezone(),
            month,
            step: Step::Calendar,
            selected_date: None,
            slots: Vec::new(),
            selected_slot: None,
            notice: None,
            form_error: None,
            confirmation: None,
        }
    }

    /// The reference day for past-date checks, read on every call.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_slot(&self) -> Option<TimeSlot> {
        self.selected_slot
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Which of the four picker zones the visitor's clock matches, if any.
    pub fn picker_zone(&self) -> Option<UsaTimezone> {
        timezone::normalize(self.timezone.name())
    }

    pub fn timezone_label(&self) -> String {
        match self.picker_zone() {
            Some(zone) => zone.friendly_name().to_string(),
            None => timezone::friendly_name(self.timezone.name()),
        }
    }

    pub fn cache(&self) -> &MonthCache {
        &self.cache
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Accepts `"PST"` style abbreviations or IANA ids. Unknown names are
    /// ignored and leave the current zone in place.
    pub fn set_timezone(&mut self, name: &str) -> bool {
        match timezone::resolve(name) {
            Some(tz) => {
                debug!(timezone = tz.name(), "Visitor timezone changed");
                self.timezone = tz;
                true
            }
            None => false,
        }
    }

    /// Sunday-first grid of the month being viewed.
    pub fn calendar_days(&self) -> Vec<Option<NaiveDate>> {
        calendar::days_in_month(self.month.year, self.month.month).unwrap_or_default()
    }

    /// Whether the calendar should let `date` be clicked.
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        calendar::is_weekday(date)
            && !calendar::is_past_date_on(date, self.today())
            && !self.cache.is_fully_booked(date)
    }

    /// Shows `month`, loading its fully booked days unless already cached.
    ///
    /// A load that keeps failing yields an empty set and is not cached.
    pub async fn view_month(&mut self, month: MonthKey) -> BTreeSet<NaiveDate> {
        self.month = month;

        if let Some(dates) = self.cache.get(month) {
            return dates.clone();
        }

        let service = &self.service;
        let result = self
            .retry
            .run("fully_booked_dates", move || {
                service.fully_booked_dates(month.year, month.month)
            })
            .await;

        match result {
            Ok(dates) => {
                self.cache.insert(month, dates.clone());
                dates
            }
            Err(err) => {
                warn!(%month, "Showing month without booked-day markers: {}", err);
                BTreeSet::new()
            }
        }
    }

    pub async fn next_month(&mut self) -> BTreeSet<NaiveDate> {
        self.view_month(self.month.next()).await
    }

    pub async fn previous_month(&mut self) -> BTreeSet<NaiveDate> {
        self.view_month(self.month.previous()).await
    }

    /// Moves to the time slot step and loads the day's slots.
    ///
    /// Weekends, past days, fully booked days, or any call outside the
    /// calendar step are ignored and return `false`.
    pub async fn select_date(&mut self, date: NaiveDate) -> bool {
        if self.step != Step::Calendar || !self.is_selectable(date) {
            debug!(%date, step = ?self.step, "Date selection ignored");
            return false;
        }

        self.selected_date = Some(date);
        self.selected_slot = None;
        self.slots.clear();
        self.notice = None;
        self.step = Step::TimeSlots;

        let service = &self.service;
        let result = self
            .retry
            .run("available_slots", move || service.available_slots(date))
            .await;

        match result {
            Ok(slots) => self.slots = slots,
            Err(err) => {
                warn!(%date, "No time slots after retries: {}", err);
                self.notice = Some(SLOTS_UNAVAILABLE.to_string());
            }
        }
        true
    }

    /// Picks an open slot of the current list by its start time.
    pub fn select_slot(&mut self, start: NaiveTime) -> bool {
        if self.step != Step::TimeSlots {
            return false;
        }

        let Some(slot) = self
            .slots
            .iter()
            .find(|slot| slot.start == start && slot.available)
            .copied()
        else {
            return false;
        };

        self.selected_slot = Some(slot);
        self.form_error = None;
        self.step = Step::ContactInfo;
        true
    }

    pub fn back(&mut self) -> bool {
        match self.step {
            Step::TimeSlots => {
                self.step = Step::Calendar;
                self.selected_slot = None;
                true
            }
            Step::ContactInfo => {
                self.step = Step::TimeSlots;
                self.form_error = None;
                true
            }
            Step::Calendar | Step::Success => false,
        }
    }

    /// `"9:00 AM - 10:00 AM"` on the visitor's clock.
    pub fn slot_label(&self, date: NaiveDate, slot: &TimeSlot) -> String {
        let local = |time: NaiveTime| {
            timezone::convert_from_business(date, time, self.timezone).unwrap_or(time)
        };
        format!(
            "{} - {}",
            timezone::format_for_display(local(slot.start)),
            timezone::format_for_display(local(slot.end))
        )
    }

    /// Labels for every slot of the selected day.
    pub fn slot_labels(&self) -> Vec<(TimeSlot, String)> {
        let Some(date) = self.selected_date else {
            return Vec::new();
        };
        self.slots
            .iter()
            .map(|slot| (*slot, self.slot_label(date, slot)))
            .collect()
    }

    /// Validates the form, writes the reservation, then the linked client
    /// profile. Returns whether the wizard reached the success step.
    pub async fn submit(&mut self, form: &ContactForm) -> bool {
        if self.step != Step::ContactInfo {
            return false;
        }
        self.form_error = None;

        let (Some(date), Some(slot)) = (self.selected_date, self.selected_slot) else {
            self.form_error = Some(SELECT_SLOT_FIRST.to_string());
            return false;
        };

        if let Err(err) = form.validate() {
            self.form_error = Some(err.public_message());
            return false;
        }

        let local_time = self.slot_label(date, &slot);
        let consultation = Consultation {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            booking_type: BookingType::Free,
            date_booked: date,
            time_slot_start: slot.start,
            time_slot_end: slot.end,
            user_timezone: Some(self.timezone.name().to_string()),
            user_local_time: Some(local_time.clone()),
        };

        let booking = match self.service.create_reservation(&consultation).await {
            Ok(booking) => booking,
            Err(err) => {
                warn!(%date, "Reservation failed: {}", err);
                self.form_error = Some(match err {
                    BookingError::Validation(message) => message,
                    _ => BOOKING_FAILED.to_string(),
                });
                return false;
            }
        };
        info!(id = %booking.id, %date, "Reservation confirmed");

        let client_id = match form.to_profile(Some(booking.id.clone())) {
            Ok(profile) => match self.service.create_client(&profile).await {
                Ok(created) => Some(created.id),
                Err(err) => {
                    warn!(booking = %booking.id, "Client profile not stored: {}", err);
                    None
                }
            },
            Err(err) => {
                warn!(booking = %booking.id, "Client profile rejected: {}", err);
                None
            }
        };

        self.cache.invalidate(MonthKey::of(date));
        self.confirmation = Some(Confirmation {
            booking_id: booking.id,
            client_id,
            date,
            slot,
            local_time,
            timezone: self.timezone_label(),
        });
        self.step = Step::Success;
        true
    }

    /// Back to an empty calendar. The month cache and timezone are kept.
    pub fn close(&mut self) {
        self.step = Step::Calendar;
        self.selected_date = None;
        self.selected_slot = None;
        self.slots.clear();
        self.notice = None;
        self.form_error = None;
        self.confirmation = None;
    }
}
