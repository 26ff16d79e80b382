//! Format-level checks applied before anything reaches the record store.

use chrono::{NaiveDate, NaiveTime};

use crate::{
    errors::{BookingError, BookingResult},
    models::{
        booking::{Consultation, CreateBookingRequest},
        client::{ClientProfile, CreateClientRequest},
        contact::ContactSubmission,
        hhmm,
    },
    timezone,
};

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const INVALID_EMAIL: &str = "Invalid email format";

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot with something on both sides.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn parse_date(value: &str) -> BookingResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        BookingError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", value))
    })
}

pub fn parse_time(value: &str) -> BookingResult<NaiveTime> {
    hhmm::parse(value).ok_or_else(|| {
        BookingError::Validation(format!("Invalid time '{}', expected HH:MM", value))
    })
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require_all(values: &[&str]) -> BookingResult<()> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(BookingError::Validation(MISSING_FIELDS.to_string()));
    }
    Ok(())
}

fn require_email(email: &str) -> BookingResult<()> {
    if !is_valid_email(email) {
        return Err(BookingError::Validation(INVALID_EMAIL.to_string()));
    }
    Ok(())
}

impl CreateBookingRequest {
    pub fn validate(self) -> BookingResult<Consultation> {
        require_all(&[
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.date_booked.as_str(),
            self.time_slot_start.as_str(),
            self.time_slot_end.as_str(),
        ])?;
        require_email(self.email.trim())?;

        let date_booked = parse_date(&self.date_booked)?;
        let time_slot_start = parse_time(&self.time_slot_start)?;
        let time_slot_end = parse_time(&self.time_slot_end)?;

        // The start must name a real instant on that day.
        timezone::business_to_utc(date_booked, time_slot_start)?;

        Ok(Consultation {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            booking_type: self.booking_type.unwrap_or_default(),
            date_booked,
            time_slot_start,
            time_slot_end,
            user_timezone: trimmed(self.user_timezone),
            user_local_time: trimmed(self.user_local_time),
        })
    }
}

impl CreateClientRequest {
    pub fn validate(self) -> BookingResult<ClientProfile> {
        require_all(&[
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ])?;
        let reason_for_visit = self
            .reason_for_visit
            .ok_or_else(|| BookingError::Validation(MISSING_FIELDS.to_string()))?;
        if !self.consent {
            return Err(BookingError::Validation(MISSING_FIELDS.to_string()));
        }
        require_email(self.email.trim())?;

        Ok(ClientProfile {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: trimmed(self.phone),
            relationship: self.relationship,
            household_size: self.household_size.filter(|size| *size > 0),
            age_range: self.age_range,
            employment_status: self.employment_status,
            reason_for_visit,
            primary_financial_concern: trimmed(self.primary_financial_concern),
            current_debt_type: self.current_debt_type,
            preferred_contact_method: self.preferred_contact_method,
            best_time_to_contact: trimmed(self.best_time_to_contact),
            consent: true,
            booked_record_id: trimmed(self.booked_record_id),
            attachments: self.attachments,
        })
    }
}

impl ContactSubmission {
    /// Trims every field and drops optional ones left blank.
    pub fn validate(self) -> BookingResult<ContactSubmission> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(BookingError::Validation("Name is required".to_string()));
        }
        let email = self.email.trim().to_string();
        if email.is_empty() {
            return Err(BookingError::Validation("Email is required".to_string()));
        }

        Ok(ContactSubmission {
            name,
            email,
            phone: trimmed(self.phone),
            subject: trimmed(self.subject),
            message: trimmed(self.message),
        })
    }
}
