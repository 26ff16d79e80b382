//! Table and field names of the booking base.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Field names as they appear in the store.
pub mod fields {
    // Booked
    pub const DATE_AND_TIME: &str = "dateAndTime";
    pub const FIRST_NAME: &str = "FirstName";
    pub const LAST_NAME: &str = "LastName";
    pub const EMAIL: &str = "Email";
    pub const BOOKING_TYPE: &str = "BookingType";
    pub const DATE_BOOKED: &str = "DateBooked";
    pub const TIME_SLOT_START: &str = "TimeSlotStart";
    pub const TIME_SLOT_END: &str = "TimeSlotEnd";
    pub const USER_TIMEZONE: &str = "UserTimezone";
    pub const USER_LOCAL_TIME: &str = "UserLocalTime";

    // Fine-grained slot records
    pub const SLOT_DATE: &str = "Date";
    pub const SLOT_START_TIME: &str = "StartTime";
    pub const SLOT_IS_BOOKED: &str = "IsBooked";
    pub const SLOT_BOOKING: &str = "Booking";

    // Clients
    pub const PHONE: &str = "Phone";
    pub const REASON_FOR_VISIT: &str = "ReasonForVisit";
    pub const CONSENT: &str = "Consent";
    pub const RELATIONSHIP_STATUS: &str = "RelationshipStatus";
    pub const HOUSEHOLD_SIZE: &str = "HouseholdSize";
    pub const AGE_RANGE: &str = "AgeRange";
    pub const EMPLOYMENT_STATUS: &str = "EmploymentStatus";
    pub const PRIMARY_FINANCIAL_CONCERN: &str = "PrimaryFinancialConcern";
    pub const CURRENT_DEBT_TYPE: &str = "CurrentDebtType";
    pub const PREFERRED_CONTACT_METHOD: &str = "PreferredContactMethod";
    pub const BEST_TIME_TO_CONTACT: &str = "BestTimeToContact";
    pub const BOOKED_RECORD: &str = "BookedRecord";
    pub const ATTACHMENTS: &str = "Attachments";

    // Contacts
    pub const NAME: &str = "Name";
    pub const SUBJECT: &str = "Subject";
    pub const MESSAGE: &str = "Message";

    // Testimonials
    pub const NOTES: &str = "Notes";
    pub const DATE_CREATED: &str = "DateCreated";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    pub booked: String,
    pub clients: String,
    pub contacts: String,
    pub testimonials: String,
    /// Optional table with one record per bookable slot.
    pub slots: Option<String>,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            booked: "Booked".to_string(),
            clients: "Clients".to_string(),
            contacts: "Contacts".to_string(),
            testimonials: "Testimonials".to_string(),
            slots: None,
        }
    }
}

/// How a reservation is laid out in the Booked table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingSchema {
    /// Decomposed date and slot fields only.
    Fields,
    /// Decomposed fields plus the UTC `dateAndTime` instant, and the matching
    /// slot record marked as booked when a slot table exists.
    #[default]
    Instant,
}

impl FromStr for BookingSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fields" => Ok(BookingSchema::Fields),
            "instant" => Ok(BookingSchema::Instant),
            other => Err(format!("unknown booking schema '{}'", other)),
        }
    }
}
