use std::collections::BTreeSet;

use coachdesk_core::{
    errors::{BookingError, BookingResult},
    models::client::{
        AgeRange, Attachment, ClientProfile, CreateClientRequest, DebtType, EmploymentStatus,
        PreferredContactMethod, ReasonForVisit, RelationshipStatus,
    },
    validation::is_valid_email,
};

pub const FILL_REQUIRED: &str = "Please fill in all required fields";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const REASON_REQUIRED: &str = "Please tell us what brings you in";
pub const PHONE_REQUIRED: &str = "Please enter a phone number so we can call or text you";
pub const CONSENT_REQUIRED: &str = "Please agree to be contacted about your consultation";

/// Everything the visitor types on the contact step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,

    pub relationship: Option<RelationshipStatus>,
    pub household_size: Option<u32>,
    pub age_range: Option<AgeRange>,
    pub employment_status: Option<EmploymentStatus>,

    pub reason_for_visit: Option<ReasonForVisit>,
    pub primary_financial_concern: String,
    pub current_debt_type: BTreeSet<DebtType>,

    pub preferred_contact_method: PreferredContactMethod,
    pub best_time_to_contact: String,

    pub consent: bool,
    pub attachments: Vec<Attachment>,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

impl ContactForm {
    /// Checks run before anything is sent, in the order the form shows them.
    pub fn validate(&self) -> BookingResult<()> {
        let fail = |message: &str| Err(BookingError::Validation(message.to_string()));

        if blank(&self.first_name) || blank(&self.last_name) || blank(&self.email) {
            return fail(FILL_REQUIRED);
        }
        if !is_valid_email(self.email.trim()) {
            return fail(INVALID_EMAIL);
        }
        if self.reason_for_visit.is_none() {
            return fail(REASON_REQUIRED);
        }
        if self.preferred_contact_method.needs_phone() && blank(&self.phone) {
            return fail(PHONE_REQUIRED);
        }
        if !self.consent {
            return fail(CONSENT_REQUIRED);
        }
        Ok(())
    }

    /// Intake record linked to `booked_record_id`, validated the same way the
    /// API validates it.
    pub fn to_profile(&self, booked_record_id: Option<String>) -> BookingResult<ClientProfile> {
        CreateClientRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: optional(&self.phone),
            relationship: self.relationship,
            household_size: self.household_size,
            age_range: self.age_range,
            employment_status: self.employment_status,
            reason_for_visit: self.reason_for_visit,
            primary_financial_concern: optional(&self.primary_financial_concern),
            current_debt_type: self.current_debt_type.clone(),
            preferred_contact_method: Some(self.preferred_contact_method),
            best_time_to_contact: optional(&self.best_time_to_contact),
            consent: self.consent,
            booked_record_id,
            attachments: self.attachments.clone(),
        }
        .validate()
    }
}
