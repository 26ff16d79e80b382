use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipStatus {
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "married")]
    Married,
    #[serde(rename = "divorced")]
    Divorced,
    #[serde(rename = "widowed")]
    Widowed,
    #[serde(rename = "in a relationship")]
    InARelationship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    From35To44,
    #[serde(rename = "45-54")]
    From45To54,
    #[serde(rename = "55-64")]
    From55To64,
    #[serde(rename = "65+")]
    Over65,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    #[serde(rename = "Employed Full-time")]
    FullTime,
    #[serde(rename = "Employed Part-time")]
    PartTime,
    #[serde(rename = "Self-employed")]
    SelfEmployed,
    Unemployed,
    Retired,
    Student,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReasonForVisit {
    #[serde(rename = "Create/Review Budget")]
    Budget,
    #[serde(rename = "Debt Management")]
    DebtManagement,
    #[serde(rename = "General Financial Planning")]
    GeneralPlanning,
    #[serde(rename = "Emergency Fund/Savings")]
    EmergencyFund,
    #[serde(rename = "Investing & Wealth Building")]
    Investing,
    #[serde(rename = "Business/Self-employed")]
    Business,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DebtType {
    #[serde(rename = "Credit Cards")]
    CreditCards,
    #[serde(rename = "Student Loans")]
    StudentLoans,
    Mortgage,
    #[serde(rename = "Car Loan")]
    CarLoan,
    Medical,
    #[serde(rename = "Personal Loan")]
    PersonalLoan,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreferredContactMethod {
    #[default]
    Email,
    Phone,
    Text,
}

impl PreferredContactMethod {
    /// Phone and text both need a number to reach the client.
    pub fn needs_phone(&self) -> bool {
        matches!(self, PreferredContactMethod::Phone | PreferredContactMethod::Text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub url: String,
    #[serde(default)]
    pub filename: String,
}

/// Validated intake record, optionally linked to a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelationshipStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<EmploymentStatus>,

    pub reason_for_visit: ReasonForVisit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_financial_concern: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub current_debt_type: BTreeSet<DebtType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_contact_method: Option<PreferredContactMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time_to_contact: Option<String>,

    pub consent: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_record_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// Body of `POST /api/clients` before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateClientRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub relationship: Option<RelationshipStatus>,
    pub household_size: Option<u32>,
    pub age_range: Option<AgeRange>,
    pub employment_status: Option<EmploymentStatus>,
    pub reason_for_visit: Option<ReasonForVisit>,
    pub primary_financial_concern: Option<String>,
    pub current_debt_type: BTreeSet<DebtType>,
    pub preferred_contact_method: Option<PreferredContactMethod>,
    pub best_time_to_contact: Option<String>,
    pub consent: bool,
    pub booked_record_id: Option<String>,
    pub attachments: Vec<Attachment>,
}
