use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use coachdesk_core::models::{
    booking::{BookingType, Consultation, CreateBookingRequest, CreatedBooking, TimeSlot},
    client::{ClientProfile, DebtType, PreferredContactMethod, ReasonForVisit},
    contact::{ContactSubmission, Testimonial},
};
use pretty_assertions::assert_eq;
use serde_json::{from_str, json, to_value};
use serde_test::{Token, assert_tokens};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_time_slot_tokens() {
    let slot = TimeSlot {
        start: time(9, 0),
        end: time(10, 0),
        available: false,
    };

    assert_tokens(
        &slot,
        &[
            Token::Struct {
                name: "TimeSlot",
                len: 3,
            },
            Token::Str("start"),
            Token::Str("09:00"),
            Token::Str("end"),
            Token::Str("10:00"),
            Token::Str("available"),
            Token::Bool(false),
            Token::StructEnd,
        ],
    );
}

#[test]
fn test_time_slot_rejects_seconds() {
    let result = from_str::<TimeSlot>(r#"{"start":"09:00:00","end":"10:00","available":true}"#);
    assert!(result.is_err());
}

#[test]
fn test_booking_type_wire_names() {
    assert_eq!(to_value(BookingType::Free).unwrap(), json!("Free Consultation"));
    assert_eq!(to_value(BookingType::Paid).unwrap(), json!("Paid Consultation"));
    assert_eq!(BookingType::default(), BookingType::Free);
}

#[test]
fn test_consultation_serializes_camel_case() {
    let consultation = Consultation {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        booking_type: BookingType::Free,
        date_booked: NaiveDate::from_ymd_opt(2025, 11, 21).unwrap(),
        time_slot_start: time(9, 0),
        time_slot_end: time(10, 0),
        user_timezone: Some("America/Chicago".into()),
        user_local_time: None,
    };

    assert_eq!(
        to_value(&consultation).unwrap(),
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "bookingType": "Free Consultation",
            "dateBooked": "2025-11-21",
            "timeSlotStart": "09:00",
            "timeSlotEnd": "10:00",
            "userTimezone": "America/Chicago"
        })
    );
}

#[test]
fn test_consultation_is_accepted_as_booking_request() {
    let consultation = Consultation {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        booking_type: BookingType::Paid,
        date_booked: NaiveDate::from_ymd_opt(2025, 11, 21).unwrap(),
        time_slot_start: time(13, 0),
        time_slot_end: time(14, 0),
        user_timezone: None,
        user_local_time: Some("10:00 AM - 11:00 AM".into()),
    };

    let json = serde_json::to_string(&consultation).unwrap();
    let request: CreateBookingRequest = from_str(&json).unwrap();

    assert_eq!(request.validate().unwrap(), consultation);
}

#[test]
fn test_booking_request_missing_fields_default_to_empty() {
    let request: CreateBookingRequest = from_str(r#"{"firstName":"Ada"}"#).unwrap();

    assert_eq!(request.first_name, "Ada");
    assert!(request.email.is_empty());
    assert!(request.booking_type.is_none());
}

#[test]
fn test_created_booking_omits_missing_instant() {
    let created = CreatedBooking {
        id: "rec123".into(),
        success: true,
        date_and_time: None,
    };

    assert_eq!(to_value(&created).unwrap(), json!({"id": "rec123", "success": true}));
}

#[test]
fn test_client_profile_deserialization() {
    let profile: ClientProfile = from_str(
        r#"{
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "reasonForVisit": "Debt Management",
            "currentDebtType": ["Student Loans", "Credit Cards", "Student Loans"],
            "preferredContactMethod": "Text",
            "relationship": "in a relationship",
            "ageRange": "65+",
            "consent": true
        }"#,
    )
    .unwrap();

    assert_eq!(profile.reason_for_visit, ReasonForVisit::DebtManagement);
    assert_eq!(
        profile.current_debt_type,
        BTreeSet::from([DebtType::CreditCards, DebtType::StudentLoans])
    );
    assert_eq!(profile.preferred_contact_method, Some(PreferredContactMethod::Text));
    assert!(profile.preferred_contact_method.unwrap().needs_phone());
    assert!(profile.attachments.is_empty());
}

#[test]
fn test_contact_submission_pascal_case() {
    let submission: ContactSubmission =
        from_str(r#"{"Name":"Ada","Email":"ada@example.com","Message":"Hello"}"#).unwrap();

    assert_eq!(submission.name, "Ada");
    assert_eq!(submission.message.as_deref(), Some("Hello"));
    assert_eq!(
        to_value(&submission).unwrap(),
        json!({"Name": "Ada", "Email": "ada@example.com", "Message": "Hello"})
    );
}

#[test]
fn test_testimonial_serialization() {
    let testimonial = Testimonial {
        id: "rec1".into(),
        name: "Sam".into(),
        notes: "Life changing".into(),
        date_created: "2025-01-02".into(),
    };

    assert_eq!(
        to_value(&testimonial).unwrap(),
        json!({"id": "rec1", "name": "Sam", "notes": "Life changing", "dateCreated": "2025-01-02"})
    );
}
