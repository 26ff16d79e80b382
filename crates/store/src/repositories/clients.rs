use coachdesk_core::{
    errors::BookingResult,
    models::{booking::CreatedRecord, client::ClientProfile},
};
use serde_json::{Value, json};
use tracing::info;

use super::option_value;
use crate::{
    RecordStore,
    models::Fields,
    schema::{Tables, fields},
};

pub fn client_fields(profile: &ClientProfile) -> Fields {
    let mut record = Fields::new();
    record.insert(fields::FIRST_NAME.into(), json!(profile.first_name));
    record.insert(fields::LAST_NAME.into(), json!(profile.last_name));
    record.insert(fields::EMAIL.into(), json!(profile.email));
    record.insert(fields::CONSENT.into(), Value::Bool(profile.consent));

    let mut put = |name: &str, value: Option<Value>| {
        if let Some(value) = value {
            record.insert(name.to_string(), value);
        }
    };

    put(fields::REASON_FOR_VISIT, option_value(&profile.reason_for_visit));
    put(fields::PHONE, profile.phone.as_ref().map(|v| json!(v)));
    put(fields::RELATIONSHIP_STATUS, profile.relationship.as_ref().and_then(option_value));
    put(fields::HOUSEHOLD_SIZE, profile.household_size.map(|v| json!(v)));
    put(fields::AGE_RANGE, profile.age_range.as_ref().and_then(option_value));
    put(fields::EMPLOYMENT_STATUS, profile.employment_status.as_ref().and_then(option_value));
    put(
        fields::PRIMARY_FINANCIAL_CONCERN,
        profile.primary_financial_concern.as_ref().map(|v| json!(v)),
    );
    if !profile.current_debt_type.is_empty() {
        put(fields::CURRENT_DEBT_TYPE, option_value(&profile.current_debt_type));
    }
    put(
        fields::PREFERRED_CONTACT_METHOD,
        profile.preferred_contact_method.as_ref().and_then(option_value),
    );
    put(fields::BEST_TIME_TO_CONTACT, profile.best_time_to_contact.as_ref().map(|v| json!(v)));
    put(fields::BOOKED_RECORD, profile.booked_record_id.as_ref().map(|id| json!([id])));
    if !profile.attachments.is_empty() {
        let attachments: Vec<Value> = profile
            .attachments
            .iter()
            .map(|a| json!({ "url": a.url }))
            .collect();
        put(fields::ATTACHMENTS, Some(Value::Array(attachments)));
    }

    record
}

pub async fn create_client(
    store: &dyn RecordStore,
    tables: &Tables,
    profile: &ClientProfile,
) -> BookingResult<CreatedRecord> {
    let record = store.create_record(&tables.clients, client_fields(profile)).await?;

    info!(
        id = %record.id,
        linked = profile.booked_record_id.is_some(),
        "Client profile created"
    );
    Ok(CreatedRecord {
        id: record.id,
        success: true,
    })
}
