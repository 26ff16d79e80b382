use chrono::{DateTime, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use coachdesk_core::{
    availability::BookedSlot,
    errors::BookingResult,
    models::{
        booking::{Consultation, CreatedBooking},
        hhmm,
    },
    timezone,
};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::{
    RecordStore,
    models::{Fields, ListQuery, Record},
    schema::{BookingSchema, Tables, fields},
};

/// Business date and start time of every reservation in the Booked table.
///
/// Either layout is accepted: the `dateAndTime` instant wins when present,
/// otherwise `DateBooked` plus `TimeSlotStart`. Records carrying neither are
/// skipped.
///
/// No column projection: Airtable rejects unknown field names with a 422 and
/// a base may carry only one of the two layouts.
pub async fn list_booked_slots(
    store: &dyn RecordStore,
    tables: &Tables,
) -> BookingResult<Vec<BookedSlot>> {
    let records = store.list_records(&tables.booked, &ListQuery::new()).await?;

    let total = records.len();
    let slots: Vec<BookedSlot> = records.iter().filter_map(booked_slot).collect();
    if slots.len() < total {
        debug!(skipped = total - slots.len(), "Skipped reservations without a usable date");
    }

    Ok(slots)
}

pub fn booked_slot(record: &Record) -> Option<BookedSlot> {
    if let Some(instant) = record.text(fields::DATE_AND_TIME) {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(instant) {
            let local: NaiveDateTime = timezone::utc_to_business(parsed.with_timezone(&Utc));
            return Some(BookedSlot {
                date: local.date(),
                start: local.time(),
            });
        }
    }

    let date = record.text(fields::DATE_BOOKED)?.parse().ok()?;
    let start = record.text(fields::TIME_SLOT_START).and_then(parse_start)?;
    Some(BookedSlot { date, start })
}

/// Accepts `HH:MM` and `HH:MM:SS`.
fn parse_start(value: &str) -> Option<NaiveTime> {
    hhmm::parse(value).or_else(|| NaiveTime::parse_from_str(value, "%H:%M:%S").ok())
}

pub fn reservation_fields(
    consultation: &Consultation,
    instant: Option<DateTime<Utc>>,
) -> Fields {
    let mut record = Fields::new();
    record.insert(fields::FIRST_NAME.into(), json!(consultation.first_name));
    record.insert(fields::LAST_NAME.into(), json!(consultation.last_name));
    record.insert(fields::EMAIL.into(), json!(consultation.email));
    record.insert(fields::BOOKING_TYPE.into(), json!(consultation.booking_type.as_str()));
    record.insert(
        fields::DATE_BOOKED.into(),
        json!(consultation.date_booked.format("%Y-%m-%d").to_string()),
    );
    record.insert(fields::TIME_SLOT_START.into(), json!(hhmm::format(&consultation.time_slot_start)));
    record.insert(fields::TIME_SLOT_END.into(), json!(hhmm::format(&consultation.time_slot_end)));

    if let Some(tz) = &consultation.user_timezone {
        record.insert(fields::USER_TIMEZONE.into(), json!(tz));
    }
    if let Some(local) = &consultation.user_local_time {
        record.insert(fields::USER_LOCAL_TIME.into(), json!(local));
    }
    if let Some(instant) = instant {
        record.insert(
            fields::DATE_AND_TIME.into(),
            json!(instant.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
    }

    record
}

pub async fn create_reservation(
    store: &dyn RecordStore,
    tables: &Tables,
    schema: BookingSchema,
    consultation: &Consultation,
) -> BookingResult<CreatedBooking> {
    let instant = match schema {
        BookingSchema::Fields => None,
        BookingSchema::Instant => Some(timezone::business_to_utc(
            consultation.date_booked,
            consultation.time_slot_start,
        )?),
    };

    let record = store
        .create_record(&tables.booked, reservation_fields(consultation, instant))
        .await?;

    info!(
        id = %record.id,
        date = %consultation.date_booked,
        start = %hhmm::format(&consultation.time_slot_start),
        "Reservation created"
    );

    if let (BookingSchema::Instant, Some(slots_table)) = (schema, &tables.slots) {
        if let Err(err) = mark_slot_booked(store, slots_table, consultation, &record.id).await {
            warn!(id = %record.id, "Reservation stored but slot record not updated: {}", err);
        }
    }

    Ok(CreatedBooking {
        id: record.id,
        success: true,
        date_and_time: instant,
    })
}

/// Flags the open slot record matching the reservation and links it.
///
/// Returns `Ok(false)` when there is no open slot record to update.
pub async fn mark_slot_booked(
    store: &dyn RecordStore,
    slots_table: &str,
    consultation: &Consultation,
    booking_id: &str,
) -> BookingResult<bool> {
    let query = ListQuery::new()
        .filter_eq(fields::SLOT_DATE, consultation.date_booked.format("%Y-%m-%d").to_string())
        .filter_eq(fields::SLOT_START_TIME, hhmm::format(&consultation.time_slot_start))
        .filter_eq(fields::SLOT_IS_BOOKED, false)
        .max_records(1);

    let Some(slot) = store.list_records(slots_table, &query).await?.into_iter().next() else {
        warn!(date = %consultation.date_booked, "No open slot record for reservation");
        return Ok(false);
    };

    let mut update = Fields::new();
    update.insert(fields::SLOT_IS_BOOKED.into(), Value::Bool(true));
    update.insert(fields::SLOT_BOOKING.into(), json!([booking_id]));
    store.update_record(slots_table, &slot.id, update).await?;

    debug!(slot = %slot.id, booking = booking_id, "Slot record marked booked");
    Ok(true)
}
