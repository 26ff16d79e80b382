use coachdesk_core::{errors::BookingResult, models::contact::Testimonial};

use crate::{
    RecordStore,
    models::{ListQuery, Record, SortDirection},
    schema::{Tables, fields},
};

pub const DEFAULT_LIMIT: usize = 10;

fn testimonial(record: Record) -> Testimonial {
    let date_created = record.text(fields::DATE_CREATED).map(str::to_string).unwrap_or_else(|| {
        record
            .created_time
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });

    Testimonial {
        name: record.text_or_default(fields::NAME),
        notes: record.text_or_default(fields::NOTES),
        date_created,
        id: record.id,
    }
}

/// Newest first, skipping the first `offset`.
pub async fn list_testimonials(
    store: &dyn RecordStore,
    tables: &Tables,
    limit: usize,
    offset: usize,
) -> BookingResult<Vec<Testimonial>> {
    if limit == 0 {
        return Ok(Vec::new());
    }

    let query = ListQuery::new()
        .fields([fields::NAME, fields::NOTES, fields::DATE_CREATED])
        .sort(fields::DATE_CREATED, SortDirection::Desc)
        .max_records(limit.saturating_add(offset));

    let records = store.list_records(&tables.testimonials, &query).await?;

    Ok(records
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(testimonial)
        .collect())
}
