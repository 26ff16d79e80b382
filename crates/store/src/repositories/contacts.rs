use coachdesk_core::{
    errors::{BookingError, BookingResult},
    models::{booking::CreatedRecord, contact::ContactSubmission},
};
use serde_json::Value;
use tracing::info;

use crate::{RecordStore, schema::Tables};

/// Writes a cleaned submission; blank optional fields are already `None`
/// and so never reach the store.
pub async fn create_contact_submission(
    store: &dyn RecordStore,
    tables: &Tables,
    submission: &ContactSubmission,
) -> BookingResult<CreatedRecord> {
    let fields = match serde_json::to_value(submission) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return Err(BookingError::Internal("contact submission is not an object".into())),
        Err(err) => return Err(BookingError::Internal(Box::new(err))),
    };

    let record = store.create_record(&tables.contacts, fields).await?;

    info!(id = %record.id, "Contact submission stored");
    Ok(CreatedRecord {
        id: record.id,
        success: true,
    })
}
