use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use coachdesk_core::{
    availability,
    calendar::MonthKey,
    errors::BookingResult,
    models::{
        booking::{Consultation, CreatedBooking, CreatedRecord, TimeSlot},
        client::ClientProfile,
        contact::{ContactSubmission, Testimonial},
    },
    service::SchedulingService,
};
use coachdesk_store::{
    BookingSchema, SharedStore, Tables,
    repositories::{clients, contacts, reservations, testimonials},
};
use tracing::debug;

/// The record store plus the table layout it is read and written with.
///
/// Built once at startup; cloning shares the same store client.
#[derive(Clone)]
pub struct BookingService {
    store: SharedStore,
    tables: Tables,
    schema: BookingSchema,
}

impl BookingService {
    pub fn new(store: SharedStore, tables: Tables, schema: BookingSchema) -> Self {
        Self {
            store,
            tables,
            schema,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    pub async fn testimonials(&self, limit: usize, offset: usize) -> BookingResult<Vec<Testimonial>> {
        testimonials::list_testimonials(self.store.as_ref(), &self.tables, limit, offset).await
    }

    pub async fn submit_contact(&self, submission: &ContactSubmission) -> BookingResult<CreatedRecord> {
        contacts::create_contact_submission(self.store.as_ref(), &self.tables, submission).await
    }
}

#[async_trait]
impl SchedulingService for BookingService {
    async fn available_slots(&self, date: NaiveDate) -> BookingResult<Vec<TimeSlot>> {
        let booked = reservations::list_booked_slots(self.store.as_ref(), &self.tables).await?;
        let slots = availability::resolve_slots(date, &booked);

        debug!(
            %date,
            taken = slots.iter().filter(|s| !s.available).count(),
            "Resolved availability"
        );
        Ok(slots)
    }

    async fn fully_booked_dates(&self, year: i32, month: u32) -> BookingResult<BTreeSet<NaiveDate>> {
        let month = MonthKey::new(year, month)?;
        let booked = reservations::list_booked_slots(self.store.as_ref(), &self.tables).await?;
        let dates = availability::fully_booked(month, &booked);

        debug!(%month, count = dates.len(), "Resolved fully booked dates");
        Ok(dates)
    }

    async fn create_reservation(&self, consultation: &Consultation) -> BookingResult<CreatedBooking> {
        reservations::create_reservation(self.store.as_ref(), &self.tables, self.schema, consultation)
            .await
    }

    async fn create_client(&self, profile: &ClientProfile) -> BookingResult<CreatedRecord> {
        clients::create_client(self.store.as_ref(), &self.tables, profile).await
    }
}
