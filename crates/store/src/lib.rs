pub mod airtable;
pub mod errors;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

pub use airtable::{AirtableConfig, AirtableStore};
pub use errors::StoreError;
pub use memory::MemoryStore;
pub use models::{Fields, ListQuery, Record};
pub use schema::{BookingSchema, Tables};

/// A table-oriented record store.
///
/// Writes are single-record and there are no transactions, so callers must
/// not assume a read followed by a write is atomic.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_records(&self, table: &str, query: &ListQuery) -> Result<Vec<Record>, StoreError>;

    async fn create_record(&self, table: &str, fields: Fields) -> Result<Record, StoreError>;

    /// Merges `fields` into an existing record.
    async fn update_record(&self, table: &str, id: &str, fields: Fields) -> Result<Record, StoreError>;

    fn backend_name(&self) -> &'static str;
}

pub type SharedStore = Arc<dyn RecordStore>;

#[derive(Debug, Clone)]
pub enum StoreBackend {
    Airtable(AirtableConfig),
    Memory,
}

pub fn create_store(backend: StoreBackend) -> Result<SharedStore, StoreError> {
    let store: SharedStore = match backend {
        StoreBackend::Airtable(config) => Arc::new(AirtableStore::new(config)?),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };

    info!(backend = store.backend_name(), "Record store ready");
    Ok(store)
}
