//! In-process record store used for local runs and tests.

use std::{cmp::Ordering, collections::HashMap};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::{
    RecordStore,
    errors::StoreError,
    models::{Fields, ListQuery, Record, SortDirection},
};

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts records as-is, keeping their ids.
    pub async fn seed(&self, table: &str, records: impl IntoIterator<Item = Record>) {
        let mut tables = self.tables.write().await;
        tables.entry(table.to_string()).or_default().extend(records);
    }

    /// Snapshot of a table in insertion order.
    pub async fn records(&self, table: &str) -> Vec<Record> {
        self.tables
            .read()
            .await
            .get(table)
            .cloned()
            .unwrap_or_default()
    }
}

fn record_id() -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("rec{}", &simple[..14])
}

fn matches(record: &Record, filter: &[(String, Value)]) -> bool {
    filter.iter().all(|(field, expected)| {
        match (record.fields.get(field), expected) {
            (Some(actual), expected) => actual == expected,
            // Airtable omits unchecked checkboxes entirely.
            (None, Value::Bool(false)) => true,
            (None, _) => false,
        }
    })
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

fn project(mut record: Record, fields: &[String]) -> Record {
    if !fields.is_empty() {
        record.fields.retain(|name, _| fields.contains(name));
    }
    record
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_records(&self, table: &str, query: &ListQuery) -> Result<Vec<Record>, StoreError> {
        let tables = self.tables.read().await;
        let mut records: Vec<Record> = tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|r| matches(r, &query.filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(sort) = &query.sort {
            records.sort_by(|a, b| {
                let ordering = compare_values(a.fields.get(&sort.field), b.fields.get(&sort.field));
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        if let Some(max) = query.max_records {
            records.truncate(max);
        }

        debug!(table, count = records.len(), "Listed memory records");
        Ok(records
            .into_iter()
            .map(|r| project(r, &query.fields))
            .collect())
    }

    async fn create_record(&self, table: &str, fields: Fields) -> Result<Record, StoreError> {
        let record = Record {
            id: record_id(),
            created_time: Some(Utc::now()),
            fields,
        };

        let mut tables = self.tables.write().await;
        tables
            .entry(table.to_string())
            .or_default()
            .push(record.clone());

        debug!(table, id = %record.id, "Created memory record");
        Ok(record)
    }

    async fn update_record(&self, table: &str, id: &str, fields: Fields) -> Result<Record, StoreError> {
        let mut tables = self.tables.write().await;
        let record = tables
            .get_mut(table)
            .and_then(|rows| rows.iter_mut().find(|r| r.id == id))
            .ok_or_else(|| StoreError::Rejected {
                status: 404,
                message: format!("Record {} not found in {}", id, table),
            })?;

        record.fields.extend(fields);
        Ok(record.clone())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
