//! # Airtable Record Store
//!
//! Thin client for the Airtable REST API. Only the three calls the booking
//! service needs are implemented: list (with pagination), create and patch.
//!
//! Failures are classified so callers can decide whether to retry:
//! transport errors, `429` and `5xx` responses are transient; every other
//! non-success status is a rejection.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::{
    RecordStore,
    errors::StoreError,
    models::{Fields, ListQuery, Record, SortDirection},
};

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// Airtable never returns more than this many records per page.
const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub api_url: String,
    pub api_token: String,
    pub base_id: String,
    pub timeout: Duration,
}

pub struct AirtableStore {
    client: Client,
    api_url: String,
    api_token: String,
    base_id: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    records: Vec<Record>,
    offset: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WriteResponse {
    #[serde(default)]
    records: Vec<Record>,
}

impl AirtableStore {
    pub fn new(config: AirtableConfig) -> Result<Self, StoreError> {
        if config.api_token.trim().is_empty() || config.base_id.trim().is_empty() {
            return Err(StoreError::NotConfigured(
                "AIRTABLE_API_TOKEN and AIRTABLE_BASE_ID must be set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::NotConfigured(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_token: config.api_token,
            base_id: config.base_id,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_url,
            self.base_id,
            urlencoding::encode(table)
        )
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = request
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| StoreError::Transient(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        warn!(status = status.as_u16(), "Airtable request failed: {}", message);

        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            Err(StoreError::Transient(format!("HTTP {}: {}", status.as_u16(), message)))
        } else {
            Err(StoreError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn first_record(&self, response: Response) -> Result<Record, StoreError> {
        let body: WriteResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        body.records
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("write response contained no records".to_string()))
    }
}

/// Pulls a readable message out of an Airtable error body.
///
/// The API answers with either `{"error": "CODE"}` or
/// `{"error": {"type": "...", "message": "..."}}`.
fn error_message(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let error = parsed.as_ref().and_then(|v| v.get("error"));
    match error {
        Some(Value::String(code)) => code.clone(),
        Some(Value::Object(obj)) => obj
            .get("message")
            .or_else(|| obj.get("type"))
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string(),
        _ if body.is_empty() => "empty response".to_string(),
        _ => body.to_string(),
    }
}

fn formula_literal(value: &Value) -> String {
    match value {
        Value::Bool(true) => "TRUE()".to_string(),
        Value::Bool(false) => "FALSE()".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        other => format!("'{}'", other.to_string().replace('\'', "\\'")),
    }
}

/// `filterByFormula` expression for a conjunction of equalities.
pub fn filter_formula(filter: &[(String, Value)]) -> Option<String> {
    let clauses: Vec<String> = filter
        .iter()
        .map(|(field, value)| format!("{{{}}}={}", field, formula_literal(value)))
        .collect();

    match clauses.len() {
        0 => None,
        1 => clauses.into_iter().next(),
        _ => Some(format!("AND({})", clauses.join(","))),
    }
}

/// Query-string pairs for one page of a list call.
pub fn list_params(query: &ListQuery, offset: Option<&str>) -> Vec<(String, String)> {
    let mut params = Vec::new();

    for field in &query.fields {
        params.push(("fields[]".to_string(), field.clone()));
    }
    if let Some(formula) = filter_formula(&query.filter) {
        params.push(("filterByFormula".to_string(), formula));
    }
    if let Some(sort) = &query.sort {
        let direction = match sort.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        params.push(("sort[0][field]".to_string(), sort.field.clone()));
        params.push(("sort[0][direction]".to_string(), direction.to_string()));
    }
    if let Some(max) = query.max_records {
        params.push(("maxRecords".to_string(), max.to_string()));
    }
    if let Some(size) = query.page_size {
        params.push(("pageSize".to_string(), size.clamp(1, MAX_PAGE_SIZE).to_string()));
    }
    if let Some(offset) = offset {
        params.push(("offset".to_string(), offset.to_string()));
    }

    params
}

#[async_trait]
impl RecordStore for AirtableStore {
    async fn list_records(&self, table: &str, query: &ListQuery) -> Result<Vec<Record>, StoreError> {
        let url = self.table_url(table);
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let params = list_params(query, offset.as_deref());
            debug!(table, page_offset = ?offset, "Listing Airtable records");

            let response = self.send(self.client.get(&url).query(&params)).await?;
            let page: ListResponse = response
                .json()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))?;

            records.extend(page.records);

            if let Some(max) = query.max_records {
                if records.len() >= max {
                    records.truncate(max);
                    break;
                }
            }

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        debug!(table, count = records.len(), "Listed Airtable records");
        Ok(records)
    }

    async fn create_record(&self, table: &str, fields: Fields) -> Result<Record, StoreError> {
        let body = json!({ "records": [{ "fields": fields }], "typecast": true });
        let response = self
            .send(self.client.post(self.table_url(table)).json(&body))
            .await?;
        let record = self.first_record(response).await?;

        debug!(table, id = %record.id, "Created Airtable record");
        Ok(record)
    }

    async fn update_record(&self, table: &str, id: &str, fields: Fields) -> Result<Record, StoreError> {
        let body = json!({ "records": [{ "id": id, "fields": fields }], "typecast": true });
        let response = self
            .send(self.client.patch(self.table_url(table)).json(&body))
            .await?;
        let record = self.first_record(response).await?;

        debug!(table, id = %record.id, "Updated Airtable record");
        Ok(record)
    }

    fn backend_name(&self) -> &'static str {
        "airtable"
    }
}
