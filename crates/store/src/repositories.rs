pub mod clients;
pub mod contacts;
pub mod reservations;
pub mod testimonials;

use serde::Serialize;
use serde_json::Value;

/// Store representation of a single-select value.
fn option_value<T: Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok()
}
