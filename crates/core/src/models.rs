pub mod booking;
pub mod client;
pub mod contact;

/// Serde adapter for `"HH:MM"` wall-clock values.
///
/// Slot times travel as two-digit hour and minute strings in every payload
/// and every store field, so `NaiveTime`'s default `HH:MM:SS` form is not used.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn format(time: &NaiveTime) -> String {
        time.format(FORMAT).to_string()
    }

    pub fn parse(value: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(value.trim(), FORMAT).ok()
    }

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid HH:MM time: {raw}")))
    }
}
