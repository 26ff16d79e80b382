//! # Timezone Utility
//!
//! The business keeps its calendar in Eastern time. Visitors may sit anywhere
//! in the continental US, so slot labels are converted into one of four
//! familiar zones before display. All functions here are pure apart from
//! [`detect_timezone`], which probes the host once.

use std::path::Path;

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// Timezone every slot, reservation date and calendar day is expressed in.
pub const BUSINESS_TIMEZONE: Tz = chrono_tz::America::New_York;

/// First and last hour (exclusive) of the half-hour business grid.
const BUSINESS_OPEN_HOUR: u32 = 8;
const BUSINESS_CLOSE_HOUR: u32 = 17;

/// The four zones offered in the timezone picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UsaTimezone {
    Est,
    Cst,
    Mst,
    Pst,
}

impl UsaTimezone {
    pub const ALL: [UsaTimezone; 4] = [
        UsaTimezone::Est,
        UsaTimezone::Cst,
        UsaTimezone::Mst,
        UsaTimezone::Pst,
    ];

    pub fn tz(self) -> Tz {
        match self {
            UsaTimezone::Est => chrono_tz::America::New_York,
            UsaTimezone::Cst => chrono_tz::America::Chicago,
            UsaTimezone::Mst => chrono_tz::America::Denver,
            UsaTimezone::Pst => chrono_tz::America::Los_Angeles,
        }
    }

    pub fn iana(self) -> &'static str {
        self.tz().name()
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            UsaTimezone::Est => "EST",
            UsaTimezone::Cst => "CST",
            UsaTimezone::Mst => "MST",
            UsaTimezone::Pst => "PST",
        }
    }

    pub fn friendly_name(self) -> &'static str {
        match self {
            UsaTimezone::Est => "Eastern Time (EST)",
            UsaTimezone::Cst => "Central Time (CST)",
            UsaTimezone::Mst => "Mountain Time (MST)",
            UsaTimezone::Pst => "Pacific Time (PST)",
        }
    }

    pub fn from_abbreviation(value: &str) -> Option<Self> {
        UsaTimezone::ALL
            .into_iter()
            .find(|zone| zone.abbreviation().eq_ignore_ascii_case(value.trim()))
    }
}

/// Zones that share a wall clock with one of the canonical four.
///
/// Includes neighbours outside the US (Toronto, Havana, Mexico City, ...) and
/// legacy aliases, so a detected zone can be shown with a familiar label.
const NORMALIZATION_TABLE: &[(&str, UsaTimezone)] = &[
    ("America/New_York", UsaTimezone::Est),
    ("America/Detroit", UsaTimezone::Est),
    ("America/Toronto", UsaTimezone::Est),
    ("America/Montreal", UsaTimezone::Est),
    ("America/Nassau", UsaTimezone::Est),
    ("America/Havana", UsaTimezone::Est),
    ("America/Port-au-Prince", UsaTimezone::Est),
    ("America/Iqaluit", UsaTimezone::Est),
    ("America/Indiana/Indianapolis", UsaTimezone::Est),
    ("America/Indianapolis", UsaTimezone::Est),
    ("America/Kentucky/Louisville", UsaTimezone::Est),
    ("America/Louisville", UsaTimezone::Est),
    ("US/Eastern", UsaTimezone::Est),
    ("EST5EDT", UsaTimezone::Est),
    ("America/Chicago", UsaTimezone::Cst),
    ("America/Winnipeg", UsaTimezone::Cst),
    ("America/Mexico_City", UsaTimezone::Cst),
    ("America/Monterrey", UsaTimezone::Cst),
    ("America/Matamoros", UsaTimezone::Cst),
    ("America/Indiana/Knox", UsaTimezone::Cst),
    ("America/Menominee", UsaTimezone::Cst),
    ("America/North_Dakota/Center", UsaTimezone::Cst),
    ("US/Central", UsaTimezone::Cst),
    ("CST6CDT", UsaTimezone::Cst),
    ("America/Denver", UsaTimezone::Mst),
    ("America/Boise", UsaTimezone::Mst),
    ("America/Phoenix", UsaTimezone::Mst),
    ("America/Edmonton", UsaTimezone::Mst),
    ("America/Yellowknife", UsaTimezone::Mst),
    ("US/Mountain", UsaTimezone::Mst),
    ("US/Arizona", UsaTimezone::Mst),
    ("MST7MDT", UsaTimezone::Mst),
    ("America/Los_Angeles", UsaTimezone::Pst),
    ("America/Vancouver", UsaTimezone::Pst),
    ("America/Tijuana", UsaTimezone::Pst),
    ("US/Pacific", UsaTimezone::Pst),
    ("PST8PDT", UsaTimezone::Pst),
];

/// Reads the host timezone, returning `None` when it cannot be determined.
pub fn detect_timezone() -> Option<Tz> {
    let tz_var = std::env::var("TZ").ok();
    detect_timezone_from(tz_var.as_deref(), Path::new("/etc/localtime"))
}

/// Probe order: the `TZ` value, then the target of the `localtime` symlink.
pub fn detect_timezone_from(tz_var: Option<&str>, localtime: &Path) -> Option<Tz> {
    if let Some(value) = tz_var.map(|v| v.trim().trim_start_matches(':')).filter(|v| !v.is_empty()) {
        match value.parse::<Tz>() {
            Ok(tz) => return Some(tz),
            Err(_) => tracing::debug!("Ignoring unrecognised TZ value: {}", value),
        }
    }

    let target = match std::fs::read_link(localtime) {
        Ok(target) => target,
        Err(e) => {
            tracing::debug!("Could not read {}: {}", localtime.display(), e);
            return None;
        }
    };
    let target = target.to_string_lossy();
    let name = target.split_once("zoneinfo/").map(|(_, name)| name)?;
    name.parse::<Tz>().ok()
}

/// Canonical zone for an IANA id, if it is one of the four exactly.
pub fn abbreviation(timezone: &str) -> Option<UsaTimezone> {
    UsaTimezone::ALL
        .into_iter()
        .find(|zone| zone.iana() == timezone)
}

/// Canonical zone for any IANA id listed in the normalization table.
pub fn normalize(timezone: &str) -> Option<UsaTimezone> {
    NORMALIZATION_TABLE
        .iter()
        .find(|(name, _)| *name == timezone)
        .map(|(_, zone)| *zone)
}

/// Accepts an abbreviation (`"PST"`) or an IANA id (`"America/Denver"`).
pub fn resolve(timezone: &str) -> Option<Tz> {
    UsaTimezone::from_abbreviation(timezone)
        .map(UsaTimezone::tz)
        .or_else(|| timezone.trim().parse::<Tz>().ok())
}

/// Display label such as `"Pacific Time (PST)"`; unknown ids come back as-is.
pub fn friendly_name(timezone: &str) -> String {
    abbreviation(timezone)
        .or_else(|| UsaTimezone::from_abbreviation(timezone))
        .map(|zone| zone.friendly_name().to_string())
        .unwrap_or_else(|| timezone.to_string())
}

fn localize(date: NaiveDate, time: NaiveTime, tz: Tz) -> BookingResult<DateTime<Tz>> {
    match tz.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(BookingError::Validation(format!(
            "{} does not exist on {} in {}",
            time.format("%H:%M"),
            date,
            tz.name()
        ))),
    }
}

/// Wall-clock `time` on `date` in `from`, read off a clock in `to`.
pub fn convert(date: NaiveDate, time: NaiveTime, from: Tz, to: Tz) -> BookingResult<NaiveTime> {
    Ok(localize(date, time, from)?.with_timezone(&to).time())
}

pub fn convert_from_business(date: NaiveDate, time: NaiveTime, to: Tz) -> BookingResult<NaiveTime> {
    convert(date, time, BUSINESS_TIMEZONE, to)
}

pub fn convert_to_business(date: NaiveDate, time: NaiveTime, from: Tz) -> BookingResult<NaiveTime> {
    convert(date, time, from, BUSINESS_TIMEZONE)
}

/// Absolute instant of a business-timezone slot start.
pub fn business_to_utc(date: NaiveDate, time: NaiveTime) -> BookingResult<DateTime<Utc>> {
    Ok(localize(date, time, BUSINESS_TIMEZONE)?.with_timezone(&Utc))
}

/// Business-timezone wall clock for a stored instant.
pub fn utc_to_business(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&BUSINESS_TIMEZONE).naive_local()
}

/// `14:05` becomes `"2:05 PM"`, midnight becomes `"12:00 AM"`.
pub fn format_for_display(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let period = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, time.minute(), period)
}

/// Wraps around midnight.
pub fn add_minutes(time: NaiveTime, minutes: i64) -> NaiveTime {
    time.overflowing_add_signed(Duration::minutes(minutes)).0
}

pub fn calculate_end_time(start: NaiveTime, duration_minutes: u32) -> NaiveTime {
    add_minutes(start, i64::from(duration_minutes))
}

/// Half-hour starts from 08:00 through 16:30.
pub fn business_hours() -> Vec<NaiveTime> {
    (BUSINESS_OPEN_HOUR..BUSINESS_CLOSE_HOUR)
        .flat_map(|hour| [0, 30].map(move |minute| (hour, minute)))
        .filter_map(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
        .collect()
}

pub fn is_business_hours(time: NaiveTime) -> bool {
    (BUSINESS_OPEN_HOUR..BUSINESS_CLOSE_HOUR).contains(&time.hour())
}
