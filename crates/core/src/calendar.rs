//! Month grid and date predicates for the booking calendar.

use chrono::{Datelike, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// A calendar month, used as the key of the fully-booked cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> BookingResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(BookingError::Validation(
                "Valid year and month (1-12) parameters are required".to_string(),
            ));
        }
        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            BookingError::Validation(format!("Year {} is out of range", year))
        })?;
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Self {
        self.shift(|first| first.checked_add_months(Months::new(1)))
    }

    pub fn previous(&self) -> Self {
        self.shift(|first| first.checked_sub_months(Months::new(1)))
    }

    // Falls back to `self` at the ends of chrono's representable range.
    fn shift(&self, step: impl FnOnce(NaiveDate) -> Option<NaiveDate>) -> Self {
        self.first_day().and_then(step).map(Self::of).unwrap_or(*self)
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Cells of a Sunday-first month view.
///
/// Leading `None` entries pad the first week up to the weekday of the 1st.
pub fn days_in_month(year: i32, month: u32) -> BookingResult<Vec<Option<NaiveDate>>> {
    let key = MonthKey::new(year, month)?;
    let first = key
        .first_day()
        .ok_or_else(|| BookingError::Validation(format!("Invalid month {}", key)))?;

    let padding = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; padding];
    cells.extend(first.iter_days().take_while(|d| key.contains(*d)).map(Some));

    Ok(cells)
}

pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Strictly before the start of today, local system time.
pub fn is_past_date(date: NaiveDate) -> bool {
    is_past_date_on(date, Local::now().date_naive())
}

pub fn is_past_date_on(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}
