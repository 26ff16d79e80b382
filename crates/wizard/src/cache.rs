use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use coachdesk_core::calendar::MonthKey;

/// Fully booked days per month, kept for one wizard session.
#[derive(Debug, Clone, Default)]
pub struct MonthCache {
    months: HashMap<MonthKey, BTreeSet<NaiveDate>>,
}

impl MonthCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, month: MonthKey) -> Option<&BTreeSet<NaiveDate>> {
        self.months.get(&month)
    }

    pub fn insert(&mut self, month: MonthKey, dates: BTreeSet<NaiveDate>) {
        self.months.insert(month, dates);
    }

    /// Forgets one month so its next view refetches.
    pub fn invalidate(&mut self, month: MonthKey) {
        self.months.remove(&month);
    }

    /// Whether `date` is known to be fully booked. Unloaded months count as open.
    pub fn is_fully_booked(&self, date: NaiveDate) -> bool {
        self.get(MonthKey::of(date))
            .is_some_and(|dates| dates.contains(&date))
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}
