//! # Slot Availability
//!
//! The practice offers one consultation per hour from 09:00 to 17:00 in the
//! business timezone. This module turns a list of existing reservations into
//! the two views the calendar needs:
//!
//! - the full slot grid for a day, with taken slots flagged rather than removed
//! - the set of days in a month on which every slot is taken
//!
//! Nothing here touches the record store; callers fetch reservations first.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::{calendar::MonthKey, models::booking::TimeSlot};

pub const FIRST_SLOT_HOUR: u32 = 9;
pub const LAST_SLOT_END_HOUR: u32 = 17;

/// Capacity of one day in the hourly model.
pub const SLOTS_PER_DAY: usize = (LAST_SLOT_END_HOUR - FIRST_SLOT_HOUR) as usize;

/// Business-timezone date and start time of an existing reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookedSlot {
    pub date: NaiveDate,
    pub start: NaiveTime,
}

/// The eight hourly slots of a business day, all marked available.
pub fn slot_grid() -> Vec<TimeSlot> {
    (FIRST_SLOT_HOUR..LAST_SLOT_END_HOUR)
        .filter_map(|hour| {
            Some(TimeSlot {
                start: NaiveTime::from_hms_opt(hour, 0, 0)?,
                end: NaiveTime::from_hms_opt(hour + 1, 0, 0)?,
                available: true,
            })
        })
        .collect()
}

/// Full grid for `date` with every reserved hour flagged unavailable.
///
/// Reservations are matched on their start hour, so a record written at
/// 09:30 still blocks the 09:00 slot.
pub fn resolve_slots(date: NaiveDate, booked: &[BookedSlot]) -> Vec<TimeSlot> {
    let taken_hours: BTreeSet<u32> = booked
        .iter()
        .filter(|slot| slot.date == date)
        .map(|slot| slot.start.hour())
        .collect();

    let mut slots = slot_grid();
    for slot in &mut slots {
        if taken_hours.contains(&slot.start.hour()) {
            slot.available = false;
        }
    }
    slots
}

/// Days of `month` holding at least [`SLOTS_PER_DAY`] reservations.
pub fn fully_booked(month: MonthKey, booked: &[BookedSlot]) -> BTreeSet<NaiveDate> {
    let mut per_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for slot in booked.iter().filter(|slot| month.contains(slot.date)) {
        *per_date.entry(slot.date).or_default() += 1;
    }

    per_date
        .into_iter()
        .filter(|(_, count)| *count >= SLOTS_PER_DAY)
        .map(|(date, _)| date)
        .collect()
}
