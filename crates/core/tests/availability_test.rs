use chrono::{NaiveDate, NaiveTime};
use coachdesk_core::{
    availability::{BookedSlot, SLOTS_PER_DAY, fully_booked, resolve_slots, slot_grid},
    calendar::MonthKey,
};
use pretty_assertions::assert_eq;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn booked(day: &str, hour: u32) -> BookedSlot {
    BookedSlot {
        date: date(day),
        start: time(hour, 0),
    }
}

fn full_day(day: &str) -> Vec<BookedSlot> {
    (9..17).map(|hour| booked(day, hour)).collect()
}

#[test]
fn test_slot_grid_is_hourly_nine_to_five() {
    let grid = slot_grid();

    assert_eq!(grid.len(), SLOTS_PER_DAY);
    assert_eq!(SLOTS_PER_DAY, 8);
    for (i, slot) in grid.iter().enumerate() {
        assert_eq!(slot.start, time(9 + i as u32, 0));
        assert_eq!(slot.end, time(10 + i as u32, 0));
        assert!(slot.available);
    }
}

#[test]
fn test_resolve_slots_flags_only_matching_date() {
    let reservations = vec![
        booked("2025-11-21", 9),
        booked("2025-11-21", 14),
        booked("2025-11-24", 10),
    ];

    let slots = resolve_slots(date("2025-11-21"), &reservations);

    assert_eq!(slots.len(), 8);
    let unavailable: Vec<NaiveTime> = slots
        .iter()
        .filter(|s| !s.available)
        .map(|s| s.start)
        .collect();
    assert_eq!(unavailable, vec![time(9, 0), time(14, 0)]);
}

#[test]
fn test_resolve_slots_matches_on_start_hour() {
    let reservations = vec![BookedSlot {
        date: date("2025-11-21"),
        start: time(11, 30),
    }];

    let slots = resolve_slots(date("2025-11-21"), &reservations);
    let eleven = slots.iter().find(|s| s.start == time(11, 0)).unwrap();

    assert!(!eleven.available);
}

#[test]
fn test_resolve_slots_never_drops_booked_slots() {
    let slots = resolve_slots(date("2025-11-21"), &full_day("2025-11-21"));

    assert_eq!(slots.len(), 8);
    assert!(slots.iter().all(|s| !s.available));
}

#[test]
fn test_fully_booked_requires_capacity() {
    let mut reservations = full_day("2025-11-21");
    reservations.extend(full_day("2025-11-24").into_iter().take(7));

    let dates = fully_booked(MonthKey::new(2025, 11).unwrap(), &reservations);

    assert_eq!(dates.into_iter().collect::<Vec<_>>(), vec![date("2025-11-21")]);
}

#[test]
fn test_fully_booked_ignores_other_months() {
    let mut reservations = full_day("2025-12-01");
    reservations.extend(full_day("2024-11-21"));

    let dates = fully_booked(MonthKey::new(2025, 11).unwrap(), &reservations);

    assert!(dates.is_empty());
}

#[test]
fn test_fully_booked_counts_records_not_distinct_hours() {
    let reservations: Vec<BookedSlot> = (0..8).map(|_| booked("2025-11-25", 9)).collect();

    let dates = fully_booked(MonthKey::new(2025, 11).unwrap(), &reservations);

    assert!(dates.contains(&date("2025-11-25")));
}
