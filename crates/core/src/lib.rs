//! # CoachDesk Core
//!
//! Domain types and pure scheduling logic shared by the store, API and wizard
//! crates: the error taxonomy, reservation and client models, the timezone
//! utility, the month calendar, slot availability math and input validation.

/// Slot grid and fully-booked calculation
pub mod availability;
/// Month grid and date predicates
pub mod calendar;
/// Error taxonomy shared across crates
pub mod errors;
/// Wire and domain models
pub mod models;
/// Operations the booking wizard relies on
pub mod service;
/// Business/visitor timezone conversion and display
pub mod timezone;
/// Format-level input checks
pub mod validation;
