//! # CoachDesk Booking Wizard
//!
//! The four-step booking flow (calendar, time slots, contact details,
//! confirmation) as a plain state machine. It drives any
//! [`SchedulingService`](coachdesk_core::service::SchedulingService): the API's
//! in-process service, or [`http::ApiClient`] talking to a running server.

/// Per-session cache of fully booked days
pub mod cache;
/// Connection settings
pub mod config;
/// Contact step input and its checks
pub mod form;
/// `SchedulingService` over the public HTTP API
pub mod http;
/// Bounded retry around resolver calls
pub mod retry;
/// The state machine itself
pub mod wizard;

pub use cache::MonthCache;
pub use config::WizardConfig;
pub use form::ContactForm;
pub use http::ApiClient;
pub use retry::RetryPolicy;
pub use wizard::{BookingWizard, Confirmation, Step};
