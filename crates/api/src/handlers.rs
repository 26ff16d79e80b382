pub mod availability;
pub mod bookings;
pub mod clients;
pub mod contact;
pub mod testimonials;
