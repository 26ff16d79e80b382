
#[path = "handlers/availability_test.rs"]
mod availability_test;
#[path = "handlers/bookings_test.rs"]
mod bookings_test;
#[path = "handlers/clients_test.rs"]
mod clients_test;
#[path = "handlers/contact_test.rs"]
mod contact_test;
#[path = "handlers/middleware_test.rs"]
mod middleware_test;
#[path = "handlers/testimonials_test.rs"]
mod testimonials_test;
