//! Attendee module - conference registrations.

mod attendee;

pub use attendee::{sample_attendees, Attendee, RegistrationStatus, TicketType};
