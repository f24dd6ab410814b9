//! Schedule command handlers.

mod generate_schedule;

pub use generate_schedule::{GenerateScheduleCommand, GenerateScheduleHandler};
