//! Application handlers.
//!
//! Command handlers that wire gateway results into the stores.

pub mod paper;
pub mod schedule;

pub use paper::{
    ChangePaperStatusCommand, ChangePaperStatusHandler, ReviewPaperCommand, ReviewPaperError,
    ReviewPaperHandler, SubmitPaperCommand, SubmitPaperHandler, ANONYMOUS_AUTHOR,
};
pub use schedule::{GenerateScheduleCommand, GenerateScheduleHandler};
