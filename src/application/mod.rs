//! Application layer - Stores, handlers and shared state.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
mod state;
pub mod stores;

pub use handlers::{
    ChangePaperStatusCommand, ChangePaperStatusHandler, GenerateScheduleCommand,
    GenerateScheduleHandler, ReviewPaperCommand, ReviewPaperError, ReviewPaperHandler,
    SubmitPaperCommand, SubmitPaperHandler, ANONYMOUS_AUTHOR,
};
pub use state::AppState;
pub use stores::{PaperStore, ScheduleStore};
