//! In-memory stores for papers and the schedule.

mod paper_store;
mod schedule_store;

pub use paper_store::PaperStore;
pub use schedule_store::ScheduleStore;
