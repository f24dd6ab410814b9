//! Schedule module - conferences, generation parameters and sessions.
//!
//! A schedule is produced as one batch by the enrichment gateway and
//! replaces whatever schedule was shown before. Sessions keep the order the
//! generator returned; nothing here sorts them.

mod conference;
mod params;
mod session;

pub use conference::{active_conference, sample_conferences, Conference, ConferenceStatus};
pub use params::ScheduleGenerationParams;
pub use session::{sessions_from_drafts, Session, SessionDraft, TimeSlot};
