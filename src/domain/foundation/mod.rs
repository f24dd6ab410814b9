//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the
//! vocabulary shared by the domain modules.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AssignmentId, AttendeeId, ConferenceId, PaperId, ReviewerId, SessionId};
pub use timestamp::Timestamp;
