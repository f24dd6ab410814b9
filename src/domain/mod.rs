//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `attendee` - Conference registrations
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `user` - Signed-in user and role-based navigation
//! - `paper` - Paper submissions, statuses, AI review reports and reviewers
//! - `schedule` - Conferences, schedule parameters and sessions

pub mod attendee;
pub mod foundation;
pub mod paper;
pub mod schedule;
pub mod user;
