//! Paper module - submissions and their review lifecycle.
//!
//! # Domain Invariants
//!
//! 1. A paper's id is assigned at submission and never changes
//! 2. Status moves freely between Submitted, Under Review, Accepted, Rejected
//! 3. An AI review is attached complete or not at all
//! 4. Only completed reviewer assignments carry a score

mod aggregate;
mod errors;
mod review;
mod reviewer;
mod seed;
mod stats;
mod status;

pub use aggregate::Paper;
pub use errors::PaperError;
pub use review::{AiReview, ReviewReport, Verdict};
pub use reviewer::{
    sample_assignments, sample_reviewers, AssignmentStatus, ReviewAssignment, Reviewer,
};
pub use seed::sample_papers;
pub use stats::PaperStats;
pub use status::PaperStatus;
