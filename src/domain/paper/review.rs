//! AI-drafted review attached to a paper.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of a paper.
///
/// A report is attached whole or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AiReview {
    #[default]
    NotReviewed,
    Reviewed(ReviewReport),
}

impl AiReview {
    pub fn is_reviewed(&self) -> bool {
        matches!(self, AiReview::Reviewed(_))
    }

    /// Returns the report if one is attached.
    pub fn report(&self) -> Option<&ReviewReport> {
        match self {
            AiReview::Reviewed(report) => Some(report),
            AiReview::NotReviewed => None,
        }
    }
}

/// Preliminary review produced by the AI service.
///
/// Fields are kept exactly as returned; in particular `verdict` is free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewReport {
    pub summary: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub verdict: String,
}

impl ReviewReport {
    /// Maps the free-text verdict onto the vocabulary the prompt asks for.
    ///
    /// Returns `None` when the service answered with something else.
    pub fn recognized_verdict(&self) -> Option<Verdict> {
        Verdict::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(self.verdict.trim()))
    }
}

/// Verdict vocabulary requested from the reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    StrongAccept,
    Accept,
    WeakAccept,
    Reject,
}

impl Verdict {
    pub const ALL: [Verdict; 4] = [
        Verdict::StrongAccept,
        Verdict::Accept,
        Verdict::WeakAccept,
        Verdict::Reject,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::StrongAccept => "Strong Accept",
            Verdict::Accept => "Accept",
            Verdict::WeakAccept => "Weak Accept",
            Verdict::Reject => "Reject",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
