//! Paper aggregate entity.
//!
//! A paper is created by submission and then changes in only two ways: a
//! status change or an attached AI review. Both produce a complete new record
//! that replaces the stored one by id.

use serde::{Deserialize, Serialize};

use super::{AiReview, PaperStatus, ReviewReport};
use crate::domain::foundation::{PaperId, Timestamp};

/// Paper aggregate - a submission to the conference.
///
/// # Invariants
///
/// - `id` is unique and never reassigned (no setter exists)
/// - `ai_review` is either absent or a complete report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    id: PaperId,
    title: String,
    author: String,
    #[serde(rename = "abstract")]
    abstract_text: String,
    status: PaperStatus,
    submission_date: Timestamp,
    #[serde(default)]
    ai_review: AiReview,
}

impl Paper {
    /// Creates a freshly submitted paper with a new id.
    ///
    /// Title and abstract are taken as given; input validation belongs to
    /// whoever collects them.
    pub fn submit(
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: PaperId::generate(),
            title: title.into(),
            author: author.into(),
            abstract_text: abstract_text.into(),
            status: PaperStatus::Submitted,
            submission_date: Timestamp::now(),
            ai_review: AiReview::NotReviewed,
        }
    }

    /// Reconstitute a paper from stored or seeded data.
    pub fn reconstitute(
        id: PaperId,
        title: String,
        author: String,
        abstract_text: String,
        status: PaperStatus,
        submission_date: Timestamp,
        ai_review: AiReview,
    ) -> Self {
        Self {
            id,
            title,
            author,
            abstract_text,
            status,
            submission_date,
            ai_review,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &PaperId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn abstract_text(&self) -> &str {
        &self.abstract_text
    }

    pub fn status(&self) -> PaperStatus {
        self.status
    }

    pub fn submission_date(&self) -> &Timestamp {
        &self.submission_date
    }

    pub fn ai_review(&self) -> &AiReview {
        &self.ai_review
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns this record with a new status. Any status may follow any other.
    pub fn with_status(mut self, status: PaperStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns this record with the AI report attached, replacing any
    /// earlier one.
    pub fn with_review(mut self, report: ReviewReport) -> Self {
        self.ai_review = AiReview::Reviewed(report);
        self
    }
}
