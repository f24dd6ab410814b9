//! Dashboard summary over the paper collection.

use serde::Serialize;

use super::{Paper, PaperStatus};

/// Per-status counts shown on the organizer dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaperStats {
    pub total: usize,
    pub submitted: usize,
    pub under_review: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Papers carrying an AI review, regardless of status.
    pub ai_reviewed: usize,
}

impl PaperStats {
    pub fn from_papers(papers: &[Paper]) -> Self {
        papers.iter().fold(Self::default(), |mut stats, paper| {
            stats.total += 1;
            match paper.status() {
                PaperStatus::Submitted => stats.submitted += 1,
                PaperStatus::UnderReview => stats.under_review += 1,
                PaperStatus::Accepted => stats.accepted += 1,
                PaperStatus::Rejected => stats.rejected += 1,
            }
            if paper.ai_review().is_reviewed() {
                stats.ai_reviewed += 1;
            }
            stats
        })
    }

    /// Count for a single status.
    pub fn count(&self, status: PaperStatus) -> usize {
        match status {
            PaperStatus::Submitted => self.submitted,
            PaperStatus::UnderReview => self.under_review,
            PaperStatus::Accepted => self.accepted,
            PaperStatus::Rejected => self.rejected,
        }
    }

    /// Share of decided papers that were accepted, as a percentage.
    ///
    /// `None` until at least one paper is accepted or rejected.
    pub fn acceptance_rate(&self) -> Option<f64> {
        let decided = self.accepted + self.rejected;
        if decided == 0 {
            return None;
        }
        Some(self.accepted as f64 * 100.0 / decided as f64)
    }
}
