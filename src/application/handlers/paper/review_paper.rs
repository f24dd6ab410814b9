//! ReviewPaperHandler - Attaches AI reviews to stored papers.
//!
//! The gateway call runs without any store lock held. When it returns, the
//! handler re-reads the paper and applies the report to the current record,
//! so edits made while the call was in flight are kept.

use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;

use crate::application::stores::PaperStore;
use crate::domain::foundation::{DomainError, ErrorCode, PaperId};
use crate::domain::paper::{Paper, PaperError, PaperStatus};
use crate::ports::{EnrichmentError, EnrichmentGateway};

/// Command to request an AI review.
#[derive(Debug, Clone)]
pub struct ReviewPaperCommand {
    pub paper_id: PaperId,
}

/// Errors from the review flow. On any error the store is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewPaperError {
    #[error(transparent)]
    Paper(#[from] PaperError),

    #[error(transparent)]
    Enrichment(#[from] EnrichmentError),
}

impl ReviewPaperError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReviewPaperError::Paper(err) => err.code(),
            ReviewPaperError::Enrichment(err) => err.code(),
        }
    }
}

impl From<ReviewPaperError> for DomainError {
    fn from(err: ReviewPaperError) -> Self {
        match err {
            ReviewPaperError::Paper(err) => err.into(),
            ReviewPaperError::Enrichment(err) => err.into(),
        }
    }
}

/// Handler for AI paper reviews.
pub struct ReviewPaperHandler {
    papers: Arc<PaperStore>,
    gateway: Arc<dyn EnrichmentGateway>,
}

impl ReviewPaperHandler {
    pub fn new(papers: Arc<PaperStore>, gateway: Arc<dyn EnrichmentGateway>) -> Self {
        Self { papers, gateway }
    }

    /// Reviews one paper, then stores it as Under Review with the report.
    pub async fn handle(&self, cmd: ReviewPaperCommand) -> Result<Paper, ReviewPaperError> {
        let paper = self
            .papers
            .find(&cmd.paper_id)
            .ok_or_else(|| PaperError::not_found(cmd.paper_id.clone()))?;

        let report = self.gateway.review_paper(&paper).await.map_err(|err| {
            tracing::warn!(paper_id = %cmd.paper_id, error = %err, "AI review failed");
            err
        })?;

        let reviewed = self
            .papers
            .find(&cmd.paper_id)
            .ok_or_else(|| PaperError::not_found(cmd.paper_id.clone()))?
            .with_status(PaperStatus::UnderReview)
            .with_review(report);

        self.papers.update(reviewed.clone())?;
        Ok(reviewed)
    }

    /// Reviews several papers concurrently.
    ///
    /// Each outcome is applied by id as it completes, so results are
    /// independent of completion order. Outcomes are returned in input order.
    pub async fn handle_many(
        &self,
        paper_ids: Vec<PaperId>,
    ) -> Vec<(PaperId, Result<Paper, ReviewPaperError>)> {
        let reviews = paper_ids.into_iter().map(|paper_id| async move {
            let result = self
                .handle(ReviewPaperCommand {
                    paper_id: paper_id.clone(),
                })
                .await;
            (paper_id, result)
        });
        join_all(reviews).await
    }
}
