//! ChangePaperStatusHandler - Command handler for editorial decisions.

use std::sync::Arc;

use crate::application::stores::PaperStore;
use crate::domain::foundation::PaperId;
use crate::domain::paper::{Paper, PaperError, PaperStatus};

/// Command to move a paper to another status.
#[derive(Debug, Clone)]
pub struct ChangePaperStatusCommand {
    pub paper_id: PaperId,
    pub status: PaperStatus,
}

/// Handler for status changes. Any status may follow any other.
pub struct ChangePaperStatusHandler {
    papers: Arc<PaperStore>,
}

impl ChangePaperStatusHandler {
    pub fn new(papers: Arc<PaperStore>) -> Self {
        Self { papers }
    }

    pub fn handle(&self, cmd: ChangePaperStatusCommand) -> Result<Paper, PaperError> {
        let paper = self
            .papers
            .find(&cmd.paper_id)
            .ok_or_else(|| PaperError::not_found(cmd.paper_id.clone()))?
            .with_status(cmd.status);

        self.papers.update(paper.clone())?;
        tracing::info!(paper_id = %cmd.paper_id, status = %cmd.status, "Paper status changed");
        Ok(paper)
    }
}
