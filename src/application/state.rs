//! Shared application state.

use std::sync::Arc;

use super::handlers::{
    ChangePaperStatusHandler, GenerateScheduleHandler, ReviewPaperHandler, SubmitPaperHandler,
};
use super::stores::{PaperStore, ScheduleStore};
use crate::domain::paper::PaperStats;
use crate::ports::EnrichmentGateway;

/// Everything a view layer needs, created once at startup.
///
/// Cloning is cheap; clones share the same stores.
#[derive(Clone)]
pub struct AppState {
    pub papers: Arc<PaperStore>,
    pub schedule: Arc<ScheduleStore>,
    pub gateway: Arc<dyn EnrichmentGateway>,
}

impl AppState {
    /// State with no papers and no schedule.
    pub fn new(gateway: Arc<dyn EnrichmentGateway>) -> Self {
        Self {
            papers: Arc::new(PaperStore::new()),
            schedule: Arc::new(ScheduleStore::new()),
            gateway,
        }
    }

    /// State holding the demo papers.
    pub fn with_seed_data(gateway: Arc<dyn EnrichmentGateway>) -> Self {
        Self {
            papers: Arc::new(PaperStore::seeded()),
            ..Self::new(gateway)
        }
    }

    pub fn paper_stats(&self) -> PaperStats {
        PaperStats::from_papers(&self.papers.list())
    }

    pub fn submit_paper_handler(&self) -> SubmitPaperHandler {
        SubmitPaperHandler::new(self.papers.clone())
    }

    pub fn change_status_handler(&self) -> ChangePaperStatusHandler {
        ChangePaperStatusHandler::new(self.papers.clone())
    }

    pub fn review_paper_handler(&self) -> ReviewPaperHandler {
        ReviewPaperHandler::new(self.papers.clone(), self.gateway.clone())
    }

    pub fn generate_schedule_handler(&self) -> GenerateScheduleHandler {
        GenerateScheduleHandler::new(self.schedule.clone(), self.gateway.clone())
    }
}
