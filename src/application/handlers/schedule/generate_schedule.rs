//! GenerateScheduleHandler - Regenerates the conference schedule.

use std::sync::Arc;

use crate::application::stores::ScheduleStore;
use crate::domain::schedule::{ScheduleGenerationParams, Session};
use crate::ports::{EnrichmentError, EnrichmentGateway};

/// Command to draft a new schedule.
#[derive(Debug, Clone)]
pub struct GenerateScheduleCommand {
    pub params: ScheduleGenerationParams,
}

/// Handler for schedule generation.
///
/// On success the whole schedule is replaced; on failure the current one
/// stays in place.
pub struct GenerateScheduleHandler {
    schedule: Arc<ScheduleStore>,
    gateway: Arc<dyn EnrichmentGateway>,
}

impl GenerateScheduleHandler {
    pub fn new(schedule: Arc<ScheduleStore>, gateway: Arc<dyn EnrichmentGateway>) -> Self {
        Self { schedule, gateway }
    }

    pub async fn handle(
        &self,
        cmd: GenerateScheduleCommand,
    ) -> Result<Vec<Session>, EnrichmentError> {
        let sessions = match self.gateway.generate_schedule(&cmd.params).await {
            Ok(sessions) => sessions,
            Err(err) => {
                tracing::warn!(theme = cmd.params.theme(), error = %err, "Schedule generation failed");
                return Err(err);
            }
        };

        self.schedule.replace_all(sessions.clone());
        Ok(sessions)
    }
}
