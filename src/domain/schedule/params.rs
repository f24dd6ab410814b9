//! Input for schedule generation.

use serde::{Deserialize, Serialize};

use super::Conference;
use crate::domain::foundation::ValidationError;

/// What kind of schedule to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleGenerationParams {
    theme: String,
    days: u32,
    tracks: u32,
}

impl ScheduleGenerationParams {
    pub const DEFAULT_DAYS: u32 = 1;
    pub const DEFAULT_TRACKS: u32 = 2;

    /// Creates params, rejecting zero days or tracks.
    ///
    /// The theme is passed through as given, blank included.
    pub fn new(theme: impl Into<String>, days: u32, tracks: u32) -> Result<Self, ValidationError> {
        if days == 0 {
            return Err(ValidationError::out_of_range("days", 1, u32::MAX as i64, 0));
        }
        if tracks == 0 {
            return Err(ValidationError::out_of_range("tracks", 1, u32::MAX as i64, 0));
        }
        Ok(Self {
            theme: theme.into(),
            days,
            tracks,
        })
    }

    /// Defaults offered when opening a conference's schedule tab.
    pub fn for_conference(conference: &Conference) -> Self {
        Self {
            theme: conference.theme().to_string(),
            days: Self::DEFAULT_DAYS,
            tracks: Self::DEFAULT_TRACKS,
        }
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn tracks(&self) -> u32 {
        self.tracks
    }
}
