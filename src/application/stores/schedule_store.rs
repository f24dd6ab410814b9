//! In-memory schedule.
//!
//! The schedule is replaced wholesale on every generation; there is no
//! per-session edit.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::domain::schedule::Session;

/// The current conference schedule. Empty until first generation.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    sessions: RwLock<Vec<Session>>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the current schedule and stores `sessions` in their given
    /// order. Readers see either the old list or the new one, never a mix.
    pub fn replace_all(&self, sessions: Vec<Session>) {
        let count = sessions.len();
        *self.sessions.write().unwrap_or_else(PoisonError::into_inner) = sessions;
        tracing::info!(sessions = count, "Schedule replaced");
    }

    /// Snapshot of the current schedule.
    pub fn list(&self) -> Vec<Session> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Session>> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }
}
