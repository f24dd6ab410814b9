//! In-memory paper collection.
//!
//! Holds the ordered list of papers for one process. Readers get owned
//! snapshots, so later writes never show up in a list already handed out.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::PaperId;
use crate::domain::paper::{sample_papers, Paper, PaperError};

/// Ordered, in-memory collection of papers.
///
/// Thread-safe via internal `RwLock`. Does not persist data across restarts.
#[derive(Debug, Default)]
pub struct PaperStore {
    papers: RwLock<Vec<Paper>>,
}

impl PaperStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `papers` in the given order.
    ///
    /// # Errors
    ///
    /// `PaperError::DuplicateId` if two papers share an id.
    pub fn with_papers(papers: Vec<Paper>) -> Result<Self, PaperError> {
        let mut seen = HashSet::with_capacity(papers.len());
        if let Some(dup) = papers.iter().find(|p| !seen.insert(p.id())) {
            return Err(PaperError::duplicate_id(dup.id().clone()));
        }
        Ok(Self {
            papers: RwLock::new(papers),
        })
    }

    /// Creates a store holding the demo papers.
    pub fn seeded() -> Self {
        // Seed ids are the fixed labels "1".."3".
        Self {
            papers: RwLock::new(sample_papers()),
        }
    }

    /// Adds a new paper at the end with a fresh id, status `Submitted`,
    /// today's date and no AI review.
    pub fn submit(
        &self,
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        author: impl Into<String>,
    ) -> Paper {
        let paper = Paper::submit(title, abstract_text, author);
        self.write().push(paper.clone());
        tracing::info!(paper_id = %paper.id(), title = paper.title(), "Paper submitted");
        paper
    }

    /// Replaces the stored paper that has the same id, keeping its position.
    ///
    /// # Errors
    ///
    /// `PaperError::NotFound` if no stored paper has that id. The
    /// collection is left untouched.
    pub fn update(&self, paper: Paper) -> Result<(), PaperError> {
        let mut papers = self.write();
        match papers.iter_mut().find(|p| p.id() == paper.id()) {
            Some(slot) => {
                tracing::debug!(paper_id = %paper.id(), status = %paper.status(), "Paper updated");
                *slot = paper;
                Ok(())
            }
            None => {
                tracing::warn!(paper_id = %paper.id(), "Update for unknown paper ignored");
                Err(PaperError::not_found(paper.id().clone()))
            }
        }
    }

    /// Snapshot of all papers in insertion order.
    pub fn list(&self) -> Vec<Paper> {
        self.read().clone()
    }

    /// Current version of one paper.
    pub fn find(&self, id: &PaperId) -> Option<Paper> {
        self.read().iter().find(|p| p.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Paper>> {
        self.papers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Paper>> {
        self.papers.write().unwrap_or_else(PoisonError::into_inner)
    }
}
