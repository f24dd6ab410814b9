//! Paper-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, PaperId};

/// Paper-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaperError {
    /// No paper with this id is stored.
    NotFound(PaperId),
    /// A collection would hold two records with this id.
    DuplicateId(PaperId),
}

impl PaperError {
    pub fn not_found(id: PaperId) -> Self {
        PaperError::NotFound(id)
    }
    pub fn duplicate_id(id: PaperId) -> Self {
        PaperError::DuplicateId(id)
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            PaperError::NotFound(_) => ErrorCode::PaperNotFound,
            PaperError::DuplicateId(_) => ErrorCode::DuplicatePaperId,
        }
    }
    pub fn message(&self) -> String {
        match self {
            PaperError::NotFound(id) => format!("Paper not found: {}", id),
            PaperError::DuplicateId(id) => format!("Duplicate paper id: {}", id),
        }
    }
}

impl std::fmt::Display for PaperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PaperError {}

impl From<PaperError> for DomainError {
    fn from(err: PaperError) -> Self {
        let detail = match &err {
            PaperError::NotFound(id) | PaperError::DuplicateId(id) => id.to_string(),
        };
        DomainError::new(err.code(), err.message()).with_detail("paper_id", detail)
    }
}
