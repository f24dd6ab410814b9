//! Enrichment Gateway Port - AI-drafted schedules and paper reviews.
//!
//! The only boundary between the conference core and the generative AI
//! service. Both operations are stateless; callers decide what to do with the
//! result and must leave their state untouched when an operation fails.

use async_trait::async_trait;
use thiserror::Error;

use super::AIError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::paper::{Paper, ReviewReport};
use crate::domain::schedule::{ScheduleGenerationParams, Session};

/// Port for AI-assisted enrichment of conference data.
#[async_trait]
pub trait EnrichmentGateway: Send + Sync {
    /// Drafts a full schedule for the given parameters.
    ///
    /// Every returned session has a non-empty id unique within the batch;
    /// order is the service's order.
    ///
    /// # Errors
    ///
    /// - `Configuration` if no credential is configured (no call is made)
    /// - `Service` if the call fails or the payload is empty or malformed
    async fn generate_schedule(
        &self,
        params: &ScheduleGenerationParams,
    ) -> Result<Vec<Session>, EnrichmentError>;

    /// Drafts a preliminary review of a paper from its title, author and
    /// abstract.
    ///
    /// # Errors
    ///
    /// Same as [`EnrichmentGateway::generate_schedule`].
    async fn review_paper(&self, paper: &Paper) -> Result<ReviewReport, EnrichmentError>;
}

/// Failure of an enrichment operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrichmentError {
    /// The environment is missing something; retrying will not help.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The AI call or its payload failed; the operation may be re-invoked.
    #[error("service error: {0}")]
    Service(String),
}

impl EnrichmentError {
    pub fn configuration(message: impl Into<String>) -> Self {
        EnrichmentError::Configuration(message.into())
    }

    pub fn service(message: impl Into<String>) -> Self {
        EnrichmentError::Service(message.into())
    }

    /// Returns true if re-invoking the operation may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EnrichmentError::Service(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EnrichmentError::Configuration(_) => ErrorCode::AIConfigurationMissing,
            EnrichmentError::Service(_) => ErrorCode::AIProviderError,
        }
    }
}

impl From<AIError> for EnrichmentError {
    fn from(err: AIError) -> Self {
        match err {
            AIError::MissingCredential => EnrichmentError::configuration(err.to_string()),
            other => EnrichmentError::service(other.to_string()),
        }
    }
}

impl From<EnrichmentError> for DomainError {
    fn from(err: EnrichmentError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
