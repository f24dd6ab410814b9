//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Raw prompt-in, text-out generative AI call
//! - `EnrichmentGateway` - Schedule drafting and paper reviewing on top of it

mod ai_provider;
mod enrichment_gateway;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    RequestMetadata, ResponseFormat, TokenUsage,
};
pub use enrichment_gateway::{EnrichmentError, EnrichmentGateway};
