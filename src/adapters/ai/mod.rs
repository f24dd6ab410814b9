//! AI Adapters.
//!
//! Implementations of the AIProvider and EnrichmentGateway ports.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models via the generateContent REST API
//! - `MockAIProvider` - Configurable mock for testing
//! - `AiEnrichmentGateway` - Schedule drafting and paper reviews on any provider

mod enrichment_gateway;
mod gemini_provider;
mod mock_provider;
mod prompts;

pub use enrichment_gateway::AiEnrichmentGateway;
pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
