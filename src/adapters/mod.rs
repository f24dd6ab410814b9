//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generative AI providers and the enrichment gateway built on them

pub mod ai;

pub use ai::{AiEnrichmentGateway, GeminiConfig, GeminiProvider, MockAIProvider, MockError};
