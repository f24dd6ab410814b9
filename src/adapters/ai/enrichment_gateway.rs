//! AI-backed implementation of the EnrichmentGateway port.
//!
//! Each operation is one structured-output completion on an `AIProvider`:
//! build the prompt and schema, call once, parse the JSON payload into
//! domain shapes. Nothing is cached between calls.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use super::prompts;
use crate::domain::foundation::Timestamp;
use crate::domain::paper::{Paper, ReviewReport};
use crate::domain::schedule::{
    sessions_from_drafts, ScheduleGenerationParams, Session, SessionDraft,
};
use crate::ports::{
    AIProvider, CompletionRequest, EnrichmentError, EnrichmentGateway, RequestMetadata,
};

const GENERATE_SCHEDULE: &str = "generate_schedule";
const REVIEW_PAPER: &str = "review_paper";

/// Enrichment gateway on top of any `AIProvider`.
pub struct AiEnrichmentGateway {
    provider: Arc<dyn AIProvider>,
}

impl AiEnrichmentGateway {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    /// Fails fast, before any request is built, when no key is configured.
    fn ensure_credential(&self, operation: &str) -> Result<(), EnrichmentError> {
        if self.provider.has_credential() {
            return Ok(());
        }
        tracing::warn!(operation, "AI credential is not configured");
        Err(EnrichmentError::configuration("AI API key is missing"))
    }

    /// Issues one JSON-shaped completion and returns its non-empty payload.
    async fn request_json(
        &self,
        operation: &'static str,
        prompt: String,
        schema: Value,
    ) -> Result<String, EnrichmentError> {
        let metadata = RequestMetadata::new(operation, Uuid::new_v4().to_string());
        let request = CompletionRequest::new(prompt, metadata).with_json_schema(schema);

        let response = self.provider.complete(request).await.map_err(|err| {
            tracing::error!(operation, error = %err, "AI call failed");
            EnrichmentError::from(err)
        })?;

        tracing::info!(
            operation,
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "AI call completed"
        );

        if response.content.trim().is_empty() {
            tracing::error!(operation, "AI service returned no text payload");
            return Err(EnrichmentError::service("no response from AI"));
        }
        Ok(response.content)
    }
}

#[async_trait]
impl EnrichmentGateway for AiEnrichmentGateway {
    async fn generate_schedule(
        &self,
        params: &ScheduleGenerationParams,
    ) -> Result<Vec<Session>, EnrichmentError> {
        self.ensure_credential(GENERATE_SCHEDULE)?;

        let payload = self
            .request_json(
                GENERATE_SCHEDULE,
                prompts::schedule_prompt(params),
                prompts::schedule_schema(),
            )
            .await?;

        let sessions = parse_schedule_payload(&payload, Timestamp::now().as_unix_millis())?;
        tracing::info!(
            theme = params.theme(),
            days = params.days(),
            tracks = params.tracks(),
            sessions = sessions.len(),
            "Schedule drafted"
        );
        Ok(sessions)
    }

    async fn review_paper(&self, paper: &Paper) -> Result<ReviewReport, EnrichmentError> {
        self.ensure_credential(REVIEW_PAPER)?;

        let payload = self
            .request_json(
                REVIEW_PAPER,
                prompts::review_prompt(paper),
                prompts::review_schema(),
            )
            .await?;

        let report: ReviewReport = parse_payload(&payload)?;
        tracing::info!(paper_id = %paper.id(), verdict = %report.verdict, "Paper reviewed");
        Ok(report)
    }
}

/// Parses a schedule payload, giving id-less and repeated-id items their
/// synthetic ids.
fn parse_schedule_payload(
    payload: &str,
    batch_millis: i64,
) -> Result<Vec<Session>, EnrichmentError> {
    let drafts: Vec<SessionDraft> = parse_payload(payload)?;
    Ok(sessions_from_drafts(drafts, batch_millis))
}

fn parse_payload<T: DeserializeOwned>(payload: &str) -> Result<T, EnrichmentError> {
    let json = strip_code_fence(payload);
    serde_json::from_str(json).map_err(|e| {
        tracing::error!(error = %e, "AI payload did not match the expected shape");
        EnrichmentError::service(format!("malformed AI payload: {}", e))
    })
}

/// Unwraps a markdown code block, if the model added one despite the JSON
/// response type.
fn strip_code_fence(payload: &str) -> &str {
    let trimmed = payload.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end()
        .strip_suffix("```")
        .map(str::trim)
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::ports::ResponseFormat;
    use std::collections::HashSet;

    const REVIEW_JSON: &str = r#"{
        "summary": "Proposes sparse activation. Cuts inference power.",
        "pros": ["Clear motivation", "Strong results", "Practical"],
        "cons": ["Single model family", "No ablation", "Energy measured indirectly"],
        "verdict": "Weak Accept"
    }"#;

    fn gateway(provider: &MockAIProvider) -> AiEnrichmentGateway {
        AiEnrichmentGateway::new(Arc::new(provider.clone()))
    }

    fn params() -> ScheduleGenerationParams {
        ScheduleGenerationParams::new("Robotics", 2, 3).unwrap()
    }

    #[tokio::test]
    async fn generate_schedule_assigns_missing_ids_and_keeps_order() {
        let payload = r#"[
            {"id":"k1","time":"09:00-10:00","title":"Keynote","speaker":"A","room":"Hall","track":"Main"},
            {"time":"10:00-11:00","title":"Arms","speaker":"B","room":"R1","track":"Hardware"},
            {"id":"","time":"10:00-11:00","title":"Legs","speaker":"C","room":"R2","track":"Software"},
            {"time":"11:00-11:30","title":"Coffee","speaker":"-","room":"Lobby","track":"All","description":"Networking"}
        ]"#;
        let provider = MockAIProvider::new().with_response(payload);

        let sessions = gateway(&provider).generate_schedule(&params()).await.unwrap();

        let titles: Vec<&str> = sessions.iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["Keynote", "Arms", "Legs", "Coffee"]);
        assert_eq!(sessions[0].id().as_str(), "k1");
        assert!(sessions[1].id().as_str().starts_with("gen-session-1-"));
        assert!(sessions[2].id().as_str().starts_with("gen-session-2-"));
        assert_eq!(sessions[3].description(), Some("Networking"));

        let ids: HashSet<&str> = sessions.iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[tokio::test]
    async fn generate_schedule_replaces_repeated_ids() {
        let payload = r#"[
            {"id":"s","time":"09:00-10:00","title":"First","speaker":"A","room":"R1","track":"T1"},
            {"id":"s","time":"09:00-10:00","title":"Second","speaker":"B","room":"R2","track":"T2"}
        ]"#;
        let provider = MockAIProvider::new().with_response(payload);

        let sessions = gateway(&provider).generate_schedule(&params()).await.unwrap();

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].id().as_str(), "s");
        assert!(sessions[1].id().as_str().starts_with("gen-session-1-"));
        assert_eq!(sessions[1].title(), "Second");
    }

    #[tokio::test]
    async fn generate_schedule_requests_json_array() {
        let provider = MockAIProvider::new().with_response("[]");
        gateway(&provider).generate_schedule(&params()).await.unwrap();

        let call = &provider.get_calls()[0];
        assert_eq!(call.metadata.operation, "generate_schedule");
        assert!(call.prompt.contains("Robotics"));
        match &call.response_format {
            ResponseFormat::Json { schema } => assert_eq!(schema["type"], "ARRAY"),
            other => panic!("expected JSON format, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_array_is_a_valid_schedule() {
        let provider = MockAIProvider::new().with_response("[]");
        let sessions = gateway(&provider).generate_schedule(&params()).await.unwrap();
        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn generate_schedule_without_credential_makes_no_call() {
        let provider = MockAIProvider::new().with_response("[]").without_credential();

        let result = gateway(&provider).generate_schedule(&params()).await;

        assert!(matches!(result, Err(EnrichmentError::Configuration(_))));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_payload_is_a_service_error() {
        let provider = MockAIProvider::new().with_response("   ");
        let result = gateway(&provider).generate_schedule(&params()).await;
        assert!(matches!(result, Err(EnrichmentError::Service(_))));
    }

    #[tokio::test]
    async fn non_array_payload_is_a_service_error() {
        let provider = MockAIProvider::new()
            .with_response(r#"{"time":"09:00","title":"t","speaker":"s","room":"r","track":"x"}"#);
        let result = gateway(&provider).generate_schedule(&params()).await;
        assert!(matches!(result, Err(EnrichmentError::Service(_))));
    }

    #[tokio::test]
    async fn item_missing_required_field_is_a_service_error() {
        let provider = MockAIProvider::new()
            .with_response(r#"[{"time":"09:00","title":"t","speaker":"s","room":"r"}]"#);
        let result = gateway(&provider).generate_schedule(&params()).await;
        assert!(matches!(result, Err(EnrichmentError::Service(_))));
    }

    #[tokio::test]
    async fn provider_failure_is_a_service_error() {
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "503".to_string(),
        });
        let result = gateway(&provider).generate_schedule(&params()).await;

        let err = result.unwrap_err();
        assert!(matches!(err, EnrichmentError::Service(_)));
        assert!(err.is_retryable());
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn review_paper_returns_report_as_parsed() {
        let provider = MockAIProvider::new().with_response(REVIEW_JSON);
        let paper = Paper::submit("Sustainable AI", "Sparse activation...", "James Wilson");

        let report = gateway(&provider).review_paper(&paper).await.unwrap();

        assert_eq!(report.pros.len(), 3);
        assert_eq!(report.cons.len(), 3);
        assert_eq!(report.cons[2], "Energy measured indirectly");
        assert_eq!(report.verdict, "Weak Accept");

        let call = &provider.get_calls()[0];
        assert_eq!(call.metadata.operation, "review_paper");
        assert!(call.prompt.contains("Sustainable AI"));
    }

    #[tokio::test]
    async fn review_verdict_is_not_normalized() {
        let payload = r#"{"summary":"s","pros":["a"],"cons":["b"],"verdict":"leaning accept"}"#;
        let provider = MockAIProvider::new().with_response(payload);

        let report = gateway(&provider)
            .review_paper(&Paper::submit("t", "a", "b"))
            .await
            .unwrap();
        assert_eq!(report.verdict, "leaning accept");
    }

    #[tokio::test]
    async fn partial_review_is_a_service_error() {
        let payload = r#"{"summary":"s","pros":["a"],"verdict":"Accept"}"#;
        let provider = MockAIProvider::new().with_response(payload);

        let result = gateway(&provider).review_paper(&Paper::submit("t", "a", "b")).await;
        assert!(matches!(result, Err(EnrichmentError::Service(_))));
    }

    #[tokio::test]
    async fn review_without_credential_makes_no_call() {
        let provider = MockAIProvider::new().without_credential();
        let result = gateway(&provider).review_paper(&Paper::submit("t", "a", "b")).await;

        assert!(matches!(result, Err(EnrichmentError::Configuration(_))));
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn parse_schedule_payload_uses_batch_time() {
        let payload = r#"[{"time":"t","title":"a","speaker":"s","room":"r","track":"x"}]"#;
        let sessions = parse_schedule_payload(payload, 1234).unwrap();
        assert_eq!(sessions[0].id().as_str(), "gen-session-0-1234");
    }

    #[test]
    fn strips_markdown_code_fence() {
        assert_eq!(strip_code_fence("```json\n[1, 2]\n```"), "[1, 2]");
        assert_eq!(strip_code_fence("```\n{}\n```  "), "{}");
        assert_eq!(strip_code_fence("  [3]  "), "[3]");
    }

    #[test]
    fn unterminated_fence_is_left_for_the_parser() {
        assert_eq!(strip_code_fence("```json\n[1"), "```json\n[1");
    }

    #[test]
    fn fenced_review_parses() {
        let fenced = format!("```json\n{}\n```", REVIEW_JSON);
        let report: ReviewReport = parse_payload(&fenced).unwrap();
        assert_eq!(report.verdict, "Weak Accept");
    }
}
