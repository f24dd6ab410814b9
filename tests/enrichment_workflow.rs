//! End-to-end flows through AppState, the handlers and the AI gateway,
//! with the model replaced by the mock provider.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use conference_desk::adapters::ai::{AiEnrichmentGateway, MockAIProvider, MockError};
use conference_desk::application::{
    AppState, ChangePaperStatusCommand, GenerateScheduleCommand, ReviewPaperCommand,
    ReviewPaperError, SubmitPaperCommand,
};
use conference_desk::domain::foundation::{PaperId, SessionId};
use conference_desk::domain::paper::{Paper, PaperStatus, ReviewReport, Verdict};
use conference_desk::domain::schedule::{ScheduleGenerationParams, Session};
use conference_desk::ports::{EnrichmentError, EnrichmentGateway};

const FIVE_SESSIONS: &str = r#"[
    {"id":"s-keynote","time":"09:00-10:00","title":"Opening Keynote","speaker":"Dr. A","room":"Main Hall","track":"Main"},
    {"time":"10:00-11:00","title":"Soft Grippers","speaker":"B","room":"Room 1","track":"Hardware"},
    {"time":"10:00-11:00","title":"Motion Planning","speaker":"C","room":"Room 2","track":"Software"},
    {"id":"s-ethics","time":"10:00-11:00","title":"Robot Ethics","speaker":"D","room":"Room 3","track":"Society"},
    {"time":"11:00-11:30","title":"Coffee Break","speaker":"-","room":"Lobby","track":"All","description":"Networking"}
]"#;

fn review_json(verdict: &str) -> String {
    format!(
        r#"{{"summary":"Solid work. Limited evaluation.","pros":["p1","p2","p3"],"cons":["c1","c2","c3"],"verdict":"{}"}}"#,
        verdict
    )
}

fn state_with(provider: &MockAIProvider) -> AppState {
    let gateway = AiEnrichmentGateway::new(Arc::new(provider.clone()));
    AppState::with_seed_data(Arc::new(gateway))
}

fn robotics() -> ScheduleGenerationParams {
    ScheduleGenerationParams::new("Robotics", 2, 3).unwrap()
}

fn id(raw: &str) -> PaperId {
    PaperId::new(raw).unwrap()
}

#[tokio::test]
async fn submitted_paper_starts_unreviewed() {
    let state = AppState::new(Arc::new(AiEnrichmentGateway::new(Arc::new(
        MockAIProvider::new(),
    ))));

    let paper = state.submit_paper_handler().handle(SubmitPaperCommand {
        title: "Edge Computing at Scale".to_string(),
        abstract_text: "...".to_string(),
        submitter: None,
    });

    let papers = state.papers.list();
    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].status(), PaperStatus::Submitted);
    assert!(!papers[0].id().as_str().is_empty());
    assert!(!paper.ai_review().is_reviewed());
}

#[tokio::test]
async fn accepting_a_paper_keeps_its_content() {
    let state = state_with(&MockAIProvider::new());
    let before = state.papers.find(&id("1")).unwrap();
    assert_eq!(before.status(), PaperStatus::Submitted);

    state
        .change_status_handler()
        .handle(ChangePaperStatusCommand {
            paper_id: id("1"),
            status: PaperStatus::Accepted,
        })
        .unwrap();

    let after = state.papers.find(&id("1")).unwrap();
    assert_eq!(after.status(), PaperStatus::Accepted);
    assert_eq!(after.id(), before.id());
    assert_eq!(after.title(), before.title());
    assert_eq!(after.abstract_text(), before.abstract_text());
}

#[tokio::test]
async fn generated_schedule_fills_in_missing_ids_in_order() {
    let provider = MockAIProvider::new().with_response(FIVE_SESSIONS);
    let state = state_with(&provider);

    state
        .generate_schedule_handler()
        .handle(GenerateScheduleCommand { params: robotics() })
        .await
        .unwrap();

    let sessions = state.schedule.list();
    assert_eq!(sessions.len(), 5);

    let ids: HashSet<&str> = sessions.iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids.len(), 5);
    assert!(ids.iter().all(|id| !id.is_empty()));

    let titles: Vec<&str> = sessions.iter().map(|s| s.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Opening Keynote",
            "Soft Grippers",
            "Motion Planning",
            "Robot Ethics",
            "Coffee Break"
        ]
    );
    assert_eq!(sessions[0].id().as_str(), "s-keynote");
    assert_eq!(sessions[3].id().as_str(), "s-ethics");
}

#[tokio::test]
async fn failed_generation_keeps_current_schedule() {
    let provider = MockAIProvider::new()
        .with_response(FIVE_SESSIONS)
        .with_error(MockError::Unavailable {
            message: "overloaded".to_string(),
        });
    let state = state_with(&provider);
    let handler = state.generate_schedule_handler();

    handler
        .handle(GenerateScheduleCommand { params: robotics() })
        .await
        .unwrap();
    let before = state.schedule.list();

    let result = handler
        .handle(GenerateScheduleCommand { params: robotics() })
        .await;

    assert!(matches!(result, Err(EnrichmentError::Service(_))));
    assert_eq!(state.schedule.list(), before);
}

#[tokio::test]
async fn malformed_schedule_keeps_current_schedule() {
    let provider = MockAIProvider::new().with_response("not json at all");
    let state = state_with(&provider);

    let result = state
        .generate_schedule_handler()
        .handle(GenerateScheduleCommand { params: robotics() })
        .await;

    assert!(matches!(result, Err(EnrichmentError::Service(_))));
    assert!(state.schedule.is_empty());
}

#[tokio::test]
async fn review_without_credential_fails_before_any_call() {
    let provider = MockAIProvider::new()
        .with_response(review_json("Accept"))
        .without_credential();
    let state = state_with(&provider);
    let before = state.papers.list();

    let result = state
        .review_paper_handler()
        .handle(ReviewPaperCommand { paper_id: id("2") })
        .await;

    assert!(matches!(
        result,
        Err(ReviewPaperError::Enrichment(EnrichmentError::Configuration(_)))
    ));
    assert_eq!(provider.call_count(), 0);
    assert_eq!(state.papers.list(), before);
}

#[tokio::test]
async fn review_is_attached_whole() {
    let provider = MockAIProvider::new().with_response(review_json("Strong Accept"));
    let state = state_with(&provider);

    let reviewed = state
        .review_paper_handler()
        .handle(ReviewPaperCommand { paper_id: id("1") })
        .await
        .unwrap();

    let report = reviewed.ai_review().report().unwrap();
    assert_eq!(report.pros.len(), 3);
    assert_eq!(report.cons.len(), 3);
    assert!(!report.summary.is_empty());
    assert_eq!(report.recognized_verdict(), Some(Verdict::StrongAccept));
    assert_eq!(reviewed.status(), PaperStatus::UnderReview);
    assert_eq!(state.paper_stats().ai_reviewed, 1);
}

#[tokio::test]
async fn incomplete_review_attaches_nothing() {
    let provider = MockAIProvider::new()
        .with_response(r#"{"summary":"s","pros":["a"],"cons":["b"]}"#);
    let state = state_with(&provider);
    let before = state.papers.list();

    let result = state
        .review_paper_handler()
        .handle(ReviewPaperCommand { paper_id: id("1") })
        .await;

    assert!(result.is_err());
    assert_eq!(state.papers.list(), before);
}

/// Gateway whose review latency depends on the paper, so completions
/// arrive out of request order.
struct StaggeredGateway;

#[async_trait]
impl EnrichmentGateway for StaggeredGateway {
    async fn generate_schedule(
        &self,
        _params: &ScheduleGenerationParams,
    ) -> Result<Vec<Session>, EnrichmentError> {
        Ok(vec![Session::new(
            SessionId::new("only").unwrap(),
            "09:00-10:00",
            "Only",
            "S",
            "R",
            "T",
            None,
        )])
    }

    async fn review_paper(&self, paper: &Paper) -> Result<ReviewReport, EnrichmentError> {
        let delay = match paper.id().as_str() {
            "1" => 60,
            "2" => 30,
            _ => 5,
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(ReviewReport {
            summary: format!("Review of {}", paper.title()),
            pros: vec!["a".into(), "b".into(), "c".into()],
            cons: vec!["d".into(), "e".into(), "f".into()],
            verdict: "Accept".to_string(),
        })
    }
}

#[tokio::test]
async fn concurrent_reviews_land_on_their_own_papers() {
    let state = AppState::with_seed_data(Arc::new(StaggeredGateway));

    let outcomes = state
        .review_paper_handler()
        .handle_many(vec![id("1"), id("2"), id("3")])
        .await;

    assert!(outcomes.iter().all(|(_, result)| result.is_ok()));
    for paper in state.papers.list() {
        let report = paper.ai_review().report().unwrap();
        assert_eq!(report.summary, format!("Review of {}", paper.title()));
        assert_eq!(paper.status(), PaperStatus::UnderReview);
    }
}

#[tokio::test]
async fn review_lands_on_record_current_at_completion() {
    let state = AppState::with_seed_data(Arc::new(StaggeredGateway));
    let reviewer = state.review_paper_handler();
    let editor = state.change_status_handler();

    let review = tokio::spawn(async move {
        reviewer
            .handle(ReviewPaperCommand { paper_id: id("1") })
            .await
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    let edited = editor
        .handle(ChangePaperStatusCommand {
            paper_id: id("1"),
            status: PaperStatus::Accepted,
        })
        .unwrap();
    let reviewed = review.await.unwrap().unwrap();

    assert_eq!(edited.status(), PaperStatus::Accepted);
    assert!(reviewed.ai_review().is_reviewed());
    assert_eq!(reviewed.status(), PaperStatus::UnderReview);
    assert_eq!(state.papers.find(&id("1")), Some(reviewed));
    assert_eq!(state.papers.len(), 3);
}
