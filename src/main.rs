//! Conference Desk demo.
//!
//! Loads configuration, seeds the stores and runs one AI review and one
//! schedule generation against the configured Gemini model.

use std::sync::Arc;

use conference_desk::adapters::ai::{AiEnrichmentGateway, GeminiConfig, GeminiProvider};
use conference_desk::application::{
    AppState, GenerateScheduleCommand, ReviewPaperCommand, SubmitPaperCommand,
};
use conference_desk::config::AppConfig;
use conference_desk::domain::attendee::sample_attendees;
use conference_desk::domain::foundation::{DomainError, Timestamp};
use conference_desk::domain::paper::{sample_assignments, sample_reviewers};
use conference_desk::domain::schedule::{active_conference, sample_conferences, ScheduleGenerationParams};
use conference_desk::domain::user::User;
use conference_desk::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_telemetry_with_level(&config.telemetry.log_level);

    let provider = GeminiProvider::new(GeminiConfig::from_ai_config(&config.ai))?;
    let gateway = Arc::new(AiEnrichmentGateway::new(Arc::new(provider)));
    let state = AppState::with_seed_data(gateway);

    let user = User::sign_in("sarah.chen@university.edu", "Dr. Sarah Chen");
    tracing::info!(
        user = user.name(),
        role = %user.role(),
        landing = user.role().landing_view().label(),
        "Signed in"
    );

    let paper = state.submit_paper_handler().handle(SubmitPaperCommand {
        title: "Federated Learning on the Edge".to_string(),
        abstract_text: "We train models across thousands of devices without centralizing data."
            .to_string(),
        submitter: Some(user),
    });

    let stats = state.paper_stats();
    tracing::info!(
        total = stats.total,
        submitted = stats.submitted,
        under_review = stats.under_review,
        accepted = stats.accepted,
        "Dashboard"
    );

    let attendees = sample_attendees();
    let today = Timestamp::now();
    let overdue = sample_assignments()
        .iter()
        .filter(|a| a.is_overdue(&today))
        .count();
    tracing::info!(
        attendees = attendees.len(),
        confirmed = attendees.iter().filter(|a| a.is_confirmed()).count(),
        reviewers = sample_reviewers().len(),
        overdue_reviews = overdue,
        "Registrations and reviewers"
    );

    match state
        .review_paper_handler()
        .handle(ReviewPaperCommand {
            paper_id: paper.id().clone(),
        })
        .await
    {
        Ok(reviewed) => {
            if let Some(report) = reviewed.ai_review().report() {
                tracing::info!(
                    paper_id = %reviewed.id(),
                    verdict = %report.verdict,
                    summary = %report.summary,
                    "AI review attached"
                );
            }
        }
        Err(err) => {
            let err = DomainError::from(err);
            tracing::error!(code = %err.code, "{}", err.message);
        }
    }

    let catalog = sample_conferences();
    let params = match active_conference(&catalog) {
        Some(conference) => ScheduleGenerationParams::for_conference(conference),
        None => ScheduleGenerationParams::new("General Technology", 1, 2)?,
    };

    match state
        .generate_schedule_handler()
        .handle(GenerateScheduleCommand { params })
        .await
    {
        Ok(sessions) => {
            for session in &sessions {
                tracing::info!(
                    time = session.time(),
                    track = session.track(),
                    room = session.room(),
                    "{}",
                    session.title()
                );
            }
        }
        Err(err) => {
            let err = DomainError::from(err);
            tracing::error!(code = %err.code, "{}", err.message);
        }
    }

    tracing::info!(
        papers = state.papers.len(),
        sessions = state.schedule.len(),
        "Done"
    );
    Ok(())
}
