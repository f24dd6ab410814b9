//! Prompt and response-schema builders for the enrichment gateway.
//!
//! Schemas use the OpenAPI subset understood by Gemini's structured output
//! (`ARRAY`, `OBJECT`, `STRING` type names).

use serde_json::{json, Value};

use crate::domain::paper::{Paper, Verdict};
use crate::domain::schedule::ScheduleGenerationParams;

/// Instruction for drafting a whole conference schedule.
pub fn schedule_prompt(params: &ScheduleGenerationParams) -> String {
    format!(
        "Generate a realistic conference schedule for a conference with the theme \"{theme}\".\n\
         It should span {days} day(s) and have {tracks} track(s).\n\
         Provide specific, creative session titles and fictional speaker names.\n\
         Include Keynotes, Breakout Sessions, and Networking breaks.\n\
         Use \"HH:MM-HH:MM\" for session times where possible.\n\
         Return a JSON array.",
        theme = params.theme(),
        days = params.days(),
        tracks = params.tracks(),
    )
}

/// Schema for an array of session objects; `id` and `description` optional.
pub fn schedule_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "time": { "type": "STRING" },
                "title": { "type": "STRING" },
                "speaker": { "type": "STRING" },
                "room": { "type": "STRING" },
                "track": { "type": "STRING" },
                "description": { "type": "STRING" }
            },
            "required": ["time", "title", "speaker", "room", "track"]
        }
    })
}

/// Instruction for a strict preliminary review. Only title, author and
/// abstract reach the service.
pub fn review_prompt(paper: &Paper) -> String {
    let verdicts = Verdict::ALL
        .iter()
        .map(Verdict::label)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Act as a strict academic reviewer. Review the following conference paper abstract.\n\n\
         Title: {title}\n\
         Author: {author}\n\
         Abstract: {abstract_text}\n\n\
         Provide:\n\
         1. A brief summary (max 2 sentences).\n\
         2. A list of 3 potential pros/strengths.\n\
         3. A list of 3 potential cons/weaknesses.\n\
         4. A preliminary verdict ({verdicts}).\n",
        title = paper.title(),
        author = paper.author(),
        abstract_text = paper.abstract_text(),
    )
}

/// Schema for a single review object; every field required.
pub fn review_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "pros": { "type": "ARRAY", "items": { "type": "STRING" } },
            "cons": { "type": "ARRAY", "items": { "type": "STRING" } },
            "verdict": { "type": "STRING" }
        },
        "required": ["summary", "pros", "cons", "verdict"]
    })
}
