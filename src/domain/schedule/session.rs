//! Scheduled sessions and their time slots.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::SessionId;

/// One entry of a generated conference schedule.
///
/// Sessions are only ever created in bulk and replaced in bulk; there is no
/// way to edit one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    time: String,
    title: String,
    speaker: String,
    room: String,
    track: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Session {
    pub fn new(
        id: SessionId,
        time: impl Into<String>,
        title: impl Into<String>,
        speaker: impl Into<String>,
        room: impl Into<String>,
        track: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            time: time.into(),
            title: title.into(),
            speaker: speaker.into(),
            room: room.into(),
            track: track.into(),
            description,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Raw time text as generated.
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn track(&self) -> &str {
        &self.track
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Interprets the time text. Never used to reorder a schedule.
    pub fn time_slot(&self) -> TimeSlot {
        TimeSlot::parse(&self.time)
    }
}

/// A session as the schedule generator returns it, id optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub time: String,
    pub title: String,
    pub speaker: String,
    pub room: String,
    pub track: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl SessionDraft {
    /// Turns the draft into a session, falling back to the synthetic id for
    /// its batch position when the generator supplied none (or a blank one).
    pub fn into_session(self, index: usize, batch_millis: i64) -> Session {
        let id = self
            .id
            .and_then(|id| SessionId::new(id).ok())
            .unwrap_or_else(|| SessionId::synthetic(index, batch_millis));

        Session {
            id,
            time: self.time,
            title: self.title,
            speaker: self.speaker,
            room: self.room,
            track: self.track,
            description: self.description,
        }
    }
}

/// Turns a generated batch into sessions whose ids are unique within the
/// batch.
///
/// Items keep their supplied id unless an earlier item already took it; those
/// (and items without one) get the synthetic id for their position.
pub fn sessions_from_drafts(drafts: Vec<SessionDraft>, batch_millis: i64) -> Vec<Session> {
    let mut seen: HashSet<SessionId> = HashSet::with_capacity(drafts.len());
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            let mut session = draft.into_session(index, batch_millis);
            if seen.contains(&session.id) {
                session.id = unused_synthetic_id(index, batch_millis, &seen);
            }
            seen.insert(session.id.clone());
            session
        })
        .collect()
}

/// Synthetic id for `index`, suffixed when a supplied id already uses it.
fn unused_synthetic_id(index: usize, batch_millis: i64, taken: &HashSet<SessionId>) -> SessionId {
    let base = SessionId::synthetic(index, batch_millis);
    if !taken.contains(&base) {
        return base;
    }
    (1..=taken.len())
        .filter_map(|n| SessionId::new(format!("{}-{}", base, n)).ok())
        .find(|id| !taken.contains(id))
        .unwrap_or(base)
}

/// Interpretation of a session's free-text time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSlot {
    /// "HH:MM-HH:MM"
    Range { start: NaiveTime, end: NaiveTime },
    /// Anything else, e.g. "Day 1 Morning".
    Label(String),
}

impl TimeSlot {
    pub fn parse(text: &str) -> Self {
        let range = text.split_once('-').and_then(|(start, end)| {
            let start = NaiveTime::parse_from_str(start.trim(), "%H:%M").ok()?;
            let end = NaiveTime::parse_from_str(end.trim(), "%H:%M").ok()?;
            Some(TimeSlot::Range { start, end })
        });
        range.unwrap_or_else(|| TimeSlot::Label(text.to_string()))
    }

    /// Start time when the slot is a range.
    pub fn start(&self) -> Option<NaiveTime> {
        match self {
            TimeSlot::Range { start, .. } => Some(*start),
            TimeSlot::Label(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: Option<&str>) -> SessionDraft {
        SessionDraft {
            id: id.map(str::to_string),
            time: "09:00-10:00".to_string(),
            title: "Opening Keynote".to_string(),
            speaker: "Dr. Ada Park".to_string(),
            room: "Hall A".to_string(),
            track: "Main".to_string(),
            description: None,
        }
    }

    #[test]
    fn draft_keeps_supplied_id() {
        let session = draft(Some("s-1")).into_session(0, 1000);
        assert_eq!(session.id().as_str(), "s-1");
    }

    #[test]
    fn draft_without_id_gets_synthetic_id() {
        let session = draft(None).into_session(4, 1000);
        assert_eq!(session.id().as_str(), "gen-session-4-1000");
    }

    #[test]
    fn blank_id_counts_as_missing() {
        let session = draft(Some("")).into_session(2, 7);
        assert_eq!(session.id().as_str(), "gen-session-2-7");
    }

    #[test]
    fn repeated_supplied_id_is_replaced() {
        let sessions =
            sessions_from_drafts(vec![draft(Some("s")), draft(Some("s")), draft(None)], 9);

        let ids: Vec<&str> = sessions.iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids, vec!["s", "gen-session-1-9", "gen-session-2-9"]);
    }

    #[test]
    fn supplied_id_matching_a_later_synthetic_id_stays_unique() {
        let sessions = sessions_from_drafts(
            vec![draft(Some("gen-session-1-9")), draft(None), draft(Some("gen-session-1-9"))],
            9,
        );

        let ids: HashSet<&str> = sessions.iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(sessions[0].id().as_str(), "gen-session-1-9");
        assert_eq!(sessions[1].id().as_str(), "gen-session-1-9-1");
        assert_eq!(sessions[2].id().as_str(), "gen-session-2-9");
    }

    #[test]
    fn batch_order_is_preserved() {
        let mut second = draft(None);
        second.title = "Second".to_string();
        let sessions = sessions_from_drafts(vec![draft(None), second], 0);
        assert_eq!(sessions[1].title(), "Second");
    }

    #[test]
    fn draft_requires_core_fields() {
        let json = r#"{"time":"09:00","title":"t","speaker":"s","room":"r"}"#;
        assert!(serde_json::from_str::<SessionDraft>(json).is_err());

        let json = r#"{"time":"09:00","title":"t","speaker":"s","room":"r","track":"A"}"#;
        let draft: SessionDraft = serde_json::from_str(json).unwrap();
        assert!(draft.id.is_none());
        assert!(draft.description.is_none());
    }

    #[test]
    fn parses_time_range() {
        let slot = TimeSlot::parse("09:30-10:15");
        assert_eq!(
            slot,
            TimeSlot::Range {
                start: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
                end: NaiveTime::from_hms_opt(10, 15, 0).unwrap(),
            }
        );
    }

    #[test]
    fn tolerates_spaces_around_dash() {
        let slot = TimeSlot::parse("13:00 - 14:00");
        assert_eq!(slot.start(), NaiveTime::from_hms_opt(13, 0, 0));
    }

    #[test]
    fn non_range_text_is_a_label() {
        assert_eq!(
            TimeSlot::parse("Day 1 - Morning"),
            TimeSlot::Label("Day 1 - Morning".to_string())
        );
        assert_eq!(TimeSlot::parse("10:00").start(), None);
    }

    #[test]
    fn session_time_slot_reads_time_field() {
        let session = draft(None).into_session(0, 0);
        assert!(matches!(session.time_slot(), TimeSlot::Range { .. }));
        assert_eq!(session.time(), "09:00-10:00");
    }

    #[test]
    fn description_is_omitted_when_absent() {
        let session = draft(None).into_session(0, 0);
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["track"], "Main");
    }
}
