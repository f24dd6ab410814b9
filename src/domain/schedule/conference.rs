//! Conference catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ConferenceId;

/// Whether a conference is still ahead, running, or over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConferenceStatus {
    Upcoming,
    Active,
    Past,
}

impl fmt::Display for ConferenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConferenceStatus::Upcoming => "Upcoming",
            ConferenceStatus::Active => "Active",
            ConferenceStatus::Past => "Past",
        };
        write!(f, "{}", s)
    }
}

/// A conference whose schedule can be generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    id: ConferenceId,
    name: String,
    /// Display date, e.g. "Oct 15-17, 2025".
    dates: String,
    location: String,
    theme: String,
    status: ConferenceStatus,
}

impl Conference {
    pub fn new(
        id: ConferenceId,
        name: impl Into<String>,
        dates: impl Into<String>,
        location: impl Into<String>,
        theme: impl Into<String>,
        status: ConferenceStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            dates: dates.into(),
            location: location.into(),
            theme: theme.into(),
            status,
        }
    }

    pub fn id(&self) -> &ConferenceId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dates(&self) -> &str {
        &self.dates
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn status(&self) -> ConferenceStatus {
        self.status
    }
}

/// The static catalog shown on the conferences view.
pub fn sample_conferences() -> Vec<Conference> {
    let entries = [
        (
            "1",
            "AI Summit 2025",
            "Oct 15-17, 2025",
            "San Francisco, CA",
            "Artificial Intelligence in 2025",
            ConferenceStatus::Active,
        ),
        (
            "2",
            "Global Tech Symposium",
            "Nov 12-14, 2024",
            "London, UK",
            "Future of Computing",
            ConferenceStatus::Past,
        ),
        (
            "3",
            "BioMed Future",
            "Mar 10-12, 2026",
            "Boston, MA",
            "Innovations in Medicine",
            ConferenceStatus::Upcoming,
        ),
    ];

    entries
        .into_iter()
        .filter_map(|(id, name, dates, location, theme, status)| {
            let id = ConferenceId::new(id).ok()?;
            Some(Conference::new(id, name, dates, location, theme, status))
        })
        .collect()
}

/// First active conference in the catalog, if any.
pub fn active_conference(catalog: &[Conference]) -> Option<&Conference> {
    catalog
        .iter()
        .find(|c| c.status() == ConferenceStatus::Active)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_conferences() {
        let catalog = sample_conferences();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[1].name(), "Global Tech Symposium");
        assert_eq!(catalog[1].location(), "London, UK");
    }

    #[test]
    fn finds_active_conference() {
        let catalog = sample_conferences();
        let active = active_conference(&catalog).unwrap();
        assert_eq!(active.id().as_str(), "1");
        assert_eq!(active.theme(), "Artificial Intelligence in 2025");
        assert_eq!(active.dates(), "Oct 15-17, 2025");
    }

    #[test]
    fn no_active_conference_in_past_only_catalog() {
        let past = vec![Conference::new(
            ConferenceId::new("9").unwrap(),
            "Old",
            "2001",
            "Nowhere",
            "History",
            ConferenceStatus::Past,
        )];
        assert!(active_conference(&past).is_none());
    }

    #[test]
    fn status_displays_and_serializes() {
        assert_eq!(ConferenceStatus::Upcoming.to_string(), "Upcoming");
        assert_eq!(
            serde_json::to_string(&ConferenceStatus::Active).unwrap(),
            "\"Active\""
        );
    }
}
