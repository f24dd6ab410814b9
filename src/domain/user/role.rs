//! UserRole enum and the advisory views each role navigates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Role assigned at sign-in or sign-up, fixed for the rest of the session.
///
/// Roles only decide which views are offered. Nothing in the stores or
/// handlers checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    #[default]
    Participant,
    Guest,
}

impl UserRole {
    /// Returns true for organizers who manage papers and schedules.
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Views offered in the navigation for this role, in display order.
    pub fn navigation(&self) -> &'static [View] {
        const ADMIN: &[View] = &[
            View::Dashboard,
            View::Conferences,
            View::Papers,
            View::Reviews,
            View::Attendees,
        ];
        const ATTENDEE: &[View] = &[View::MySchedule, View::SubmitPaper, View::Registration];

        match self {
            UserRole::Admin => ADMIN,
            UserRole::Participant | UserRole::Guest => ATTENDEE,
        }
    }

    /// View shown right after signing in.
    pub fn landing_view(&self) -> View {
        match self {
            UserRole::Admin => View::Dashboard,
            UserRole::Participant | UserRole::Guest => View::MySchedule,
        }
    }

    /// Returns true if the role's navigation includes `view`.
    pub fn can_open(&self, view: View) -> bool {
        self.navigation().contains(&view)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Admin => "ADMIN",
            UserRole::Participant => "PARTICIPANT",
            UserRole::Guest => "GUEST",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(UserRole::Admin),
            "PARTICIPANT" => Ok(UserRole::Participant),
            "GUEST" => Ok(UserRole::Guest),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

/// A dashboard view a user can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Dashboard,
    Conferences,
    Papers,
    Reviews,
    Attendees,
    MySchedule,
    SubmitPaper,
    Registration,
}

impl View {
    /// Route slug used by the view layer.
    pub fn slug(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Conferences => "conferences",
            View::Papers => "papers",
            View::Reviews => "reviews",
            View::Attendees => "attendees",
            View::MySchedule => "my-schedule",
            View::SubmitPaper => "submit-paper",
            View::Registration => "registration",
        }
    }

    /// Human-readable navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Conferences => "Conferences",
            View::Papers => "Papers",
            View::Reviews => "Reviews",
            View::Attendees => "Attendees",
            View::MySchedule => "Conference Schedule",
            View::SubmitPaper => "Submit Paper",
            View::Registration => "Registration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_participant() {
        assert_eq!(UserRole::default(), UserRole::Participant);
    }

    #[test]
    fn admin_lands_on_dashboard() {
        assert_eq!(UserRole::Admin.landing_view(), View::Dashboard);
        assert_eq!(UserRole::Participant.landing_view(), View::MySchedule);
        assert_eq!(UserRole::Guest.landing_view(), View::MySchedule);
    }

    #[test]
    fn admin_navigation_covers_management_views() {
        let nav = UserRole::Admin.navigation();
        assert_eq!(nav.len(), 5);
        assert!(UserRole::Admin.can_open(View::Papers));
        assert!(!UserRole::Admin.can_open(View::SubmitPaper));
    }

    #[test]
    fn guest_shares_participant_navigation() {
        assert_eq!(UserRole::Guest.navigation(), UserRole::Participant.navigation());
        assert!(!UserRole::Guest.can_open(View::Papers));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(" Guest ".parse::<UserRole>().unwrap(), UserRole::Guest);
        assert!("Organizer".parse::<UserRole>().is_err());
    }

    #[test]
    fn serializes_to_screaming_case() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"ADMIN\"");
        let role: UserRole = serde_json::from_str("\"PARTICIPANT\"").unwrap();
        assert_eq!(role, UserRole::Participant);
    }

    #[test]
    fn rejects_unknown_role_in_json() {
        assert!(serde_json::from_str::<UserRole>("\"ROOT\"").is_err());
    }

    #[test]
    fn view_slugs_match_routes() {
        assert_eq!(View::MySchedule.slug(), "my-schedule");
        assert_eq!(
            serde_json::to_string(&View::SubmitPaper).unwrap(),
            "\"submit-paper\""
        );
        assert_eq!(View::MySchedule.label(), "Conference Schedule");
    }
}
