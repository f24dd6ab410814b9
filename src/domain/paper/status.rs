//! PaperStatus enum for the review lifecycle of a submission.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Where a paper stands in the review process.
///
/// Any status can follow any other; organizers move papers freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaperStatus {
    #[default]
    Submitted,
    #[serde(rename = "Under Review")]
    UnderReview,
    Accepted,
    Rejected,
}

impl PaperStatus {
    /// All statuses in lifecycle display order.
    pub const ALL: [PaperStatus; 4] = [
        PaperStatus::Submitted,
        PaperStatus::UnderReview,
        PaperStatus::Accepted,
        PaperStatus::Rejected,
    ];

    /// Returns true once an accept/reject decision has been made.
    pub fn is_decided(&self) -> bool {
        matches!(self, PaperStatus::Accepted | PaperStatus::Rejected)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaperStatus::Submitted => "Submitted",
            PaperStatus::UnderReview => "Under Review",
            PaperStatus::Accepted => "Accepted",
            PaperStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for PaperStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PaperStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaperStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("status", format!("unknown status '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_submitted() {
        assert_eq!(PaperStatus::default(), PaperStatus::Submitted);
    }

    #[test]
    fn decided_statuses() {
        assert!(PaperStatus::Accepted.is_decided());
        assert!(PaperStatus::Rejected.is_decided());
        assert!(!PaperStatus::Submitted.is_decided());
        assert!(!PaperStatus::UnderReview.is_decided());
    }

    #[test]
    fn display_uses_labels() {
        assert_eq!(PaperStatus::UnderReview.to_string(), "Under Review");
        assert_eq!(PaperStatus::Accepted.to_string(), "Accepted");
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!(
            "under review".parse::<PaperStatus>().unwrap(),
            PaperStatus::UnderReview
        );
        assert_eq!("Rejected".parse::<PaperStatus>().unwrap(), PaperStatus::Rejected);
    }

    #[test]
    fn unknown_status_is_a_validation_error() {
        let err = "Pending".parse::<PaperStatus>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn serializes_to_display_labels() {
        assert_eq!(
            serde_json::to_string(&PaperStatus::UnderReview).unwrap(),
            "\"Under Review\""
        );
        let status: PaperStatus = serde_json::from_str("\"Accepted\"").unwrap();
        assert_eq!(status, PaperStatus::Accepted);
        assert!(serde_json::from_str::<PaperStatus>("\"Withdrawn\"").is_err());
    }
}
