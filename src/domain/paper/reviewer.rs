//! Peer reviewers and their paper assignments.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AssignmentId, ReviewerId, Timestamp};

/// Member of the reviewer pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    id: ReviewerId,
    name: String,
    expertise: Vec<String>,
    papers_reviewed: u32,
    /// Average rating out of 5.
    rating: f32,
}

impl Reviewer {
    pub fn new(
        id: ReviewerId,
        name: impl Into<String>,
        expertise: Vec<String>,
        papers_reviewed: u32,
        rating: f32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            expertise,
            papers_reviewed,
            rating,
        }
    }

    pub fn id(&self) -> &ReviewerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expertise(&self) -> &[String] {
        &self.expertise
    }

    pub fn papers_reviewed(&self) -> u32 {
        self.papers_reviewed
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Pending,
    Completed,
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssignmentStatus::Pending => "Pending",
            AssignmentStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

/// A paper handed to a reviewer, with a due date.
///
/// Only completed assignments carry a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAssignment {
    id: AssignmentId,
    paper: String,
    reviewer: String,
    status: AssignmentStatus,
    score: Option<f32>,
    due: Timestamp,
}

impl ReviewAssignment {
    pub fn pending(
        id: AssignmentId,
        paper: impl Into<String>,
        reviewer: impl Into<String>,
        due: Timestamp,
    ) -> Self {
        Self {
            id,
            paper: paper.into(),
            reviewer: reviewer.into(),
            status: AssignmentStatus::Pending,
            score: None,
            due,
        }
    }

    pub fn completed(
        id: AssignmentId,
        paper: impl Into<String>,
        reviewer: impl Into<String>,
        due: Timestamp,
        score: f32,
    ) -> Self {
        Self {
            status: AssignmentStatus::Completed,
            score: Some(score),
            ..Self::pending(id, paper, reviewer, due)
        }
    }

    pub fn id(&self) -> &AssignmentId {
        &self.id
    }

    /// Title of the assigned paper.
    pub fn paper(&self) -> &str {
        &self.paper
    }

    /// Name of the assigned reviewer.
    pub fn reviewer(&self) -> &str {
        &self.reviewer
    }

    pub fn status(&self) -> AssignmentStatus {
        self.status
    }

    pub fn score(&self) -> Option<f32> {
        self.score
    }

    pub fn due(&self) -> &Timestamp {
        &self.due
    }

    /// True if still pending after its due date.
    pub fn is_overdue(&self, today: &Timestamp) -> bool {
        self.status == AssignmentStatus::Pending && self.due.is_before(today)
    }
}

/// The reviewer pool shown on the reviews view.
pub fn sample_reviewers() -> Vec<Reviewer> {
    let entries: [(&str, &str, &str, u32, f32); 4] = [
        ("1", "Dr. Alan Grant", "Paleontology, Genetics", 12, 4.8),
        ("2", "Dr. Ellie Sattler", "Botany, Ecology", 8, 4.9),
        ("3", "Dr. Ian Malcolm", "Chaos Theory, Mathematics", 15, 4.5),
        ("4", "Dr. Sarah Harding", "Behavioral Biology", 5, 4.7),
    ];

    entries
        .into_iter()
        .filter_map(|(id, name, expertise, papers, rating)| {
            let expertise = expertise.split(',').map(|e| e.trim().to_string()).collect();
            Some(Reviewer::new(
                ReviewerId::new(id).ok()?,
                name,
                expertise,
                papers,
                rating,
            ))
        })
        .collect()
}

/// The assignment list shown on the reviews view.
pub fn sample_assignments() -> Vec<ReviewAssignment> {
    let entries: [(&str, &str, &str, Option<f32>, (i32, u32, u32)); 3] = [
        ("101", "Advancements in Quantum Computing", "Dr. Ian Malcolm", Some(4.2), (2023, 11, 1)),
        ("102", "Sustainable AI Energy", "Dr. Ellie Sattler", None, (2023, 11, 5)),
        ("103", "Neural Interfaces", "Dr. Sarah Harding", Some(4.8), (2023, 10, 25)),
    ];

    entries
        .into_iter()
        .filter_map(|(id, paper, reviewer, score, (year, month, day))| {
            let id = AssignmentId::new(id).ok()?;
            let due = Timestamp::from_ymd(year, month, day)?;
            Some(match score {
                Some(score) => ReviewAssignment::completed(id, paper, reviewer, due, score),
                None => ReviewAssignment::pending(id, paper, reviewer, due),
            })
        })
        .collect()
}
