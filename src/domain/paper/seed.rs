//! Sample submissions loaded into a fresh workspace.

use super::{AiReview, Paper, PaperStatus};
use crate::domain::foundation::{PaperId, Timestamp};

struct SeedPaper {
    id: &'static str,
    title: &'static str,
    author: &'static str,
    abstract_text: &'static str,
    status: PaperStatus,
    submitted_on: (i32, u32, u32),
}

const SEED: &[SeedPaper] = &[
    SeedPaper {
        id: "1",
        title: "Advancements in Quantum Computing Architectures",
        author: "Dr. Sarah Chen",
        abstract_text: "This paper explores novel qubit connectivity topologies that reduce error \
            rates in superconducting quantum processors. We present simulation results \
            demonstrating a 40% reduction in crosstalk compared to standard grid architectures.",
        status: PaperStatus::Submitted,
        submitted_on: (2023, 10, 15),
    },
    SeedPaper {
        id: "2",
        title: "Sustainable AI: Reducing Model Inference Energy",
        author: "James Wilson",
        abstract_text: "Large Language Models (LLMs) consume significant energy. We propose a \
            sparse activation technique that maintains 98% of model accuracy while reducing \
            inference power consumption by 65%.",
        status: PaperStatus::UnderReview,
        submitted_on: (2023, 10, 18),
    },
    SeedPaper {
        id: "3",
        title: "Neural Interfaces for Prosthetic Limbs",
        author: "Dr. Emily R. Thorne",
        abstract_text: "A longitudinal study on the long-term biocompatibility of invasive neural \
            probes. We discuss signal degradation patterns and propose a new coating material \
            that extends probe life by 3 years.",
        status: PaperStatus::Accepted,
        submitted_on: (2023, 9, 20),
    },
];

/// Returns the sample papers in their canonical order.
pub fn sample_papers() -> Vec<Paper> {
    SEED.iter()
        .filter_map(|seed| {
            let (year, month, day) = seed.submitted_on;
            Some(Paper::reconstitute(
                PaperId::new(seed.id).ok()?,
                seed.title.to_string(),
                seed.author.to_string(),
                seed.abstract_text.to_string(),
                seed.status,
                Timestamp::from_ymd(year, month, day)?,
                AiReview::NotReviewed,
            ))
        })
        .collect()
}
