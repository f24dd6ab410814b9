//! Conference Desk - Conference management core
//!
//! Papers move through a review lifecycle, an AI model drafts reviews and
//! multi-track schedules, and both live in in-memory stores owned by a
//! single [`application::AppState`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
