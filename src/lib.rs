//! CuraLink Algo - doctor matching engine for the CuraLink telehealth platform
//!
//! This library implements the twelve-factor scoring model used to rank
//! doctors and AI agents against a patient's search query. The engine is a
//! pure function of its inputs; the optional HTTP service in `main.rs` is a
//! thin shell around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{FeedbackSink, Matcher, MemoryFeedbackStore, SpecialtyIndex, MAX_TOTAL_SCORE};
pub use models::{CandidateProvider, MatchScore, PatientQuery, RankRequest, RankResponse, ScoreBreakdown, Urgency};
