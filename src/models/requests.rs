use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CandidateProvider, PatientQuery};

/// Request to rank caller-supplied candidates against a patient query
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[serde(default)]
    pub query: PatientQuery,
    // Candidate volume is capped by the configurable matching.max_candidates
    // check in the route layer, not here
    #[serde(default)]
    pub candidates: Vec<CandidateProvider>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query parameters for fetching a doctor's recorded feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackHistoryQuery {
    #[serde(alias = "doctor_id", rename = "doctorId")]
    pub doctor_id: String,
}

/// Request to record post-consultation feedback for a doctor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "doctor_id", rename = "doctorId")]
    pub doctor_id: String,
    #[validate(range(max = 100))]
    #[serde(alias = "match_percentage", rename = "matchPercentage")]
    pub match_percentage: u8,
}
