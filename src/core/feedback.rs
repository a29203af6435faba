use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

/// Errors that can occur when recording or reading match feedback
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback store unavailable: {0}")]
    Storage(String),
}

/// One recorded post-consultation feedback sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    #[serde(rename = "recordedAt")]
    pub recorded_at: DateTime<Utc>,
}

/// Destination for post-consultation match feedback
///
/// The engine itself never persists scores; callers embedding the matcher
/// supply a sink with whatever durability they need.
pub trait FeedbackSink: Send + Sync {
    fn record(&self, doctor_id: &str, match_percentage: u8) -> Result<(), FeedbackError>;

    fn history(&self, doctor_id: &str) -> Result<Vec<FeedbackEntry>, FeedbackError>;
}

/// In-process sink backing the service endpoints
#[derive(Debug, Default)]
pub struct MemoryFeedbackStore {
    entries: RwLock<HashMap<String, Vec<FeedbackEntry>>>,
}

impl MemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedbackSink for MemoryFeedbackStore {
    fn record(&self, doctor_id: &str, match_percentage: u8) -> Result<(), FeedbackError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| FeedbackError::Storage(e.to_string()))?;

        entries.entry(doctor_id.to_string()).or_default().push(FeedbackEntry {
            match_percentage,
            recorded_at: Utc::now(),
        });

        Ok(())
    }

    fn history(&self, doctor_id: &str) -> Result<Vec<FeedbackEntry>, FeedbackError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FeedbackError::Storage(e.to_string()))?;

        Ok(entries.get(doctor_id).cloned().unwrap_or_default())
    }
}
