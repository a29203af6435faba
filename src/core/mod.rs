// Core algorithm exports
pub mod feedback;
pub mod matcher;
pub mod scoring;
pub mod specialties;

pub use feedback::{FeedbackEntry, FeedbackError, FeedbackSink, MemoryFeedbackStore};
pub use matcher::{Matcher, DEFAULT_TOP_LIMIT};
pub use scoring::MAX_TOTAL_SCORE;
pub use specialties::{SpecialtyEntry, SpecialtyIndex, SpecialtyTableError};
