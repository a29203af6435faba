// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProvider, ConsultationType, EducationEntry, ExperienceEntry, MatchScore,
    PatientQuery, ProviderKind, RecognitionEntry, ScoreBreakdown, Urgency,
};
pub use requests::{FeedbackHistoryQuery, FeedbackRequest, RankRequest};
pub use responses::{ErrorResponse, FeedbackResponse, HealthResponse, RankResponse};
