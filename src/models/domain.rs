use serde::{Deserialize, Serialize};

/// Patient-declared severity tier, used to bias scoring toward AI vs. human
/// providers and toward immediate availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

/// Requested consultation channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsultationType {
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "chat")]
    Chat,
    #[serde(rename = "in-person")]
    InPerson,
}

/// Whether a provider record is an automated agent or a licensed practitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProviderKind {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "Human")]
    #[default]
    Human,
}

/// Search filters entered by the patient, constructed per search request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PatientQuery {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "preferredLanguage", default)]
    pub preferred_language: Option<String>,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(rename = "consultationType", default)]
    pub consultation_type: Option<ConsultationType>,
}

/// One role or posting in a provider's work history
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub years: Option<f64>,
    #[serde(default)]
    pub role: Option<String>,
}

/// One degree or qualification
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EducationEntry {
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
}

/// An award or conference appearance; `value` is the free-text title
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecognitionEntry {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Provider record from the external directory
///
/// These arrive as partially populated documents, so every non-identifier
/// field deserializes from an absent value to its neutral default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProvider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialization: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub awards: Vec<RecognitionEntry>,
    #[serde(default)]
    pub conferences: Vec<RecognitionEntry>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub fees: f64,
    #[serde(default)]
    pub available: bool,
    #[serde(rename = "type", default)]
    pub kind: ProviderKind,
    #[serde(rename = "onlineTherapy", default)]
    pub online_therapy: bool,
    #[serde(rename = "nextAvailable", default)]
    pub next_available: Option<String>,
}

impl CandidateProvider {
    /// Total years across all experience entries
    pub fn total_experience_years(&self) -> f64 {
        self.experience.iter().filter_map(|entry| entry.years).sum()
    }
}

/// The twelve named sub-scores contributing to a candidate's total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoreBreakdown {
    pub specialty: f64,
    pub education: f64,
    pub awards: f64,
    pub conferences: f64,
    pub reviews: f64,
    pub experience: f64,
    pub availability: f64,
    pub location: f64,
    pub language: f64,
    pub budget: f64,
    pub urgency: f64,
    #[serde(rename = "consultationType")]
    pub consultation_type: f64,
}

impl ScoreBreakdown {
    /// Sum of all twelve sub-scores
    pub fn total(&self) -> f64 {
        self.specialty
            + self.education
            + self.awards
            + self.conferences
            + self.reviews
            + self.experience
            + self.availability
            + self.location
            + self.language
            + self.budget
            + self.urgency
            + self.consultation_type
    }
}

/// Scored match result for one candidate; not persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    #[serde(rename = "doctorName")]
    pub doctor_name: String,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    #[serde(rename = "aiMatchPercentage")]
    pub ai_match_percentage: u8,
}
