use serde::Deserialize;
use thiserror::Error;

/// Full keyword match against a claimed specialty
pub const SPECIALTY_MATCH_SCORE: f64 = 100.0;
/// Query carries no symptoms to match against
pub const NO_SYMPTOMS_SCORE: f64 = 50.0;
/// Candidate claims no specialization tags
pub const NO_SPECIALIZATION_SCORE: f64 = 25.0;

/// Errors loading an operator-supplied specialty table
#[derive(Debug, Error)]
pub enum SpecialtyTableError {
    #[error("failed to parse specialty table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("specialty table contains no entries")]
    Empty,
}

/// One clinical specialty and the lowercase symptom keywords that map to it
#[derive(Debug, Clone)]
pub struct SpecialtyEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Immutable specialty -> symptom-keyword lookup table
///
/// Built once at startup (builtin table or a TOML override) and injected into
/// the matcher, so tests can substitute their own tables.
#[derive(Debug, Clone)]
pub struct SpecialtyIndex {
    entries: Vec<SpecialtyEntry>,
}

/// Static clinical table used when no override file is configured
const BUILTIN_TABLE: &[(&str, &[&str])] = &[
    (
        "Cardiology",
        &[
            "chest pain",
            "palpitations",
            "heart",
            "shortness of breath",
            "breathlessness",
            "high blood pressure",
            "hypertension",
        ],
    ),
    (
        "Dermatology",
        &["rash", "acne", "skin", "itching", "eczema", "psoriasis", "hair loss"],
    ),
    (
        "Neurology",
        &["headache", "migraine", "seizure", "dizziness", "numbness", "tremor", "memory loss"],
    ),
    (
        "Orthopedics",
        &["joint pain", "back pain", "fracture", "knee", "shoulder", "arthritis", "sprain"],
    ),
    (
        "Psychiatry",
        &["anxiety", "depression", "stress", "insomnia", "panic", "mood", "sleep"],
    ),
    ("Pediatrics", &["child", "infant", "baby", "vaccination", "growth"]),
    (
        "Gynecology",
        &["pregnancy", "menstrual", "period pain", "pcos", "fertility"],
    ),
    ("ENT", &["ear", "throat", "sinus", "hearing", "tonsil", "nose"]),
    ("Ophthalmology", &["eye", "vision", "blurred", "cataract"]),
    (
        "Gastroenterology",
        &[
            "stomach pain",
            "abdominal",
            "acidity",
            "constipation",
            "diarrhea",
            "vomiting",
            "indigestion",
        ],
    ),
    (
        "Pulmonology",
        &["cough", "asthma", "wheezing", "breathing", "bronchitis"],
    ),
    (
        "Endocrinology",
        &["diabetes", "thyroid", "weight gain", "weight loss", "hormone"],
    ),
    (
        "General Medicine",
        &["fever", "fatigue", "cold", "flu", "weakness", "body ache"],
    ),
];

#[derive(Debug, Deserialize)]
struct TableFile {
    specialty: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    keywords: Vec<String>,
}

impl SpecialtyIndex {
    /// The compiled-in clinical table
    pub fn builtin() -> Self {
        let entries = BUILTIN_TABLE
            .iter()
            .map(|(name, keywords)| SpecialtyEntry {
                name: (*name).to_string(),
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Build an index from explicit entries; keywords are lowercased
    pub fn from_entries(entries: impl IntoIterator<Item = SpecialtyEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| SpecialtyEntry {
                name: entry.name,
                keywords: entry.keywords.into_iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Parse an operator-supplied TOML override table
    ///
    /// Expected format:
    /// ```toml
    /// [[specialty]]
    /// name = "Cardiology"
    /// keywords = ["chest pain", "palpitations"]
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self, SpecialtyTableError> {
        let file: TableFile = toml::from_str(raw)?;
        if file.specialty.is_empty() {
            return Err(SpecialtyTableError::Empty);
        }
        Ok(Self::from_entries(file.specialty.into_iter().map(|entry| {
            SpecialtyEntry {
                name: entry.name,
                keywords: entry.keywords,
            }
        })))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Specialty sub-score: the maximum over all symptom/specialty pairs
    ///
    /// A pair matches when the symptom text contains one of the specialty's
    /// keywords and the candidate claims that specialty (case-insensitive
    /// substring in either direction between the specialty name and the tag).
    /// The first full match wins outright and no partial credit exists, so
    /// this returns on the first hit.
    pub fn best_specialty_score(&self, symptoms: &[String], specialization: &[String]) -> f64 {
        if symptoms.is_empty() {
            return NO_SYMPTOMS_SCORE;
        }
        if specialization.is_empty() {
            return NO_SPECIALIZATION_SCORE;
        }

        let tags: Vec<String> = specialization.iter().map(|t| t.to_lowercase()).collect();

        for symptom in symptoms {
            let symptom = symptom.to_lowercase();
            for entry in &self.entries {
                if !entry.keywords.iter().any(|kw| symptom.contains(kw.as_str())) {
                    continue;
                }
                let name = entry.name.to_lowercase();
                if tags.iter().any(|tag| tag.contains(&name) || name.contains(tag.as_str())) {
                    return SPECIALTY_MATCH_SCORE;
                }
            }
        }

        0.0
    }
}

impl Default for SpecialtyIndex {
    fn default() -> Self {
        Self::builtin()
    }
}
