use chrono::{Datelike, Utc};

use crate::core::scoring::{
    availability_score, awards_score, budget_score, conference_score, consultation_type_score,
    education_score, experience_score, language_score, location_score, review_score, urgency_score,
    MAX_TOTAL_SCORE,
};
use crate::core::specialties::SpecialtyIndex;
use crate::models::{CandidateProvider, MatchScore, PatientQuery, ScoreBreakdown};

/// Default number of entries returned by `top_matches` when the caller does
/// not specify a limit
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Twelve-factor match scoring engine
///
/// Pure and synchronous: every invocation is a function of the query, the
/// candidate, and the injected specialty table. Inputs are never mutated and
/// no candidate is ever dropped.
#[derive(Debug, Clone)]
pub struct Matcher {
    specialties: SpecialtyIndex,
}

impl Matcher {
    pub fn new(specialties: SpecialtyIndex) -> Self {
        Self { specialties }
    }

    pub fn with_builtin_table() -> Self {
        Self {
            specialties: SpecialtyIndex::builtin(),
        }
    }

    /// Score one candidate against the query
    pub fn score(&self, query: &PatientQuery, candidate: &CandidateProvider) -> MatchScore {
        self.score_at(query, candidate, Utc::now().year())
    }

    /// Score with an explicit reference year for the recency bonuses
    ///
    /// `score` captures the current year; tests pass a fixed one.
    pub fn score_at(
        &self,
        query: &PatientQuery,
        candidate: &CandidateProvider,
        current_year: i32,
    ) -> MatchScore {
        let breakdown = ScoreBreakdown {
            specialty: self
                .specialties
                .best_specialty_score(&query.symptoms, &candidate.specialization),
            education: education_score(&candidate.education),
            awards: awards_score(&candidate.awards, current_year),
            conferences: conference_score(&candidate.conferences, current_year),
            reviews: review_score(candidate.rating, candidate.reviews),
            experience: experience_score(candidate.total_experience_years()),
            availability: availability_score(
                candidate.available,
                query.urgency,
                candidate.next_available.as_deref(),
            ),
            location: location_score(query.location.as_deref(), candidate.location.as_deref()),
            language: language_score(query.preferred_language.as_deref(), &candidate.languages),
            budget: budget_score(query.budget, candidate.fees),
            urgency: urgency_score(query.urgency, candidate.kind),
            consultation_type: consultation_type_score(
                query.consultation_type,
                candidate.kind,
                candidate.online_therapy,
            ),
        };

        let total_score = breakdown.total();
        let ai_match_percentage =
            (total_score / MAX_TOTAL_SCORE * 100.0).round().clamp(0.0, 100.0) as u8;

        MatchScore {
            doctor_id: candidate.id.clone(),
            doctor_name: candidate.name.clone(),
            total_score,
            breakdown,
            ai_match_percentage,
        }
    }

    /// Score every candidate and sort descending by match percentage
    ///
    /// The sort is stable, so candidates with equal percentages keep their
    /// input order. One entry per candidate, always.
    pub fn rank(&self, query: &PatientQuery, candidates: &[CandidateProvider]) -> Vec<MatchScore> {
        let current_year = Utc::now().year();

        let mut scores: Vec<MatchScore> = candidates
            .iter()
            .map(|candidate| self.score_at(query, candidate, current_year))
            .collect();

        scores.sort_by(|a, b| b.ai_match_percentage.cmp(&a.ai_match_percentage));
        scores
    }

    /// `rank` truncated to the first `limit` entries
    pub fn top_matches(
        &self,
        query: &PatientQuery,
        candidates: &[CandidateProvider],
        limit: usize,
    ) -> Vec<MatchScore> {
        let mut scores = self.rank(query, candidates);
        scores.truncate(limit);
        scores
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_builtin_table()
    }
}
