// Integration tests for CuraLink Algo

use curalink_algo::core::Matcher;
use curalink_algo::models::{
    CandidateProvider, ConsultationType, EducationEntry, ExperienceEntry, PatientQuery,
    ProviderKind, RecognitionEntry, Urgency,
};

fn base_candidate(id: &str) -> CandidateProvider {
    CandidateProvider {
        id: id.to_string(),
        name: format!("Dr. {}", id),
        specialization: vec![],
        location: None,
        rating: 0.0,
        reviews: 0,
        experience: vec![],
        education: vec![],
        awards: vec![],
        conferences: vec![],
        languages: vec![],
        fees: 0.0,
        available: false,
        kind: ProviderKind::Human,
        online_therapy: false,
        next_available: None,
    }
}

fn ai_candidate(id: &str, fees: f64) -> CandidateProvider {
    CandidateProvider {
        specialization: vec!["Cardiology".to_string()],
        location: Some("Mumbai".to_string()),
        rating: 4.5,
        reviews: 120,
        languages: vec!["English".to_string()],
        fees,
        available: true,
        kind: ProviderKind::Ai,
        online_therapy: true,
        next_available: Some("Today".to_string()),
        ..base_candidate(id)
    }
}

#[test]
fn test_chest_pain_scenario_breakdown() {
    // High-urgency chest pain query against an unavailable human candidate
    // with no specialization tags
    let matcher = Matcher::with_builtin_table();
    let query = PatientQuery {
        symptoms: vec!["chest pain".to_string()],
        urgency: Urgency::High,
        ..Default::default()
    };
    let candidate = base_candidate("h1");

    let score = matcher.score_at(&query, &candidate, 2025);

    assert_eq!(score.breakdown.specialty, 25.0);
    assert_eq!(score.breakdown.education, 0.0);
    assert_eq!(score.breakdown.awards, 0.0);
    assert_eq!(score.breakdown.conferences, 0.0);
    assert_eq!(score.breakdown.reviews, 0.0);
    assert_eq!(score.breakdown.experience, 10.0);
    assert_eq!(score.breakdown.availability, 0.0);
    assert_eq!(score.breakdown.location, 25.0);
    assert_eq!(score.breakdown.language, 25.0);
    assert_eq!(score.breakdown.budget, 25.0);
    // High urgency against a human candidate matches neither preferred pairing
    assert_eq!(score.breakdown.urgency, 30.0);
    assert_eq!(score.breakdown.consultation_type, 25.0);

    assert_eq!(score.total_score, 165.0);
    assert_eq!(score.ai_match_percentage, 28);
}

#[test]
fn test_budget_separates_otherwise_identical_candidates() {
    let matcher = Matcher::with_builtin_table();
    let query = PatientQuery {
        symptoms: vec!["chest pain".to_string()],
        budget: Some(100.0),
        urgency: Urgency::High,
        ..Default::default()
    };

    let affordable = ai_candidate("cheap", 50.0);
    let expensive = ai_candidate("pricey", 200.0);

    let cheap_score = matcher.score(&query, &affordable);
    let pricey_score = matcher.score(&query, &expensive);

    assert_eq!(cheap_score.breakdown.budget, 50.0);
    assert_eq!(pricey_score.breakdown.budget, 10.0);

    let ranked = matcher.rank(&query, &[expensive, affordable]);
    assert_eq!(ranked[0].doctor_id, "cheap");
    assert!(ranked[0].ai_match_percentage > ranked[1].ai_match_percentage);
}

#[test]
fn test_rank_is_non_increasing_and_complete() {
    let matcher = Matcher::with_builtin_table();
    let query = PatientQuery {
        symptoms: vec!["chest pain".to_string()],
        urgency: Urgency::High,
        preferred_language: Some("English".to_string()),
        consultation_type: Some(ConsultationType::Video),
        ..Default::default()
    };

    let candidates = vec![
        ai_candidate("strong", 100.0),
        base_candidate("weak"),
        ai_candidate("mid", 900.0),
        base_candidate("weaker"),
    ];

    let ranked = matcher.rank(&query, &candidates);

    assert_eq!(ranked.len(), candidates.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].ai_match_percentage >= pair[1].ai_match_percentage);
    }
}

#[test]
fn test_tied_candidates_preserve_input_order() {
    let matcher = Matcher::with_builtin_table();
    let query = PatientQuery::default();

    // Four identical records tie exactly; stable sort keeps their order
    let candidates: Vec<CandidateProvider> = ["a", "b", "c", "d"]
        .iter()
        .map(|id| ai_candidate(id, 100.0))
        .collect();

    let ranked = matcher.rank(&query, &candidates);

    let ids: Vec<&str> = ranked.iter().map(|m| m.doctor_id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c", "d"]);
}

#[test]
fn test_top_matches_returns_prefix_of_rank() {
    let matcher = Matcher::with_builtin_table();
    let query = PatientQuery {
        symptoms: vec!["headache".to_string()],
        ..Default::default()
    };

    let candidates: Vec<CandidateProvider> = (0..12)
        .map(|i| {
            let mut c = ai_candidate(&format!("d{}", i), 50.0 + i as f64 * 40.0);
            c.rating = (i % 6) as f64;
            c
        })
        .collect();

    let ranked = matcher.rank(&query, &candidates);
    let top = matcher.top_matches(&query, &candidates, 5);

    assert_eq!(top.len(), 5);
    for (a, b) in top.iter().zip(ranked.iter()) {
        assert_eq!(a.doctor_id, b.doctor_id);
        assert_eq!(a.ai_match_percentage, b.ai_match_percentage);
    }

    // Limit past the roster size returns everything
    let all = matcher.top_matches(&query, &candidates, 50);
    assert_eq!(all.len(), candidates.len());
}

#[test]
fn test_urgency_bias_toward_ai_on_high_urgency() {
    let matcher = Matcher::with_builtin_table();
    let query = PatientQuery {
        urgency: Urgency::High,
        ..Default::default()
    };

    let mut ai = ai_candidate("ai", 100.0);
    let mut human = ai_candidate("human", 100.0);
    human.kind = ProviderKind::Human;
    // Remove the unrelated differences so only the urgency pairing moves
    ai.next_available = None;
    human.next_available = None;

    let ai_score = matcher.score(&query, &ai);
    let human_score = matcher.score(&query, &human);

    assert_eq!(ai_score.breakdown.urgency, 50.0);
    assert_eq!(human_score.breakdown.urgency, 30.0);
    assert!(ai_score.total_score > human_score.total_score);
}

#[test]
fn test_fully_loaded_candidate_clamps_to_100() {
    let matcher = Matcher::with_builtin_table();
    let query = PatientQuery {
        symptoms: vec!["chest pain".to_string()],
        location: Some("Mumbai".to_string()),
        preferred_language: Some("English".to_string()),
        urgency: Urgency::High,
        budget: Some(1000.0),
        consultation_type: Some(ConsultationType::Video),
        ..Default::default()
    };

    let mut candidate = ai_candidate("ace", 500.0);
    candidate.rating = 5.0;
    candidate.reviews = 500;
    candidate.experience = vec![ExperienceEntry {
        years: Some(25.0),
        role: Some("Senior Cardiologist".to_string()),
    }];
    candidate.education = vec![
        EducationEntry {
            course: Some("MBBS".to_string()),
            institution: Some("AIIMS Delhi".to_string()),
        },
        EducationEntry {
            course: Some("MD Cardiology".to_string()),
            institution: Some("Harvard Medical School".to_string()),
        },
    ];
    candidate.awards = (0..4)
        .map(|_| RecognitionEntry {
            value: Some("International Excellence Award".to_string()),
            year: Some(2025),
        })
        .collect();
    candidate.conferences = (0..4)
        .map(|_| RecognitionEntry {
            value: Some("World Cardiology Congress".to_string()),
            year: Some(2025),
        })
        .collect();

    let score = matcher.score_at(&query, &candidate, 2025);

    // Every factor at its cap sums past the normalization divisor; the
    // percentage clamps rather than overflowing
    assert!(score.total_score >= 600.0);
    assert_eq!(score.ai_match_percentage, 100);
}
