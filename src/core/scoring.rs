use crate::models::{ConsultationType, EducationEntry, ProviderKind, RecognitionEntry, Urgency};

/// Normalization divisor for the match percentage
pub const MAX_TOTAL_SCORE: f64 = 600.0;

pub const EDUCATION_CAP: f64 = 50.0;
pub const AWARDS_CAP: f64 = 40.0;
pub const CONFERENCE_CAP: f64 = 35.0;
pub const REVIEW_CAP: f64 = 50.0;
pub const EXPERIENCE_CAP: f64 = 40.0;
pub const AVAILABILITY_CAP: f64 = 50.0;

/// Institution substrings that earn the prestige bonus
const PRESTIGIOUS_INSTITUTIONS: &[&str] = &[
    "aiims",
    "harvard",
    "stanford",
    "johns hopkins",
    "oxford",
    "cambridge",
    "mayo clinic",
    "apollo",
    "cmc vellore",
];

/// Education sub-score (cap 50)
///
/// Degree tokens are graded per entry (MBBS/MD 25, MS/MCh 20, PhD 15,
/// generic bachelor/master 10) plus 10 per entry from a prestigious
/// institution.
#[inline]
pub fn education_score(education: &[EducationEntry]) -> f64 {
    let mut score: f64 = 0.0;

    for entry in education {
        if let Some(course) = &entry.course {
            let course = course.to_lowercase();
            if course.contains("mbbs") || course.contains("md") {
                score += 25.0;
            } else if course.contains("ms") || course.contains("mch") {
                score += 20.0;
            } else if course.contains("phd") {
                score += 15.0;
            } else if course.contains("bachelor") || course.contains("master") {
                score += 10.0;
            }
        }

        if let Some(institution) = &entry.institution {
            let institution = institution.to_lowercase();
            if PRESTIGIOUS_INSTITUTIONS.iter().any(|name| institution.contains(name)) {
                score += 10.0;
            }
        }
    }

    score.min(EDUCATION_CAP)
}

/// Awards sub-score (cap 40)
///
/// 15 for national/international recognition, 10 for best/excellence,
/// 5 baseline, plus 5 when the award is within the last five years.
#[inline]
pub fn awards_score(awards: &[RecognitionEntry], current_year: i32) -> f64 {
    let mut score: f64 = 0.0;

    for award in awards {
        let text = award.value.as_deref().unwrap_or("").to_lowercase();
        if text.contains("national") || text.contains("international") {
            score += 15.0;
        } else if text.contains("best") || text.contains("excellence") {
            score += 10.0;
        } else {
            score += 5.0;
        }

        if let Some(year) = award.year {
            if current_year - year <= 5 {
                score += 5.0;
            }
        }
    }

    score.min(AWARDS_CAP)
}

/// Conference sub-score (cap 35)
///
/// 12 for international/world events, 8 for national/annual, 5 baseline,
/// plus 3 when the appearance is within the last two years.
#[inline]
pub fn conference_score(conferences: &[RecognitionEntry], current_year: i32) -> f64 {
    let mut score: f64 = 0.0;

    for conference in conferences {
        let text = conference.value.as_deref().unwrap_or("").to_lowercase();
        if text.contains("international") || text.contains("world") {
            score += 12.0;
        } else if text.contains("national") || text.contains("annual") {
            score += 8.0;
        } else {
            score += 5.0;
        }

        if let Some(year) = conference.year {
            if current_year - year <= 2 {
                score += 3.0;
            }
        }
    }

    score.min(CONFERENCE_CAP)
}

/// Review sub-score (cap 50): rating out of 5 scaled to 50 plus a
/// review-count bonus tier
#[inline]
pub fn review_score(rating: f64, reviews: u32) -> f64 {
    let mut score = if rating > 0.0 { rating * 10.0 } else { 0.0 };

    score += if reviews >= 100 {
        20.0
    } else if reviews >= 50 {
        15.0
    } else if reviews >= 20 {
        10.0
    } else if reviews >= 10 {
        5.0
    } else {
        0.0
    };

    score.min(REVIEW_CAP)
}

/// Experience sub-score (cap 40): a step function of total years in practice
#[inline]
pub fn experience_score(total_years: f64) -> f64 {
    if total_years >= 20.0 {
        40.0
    } else if total_years >= 15.0 {
        35.0
    } else if total_years >= 10.0 {
        30.0
    } else if total_years >= 5.0 {
        25.0
    } else if total_years >= 2.0 {
        20.0
    } else {
        10.0
    }
}

/// Availability sub-score (cap 50)
///
/// Unavailable candidates score 0. Otherwise base 30, urgency uplift, and an
/// immediacy bonus from the free-text next-available hint ("Today" checked
/// before "Tomorrow").
#[inline]
pub fn availability_score(available: bool, urgency: Urgency, next_available: Option<&str>) -> f64 {
    if !available {
        return 0.0;
    }

    let mut score: f64 = 30.0;
    score += match urgency {
        Urgency::High => 20.0,
        Urgency::Medium => 10.0,
        Urgency::Low => 0.0,
    };

    if let Some(hint) = next_available {
        let hint = hint.to_lowercase();
        if hint.contains("today") {
            score += 15.0;
        } else if hint.contains("tomorrow") {
            score += 10.0;
        }
    }

    score.min(AVAILABILITY_CAP)
}

/// Location sub-score (cap 50, neutral 25 when either side is missing)
///
/// Exact match 50, substring containment 40, any shared whitespace token 30,
/// otherwise 20.
#[inline]
pub fn location_score(query_location: Option<&str>, candidate_location: Option<&str>) -> f64 {
    let (query, candidate) = match (nonblank(query_location), nonblank(candidate_location)) {
        (Some(q), Some(c)) => (q.to_lowercase(), c.to_lowercase()),
        _ => return 25.0,
    };

    if query == candidate {
        50.0
    } else if query.contains(&candidate) || candidate.contains(&query) {
        40.0
    } else if query
        .split_whitespace()
        .any(|token| candidate.split_whitespace().any(|other| other == token))
    {
        30.0
    } else {
        20.0
    }
}

/// Language sub-score (cap 50, neutral 25 when either side is missing)
#[inline]
pub fn language_score(preferred: Option<&str>, languages: &[String]) -> f64 {
    let preferred = match nonblank(preferred) {
        Some(lang) if !languages.is_empty() => lang.to_lowercase(),
        _ => return 25.0,
    };

    if languages.iter().any(|lang| lang.to_lowercase().contains(&preferred)) {
        50.0
    } else {
        25.0
    }
}

/// Budget sub-score (cap 50, neutral 25 when either value is missing or zero)
///
/// Steps down as the fee passes the budget: 50 within budget, 40 up to 1.2x,
/// 30 up to 1.5x, 10 beyond.
#[inline]
pub fn budget_score(budget: Option<f64>, fees: f64) -> f64 {
    let budget = match budget {
        Some(b) if b > 0.0 && fees > 0.0 => b,
        _ => return 25.0,
    };

    if fees <= budget {
        50.0
    } else if fees <= budget * 1.2 {
        40.0
    } else if fees <= budget * 1.5 {
        30.0
    } else {
        10.0
    }
}

/// Urgency sub-score (cap 50)
///
/// High urgency favors AI agents (instant response); low urgency favors
/// human practitioners.
#[inline]
pub fn urgency_score(urgency: Urgency, kind: ProviderKind) -> f64 {
    match (urgency, kind) {
        (Urgency::High, ProviderKind::Ai) | (Urgency::Low, ProviderKind::Human) => 50.0,
        (Urgency::Medium, _) => 40.0,
        _ => 30.0,
    }
}

/// Consultation-type sub-score (cap 50, neutral 25 when the query does not
/// request a channel)
#[inline]
pub fn consultation_type_score(
    requested: Option<ConsultationType>,
    kind: ProviderKind,
    online_therapy: bool,
) -> f64 {
    let requested = match requested {
        Some(channel) => channel,
        None => return 25.0,
    };

    let fits = match requested {
        ConsultationType::Video => online_therapy,
        ConsultationType::InPerson => !online_therapy,
        ConsultationType::Chat => kind == ProviderKind::Ai,
        ConsultationType::Audio => false,
    };

    if fits {
        50.0
    } else {
        30.0
    }
}

fn nonblank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
