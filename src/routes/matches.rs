use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{FeedbackSink, Matcher};
use crate::models::{
    ErrorResponse, FeedbackHistoryQuery, FeedbackRequest, FeedbackResponse, HealthResponse,
    RankRequest, RankResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub feedback: Arc<dyn FeedbackSink>,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches))
        .route("/matches/top", web::post().to(top_matches))
        .route("/matches/feedback", web::post().to(record_feedback))
        .route("/matches/feedback", web::get().to(feedback_history));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn check_rank_request(req: &RankRequest, matching: &MatchingSettings) -> Option<HttpResponse> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return Some(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        }));
    }

    if req.candidates.len() > matching.max_candidates {
        return Some(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Too many candidates".to_string(),
            message: format!(
                "Request carried {} candidates, maximum is {}",
                req.candidates.len(),
                matching.max_candidates
            ),
            status_code: 400,
        }));
    }

    None
}

/// Rank all supplied candidates against the patient query
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "query": { "symptoms": ["chest pain"], "urgency": "high" },
///   "candidates": [ ... provider records ... ]
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Some(rejection) = check_rank_request(&req, &state.matching) {
        return rejection;
    }

    tracing::info!(
        "Ranking {} candidates ({} symptoms, urgency {:?})",
        req.candidates.len(),
        req.query.symptoms.len(),
        req.query.urgency
    );

    let matches = state.matcher.rank(&req.query, &req.candidates);

    HttpResponse::Ok().json(RankResponse {
        total_candidates: req.candidates.len(),
        matches,
    })
}

/// Rank and truncate to the best matches
///
/// POST /api/v1/matches/top
///
/// Same body as `/matches/rank` plus an optional `limit` (default from
/// configuration, capped at the configured maximum).
async fn top_matches(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Some(rejection) = check_rank_request(&req, &state.matching) {
        return rejection;
    }

    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit);

    tracing::info!("Selecting top {} of {} candidates", limit, req.candidates.len());

    let matches = state.matcher.top_matches(&req.query, &req.candidates, limit);

    HttpResponse::Ok().json(RankResponse {
        total_candidates: req.candidates.len(),
        matches,
    })
}

/// Record post-consultation feedback for a doctor
///
/// POST /api/v1/matches/feedback
///
/// Request body:
/// ```json
/// {
///   "doctorId": "string",
///   "matchPercentage": 85
/// }
/// ```
async fn record_feedback(
    state: web::Data<AppState>,
    req: web::Json<FeedbackRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.feedback.record(&req.doctor_id, req.match_percentage) {
        Ok(()) => {
            tracing::debug!(
                "Recorded feedback {} for doctor {}",
                req.match_percentage,
                req.doctor_id
            );
            HttpResponse::Ok().json(FeedbackResponse {
                success: true,
                feedback_id: uuid::Uuid::new_v4().to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to record feedback for {}: {}", req.doctor_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to record feedback".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Fetch recorded feedback for a doctor
///
/// GET /api/v1/matches/feedback?doctorId={doctorId}
async fn feedback_history(
    state: web::Data<AppState>,
    query: web::Query<FeedbackHistoryQuery>,
) -> impl Responder {
    let doctor_id = &query.doctor_id;

    match state.feedback.history(doctor_id) {
        Ok(history) => HttpResponse::Ok().json(serde_json::json!({
            "doctorId": doctor_id,
            "history": history,
            "count": history.len(),
        })),
        Err(e) => {
            tracing::error!("Failed to fetch feedback for {}: {}", doctor_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch feedback".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryFeedbackStore;
    use crate::models::{CandidateProvider, ProviderKind};
    use actix_web::{test, App};

    fn test_state() -> AppState {
        AppState {
            matcher: Matcher::with_builtin_table(),
            feedback: Arc::new(MemoryFeedbackStore::new()),
            matching: MatchingSettings::default(),
        }
    }

    fn test_candidate(id: &str) -> CandidateProvider {
        CandidateProvider {
            id: id.to_string(),
            name: format!("Dr. {}", id),
            specialization: vec!["Cardiology".to_string()],
            location: None,
            rating: 4.5,
            reviews: 80,
            experience: vec![],
            education: vec![],
            awards: vec![],
            conferences: vec![],
            languages: vec![],
            fees: 300.0,
            available: true,
            kind: ProviderKind::Human,
            online_therapy: true,
            next_available: None,
        }
    }

    #[actix_web::test]
    async fn test_rank_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/matches/rank", web::post().to(rank_matches)),
        )
        .await;

        let body = serde_json::json!({
            "query": { "symptoms": ["chest pain"], "urgency": "high" },
            "candidates": [test_candidate("a"), test_candidate("b")],
        });

        let req = test::TestRequest::post()
            .uri("/matches/rank")
            .set_json(&body)
            .to_request();
        let resp: RankResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.total_candidates, 2);
        assert_eq!(resp.matches.len(), 2);
    }

    #[actix_web::test]
    async fn test_feedback_roundtrip() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/matches/feedback", web::post().to(record_feedback))
                .route("/matches/feedback", web::get().to(feedback_history)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/feedback")
            .set_json(serde_json::json!({ "doctorId": "doc-1", "matchPercentage": 85 }))
            .to_request();
        let resp: FeedbackResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);

        let req = test::TestRequest::get()
            .uri("/matches/feedback?doctorId=doc-1")
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["count"], 1);
    }

    #[::core::prelude::v1::test]
    fn test_candidate_cap_follows_configuration() {
        // The only candidate-volume ceiling is matching.max_candidates, so
        // raising it past the old default must actually admit larger rosters
        let mut matching = MatchingSettings::default();
        matching.max_candidates = 3000;

        let candidates: Vec<CandidateProvider> =
            (0..2500).map(|i| test_candidate(&i.to_string())).collect();
        let req = RankRequest {
            query: Default::default(),
            candidates,
            limit: None,
        };

        assert!(check_rank_request(&req, &matching).is_none());

        matching.max_candidates = 100;
        assert!(check_rank_request(&req, &matching).is_some());
    }

    #[actix_web::test]
    async fn test_feedback_history_requires_doctor_id() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/matches/feedback", web::get().to(feedback_history)),
        )
        .await;

        let req = test::TestRequest::get().uri("/matches/feedback").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_feedback_validation_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .route("/matches/feedback", web::post().to(record_feedback)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/feedback")
            .set_json(serde_json::json!({ "doctorId": "", "matchPercentage": 85 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }
}
