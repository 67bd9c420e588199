use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{MatchEngine, MatchOptions};
use crate::models::{ErrorResponse, FindMatchesQuery, FindMatchesResponse, HealthResponse, ProfileId};
use crate::services::ProfileRepository;

/// Message shown to clients when profiles cannot be loaded
const LOAD_FAILURE_MESSAGE: &str = "Couldn't load matches, try again";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<ProfileRepository>,
    pub engine: MatchEngine,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/users/{id}", web::get().to(get_profile))
        .route("/users/{id}/matches", web::get().to(find_matches))
        .route("/cache/invalidate", web::post().to(invalidate_cache));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.profiles.health_check().await;
    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cached_profiles: state.profiles.cache_stats().profile_entries,
    })
}

/// Get a single profile
///
/// GET /api/v1/users/{id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = ProfileId::parse(&path.into_inner());

    match state.profiles.profile(&user_id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile.as_ref()),
        Ok(None) => not_found(),
        Err(e) => {
            tracing::error!("Failed to fetch profile {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profile".to_string(),
                message: "Couldn't load profile, try again".to_string(),
                status_code: 500,
            })
        }
    }
}

/// Find matches endpoint
///
/// GET /api/v1/users/{id}/matches
///
/// Query parameters (all optional):
/// `minScore`, `maxPossibleScore`, `limit`, `offset`, `search`, and the
/// comma-separated lists `locations`, `skills`, `resources`, `values`.
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<FindMatchesQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = ProfileId::parse(&path.into_inner());
    if user_id.is_missing() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid user ID".to_string(),
            message: "User ID must not be empty".to_string(),
            status_code: 400,
        });
    }

    let options = MatchOptions {
        min_score: query.min_score.unwrap_or(state.matching.min_score),
        max_possible_score: query
            .max_possible_score
            .unwrap_or(state.matching.max_possible_score),
        offset: query.offset.unwrap_or(0),
        limit: usize::from(
            query
                .limit
                .unwrap_or(state.matching.default_limit)
                .min(state.matching.max_limit),
        ),
    };

    tracing::info!("Finding matches for user: {}, limit: {}", user_id, options.limit);

    let reference = match state.profiles.profile(&user_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return not_found(),
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            return load_failure();
        }
    };

    let candidates = match state.profiles.candidate_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to load candidate pool for {}: {}", user_id, e);
            return load_failure();
        }
    };

    tracing::debug!("Scoring {} candidates for {}", candidates.len(), user_id);

    let filter = query.profile_filter();
    let page = match state.engine.find_matches(&reference, &candidates, &filter, &options) {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Matching failed for {}: {}", user_id, e);
            return load_failure();
        }
    };

    tracing::info!(
        "Returning {} matches for user {} ({} above threshold)",
        page.matches.len(),
        user_id,
        page.total_results
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: page.matches,
        total_results: page.total_results,
        next_offset: page.next_offset,
    })
}

/// Drop cached profile snapshots
///
/// POST /api/v1/cache/invalidate
///
/// Called by the profile management application after profile edits.
async fn invalidate_cache(state: web::Data<AppState>) -> impl Responder {
    state.profiles.invalidate();
    tracing::info!("Profile cache invalidated on request");
    HttpResponse::NoContent().finish()
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Not found".to_string(),
        message: "User not found".to_string(),
        status_code: 404,
    })
}

fn load_failure() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Failed to load matches".to_string(),
        message: LOAD_FAILURE_MESSAGE.to_string(),
        status_code: 500,
    })
}
