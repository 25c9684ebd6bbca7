//! Axum route handlers for match scoring and recommendations.
//!
//! The handlers own everything the scorer must not: fetching rows,
//! applying the high-match threshold, deciding what to surface. The scorer
//! itself stays pure, so scoring a whole job list is just a map.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::MatchResult;
use crate::models::job::{GeoPoint, JobPosting, JobRow};
use crate::models::profile::{CandidateProfile, ProfileRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job_id: Uuid,
    pub profile_id: Uuid,
    /// Fresh device coordinates; overrides the profile's stored location.
    pub candidate_location: Option<GeoPoint>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub job_id: Uuid,
    pub profile_id: Uuid,
    pub result: MatchResult,
    pub high_match: bool,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationEntry {
    pub job_id: Uuid,
    pub title: String,
    pub result: MatchResult,
    pub high_match: bool,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub profile_id: Uuid,
    pub recommendations: Vec<RecommendationEntry>,
}

/// POST /api/v1/match/score
///
/// Scores one job against one profile and reports whether it clears the
/// configured high-match threshold. Whether to notify is the caller's call.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let job = fetch_job(&state, request.job_id).await?;
    let profile = fetch_profile(&state, request.profile_id).await?;

    let result = state.scorer.score(&job, &profile, request.candidate_location);
    let high_match = result.total_score > state.config.match_notify_threshold;

    debug!(
        job_id = %request.job_id,
        profile_id = %request.profile_id,
        total_score = result.total_score,
        "scored job/profile pair"
    );

    Ok(Json(ScoreResponse {
        job_id: request.job_id,
        profile_id: request.profile_id,
        result,
        high_match,
    }))
}

/// GET /api/v1/match/recommendations/:profile_id
///
/// Scores every active job for the profile, highest total first. Optional
/// `latitude`/`longitude` query parameters carry a fresh device fix.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let profile = fetch_profile(&state, profile_id).await?;

    let candidate_location = match (params.latitude, params.longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoPoint {
            latitude,
            longitude,
        }),
        (None, None) => None,
        _ => {
            return Err(AppError::Validation(
                "latitude and longitude must be provided together".to_string(),
            ))
        }
    };

    let jobs = JobRow::list_active(&state.db).await?;

    let mut recommendations: Vec<RecommendationEntry> = jobs
        .into_iter()
        .map(JobPosting::from)
        .map(|job| {
            let result = state.scorer.score(&job, &profile, candidate_location);
            RecommendationEntry {
                job_id: job.id,
                title: job.title,
                high_match: result.total_score > state.config.match_notify_threshold,
                result,
            }
        })
        .collect();

    // total_score is always finite (clamped to [0, 1]).
    recommendations.sort_by(|a, b| {
        b.result
            .total_score
            .partial_cmp(&a.result.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        %profile_id,
        count = recommendations.len(),
        "built recommendation list"
    );

    Ok(Json(RecommendationsResponse {
        profile_id,
        recommendations,
    }))
}

async fn fetch_job(state: &AppState, job_id: Uuid) -> Result<JobPosting, AppError> {
    let row = JobRow::fetch(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    Ok(JobPosting::from(row))
}

async fn fetch_profile(state: &AppState, profile_id: Uuid) -> Result<CandidateProfile, AppError> {
    let row = ProfileRow::fetch(&state.db, profile_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {profile_id} not found")))?;
    Ok(CandidateProfile::from(row))
}
