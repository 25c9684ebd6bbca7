//! Axum route handlers for jobs and content normalization.
//!
//! Normalized content is never persisted: it is recomputed from the stored
//! raw text on every read, so vocabulary changes take effect immediately.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::normalizer::{normalize_content, NormalizedJobContent};
use crate::errors::AppError;
use crate::models::job::JobRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub content: NormalizedJobContent,
}

#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    pub job: JobRow,
    pub content: NormalizedJobContent,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobRow>,
}

/// POST /api/v1/content/normalize
///
/// Stateless preview: splits the posted raw text into sections. Empty or
/// unstructured input degrades per the normalizer contract instead of
/// erroring, mirroring how render paths consume it.
pub async fn handle_normalize_text(
    State(state): State<AppState>,
    Json(request): Json<NormalizeRequest>,
) -> Json<NormalizeResponse> {
    let content = normalize_content(&request.raw_text, &state.keywords);
    Json(NormalizeResponse { content })
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = JobRow::list_active(&state.db).await?;
    Ok(Json(JobListResponse { jobs }))
}

/// GET /api/v1/jobs/:id
///
/// Returns the stored row plus its lazily normalized content.
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobDetailResponse>, AppError> {
    let job = JobRow::fetch(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let content = normalize_content(
        job.raw_description.as_deref().unwrap_or_default(),
        &state.keywords,
    );

    Ok(Json(JobDetailResponse { job, content }))
}

#[derive(Debug, Deserialize)]
pub struct NormalizeJobRequest {
    /// Overrides the stored description when present, e.g. to preview an
    /// edited posting before saving it.
    pub raw_text: Option<String>,
}

/// POST /api/v1/jobs/:id/normalize
pub async fn handle_normalize_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Json(request): Json<NormalizeJobRequest>,
) -> Result<Json<NormalizeResponse>, AppError> {
    let raw = match request.raw_text {
        Some(text) => text,
        None => JobRow::fetch(&state.db, job_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?
            .raw_description
            .unwrap_or_default(),
    };

    let content = normalize_content(&raw, &state.keywords);
    Ok(Json(NormalizeResponse { content }))
}
