//! Handlers for the `/jobs` resource.
//!
//! Job creation is fast: it runs the title draw, composes the prompt,
//! and persists a `pending` row. The slow part (provider submit/poll)
//! runs in the separately triggered drive endpoint, so creation never
//! holds a connection open for the generation itself.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use pawsona_core::catalog::TitleRecord;
use pawsona_core::error::CoreError;
use pawsona_core::job::JobStatus;
use pawsona_core::pet::PetCategory;
use pawsona_core::prompt::compose_prompt;
use pawsona_core::rarity::RarityWeights;
use pawsona_core::selection::{draw_equal, draw_weighted};
use pawsona_core::types::new_job_id;
use pawsona_db::models::job::{Job, NewJob};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Body for `POST /api/v1/jobs`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    /// Reference photo: URL or inline `data:image/...` payload.
    pub pet_image: String,
    /// Category string (`cat`, `dog_female`, ...).
    pub pet_type: String,
    /// Optional tier weights. Present: weighted draw. Absent: the
    /// primary equal-probability draw, with rarity derived from the
    /// chosen title.
    pub weights: Option<RarityWeights>,
}

/// Created-job payload: the frozen selection, returned immediately.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedJob {
    pub job_id: String,
    pub rarity: &'static str,
    pub title: String,
    pub description: String,
    pub prompt: String,
}

/// POST /api/v1/jobs
///
/// Create a generation job. Draws the title exactly once, freezes
/// rarity/title/prompt into the row, and returns without waiting for
/// image synthesis.
pub async fn create_job(
    State(state): State<AppState>,
    Json(input): Json<CreateJobRequest>,
) -> AppResult<impl IntoResponse> {
    if input.pet_image.trim().is_empty() {
        return Err(CoreError::InvalidRequest("petImage is required".to_string()).into());
    }
    if input.pet_type.trim().is_empty() {
        return Err(CoreError::InvalidRequest("petType is required".to_string()).into());
    }
    let category = PetCategory::parse(&input.pet_type)?;

    let title: &'static TitleRecord = match &input.weights {
        Some(weights) => draw_weighted(weights, category.species)?,
        None => draw_equal(category.species)?,
    };
    let prompt = compose_prompt(title.prompt, category);

    let job = state
        .jobs
        .insert(
            NewJob {
                id: new_job_id(),
                pet_image: input.pet_image,
                pet_type: category.as_str().to_string(),
                rarity: title.rarity,
                title_id: title.id as i32,
                title: title.title.to_string(),
                description: title.description.to_string(),
                prompt,
            },
            Utc::now(),
        )
        .await?;

    tracing::info!(
        job_id = %job.id,
        rarity = job.rarity.as_str(),
        title = %job.title,
        "Generation job created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedJob {
                job_id: job.id,
                rarity: job.rarity.as_str(),
                title: job.title,
                description: job.description,
                prompt: job.prompt,
            },
        }),
    ))
}

// ---------------------------------------------------------------------------
// Status projection
// ---------------------------------------------------------------------------

/// Client-facing projection of a job row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusResponse {
    pub job_id: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    /// Set on `pending`: the client should re-trigger the drive
    /// endpoint to resume the stalled job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_resume: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JobResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full result payload, present once a job completes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResult {
    pub rarity: &'static str,
    pub title: String,
    pub description: String,
    pub prompt: String,
    pub pet_type: String,
    pub pet_image: String,
    pub generated_image: Option<String>,
}

/// Map a job row into the client projection. Read-only.
pub(crate) fn project_status(job: Job) -> JobStatusResponse {
    match job.status {
        JobStatus::Pending => JobStatusResponse {
            job_id: job.id,
            status: JobStatus::Pending.as_str(),
            message: Some("Waiting for generation to start"),
            should_resume: Some(true),
            result: None,
            error: None,
        },
        JobStatus::Processing => JobStatusResponse {
            job_id: job.id,
            status: JobStatus::Processing.as_str(),
            message: Some("Generation in progress"),
            should_resume: None,
            result: None,
            error: None,
        },
        JobStatus::Completed => JobStatusResponse {
            job_id: job.id,
            status: JobStatus::Completed.as_str(),
            message: None,
            should_resume: None,
            result: Some(JobResult {
                rarity: job.rarity.as_str(),
                title: job.title,
                description: job.description,
                prompt: job.prompt,
                pet_type: job.pet_type,
                pet_image: job.pet_image,
                generated_image: job.generated_image,
            }),
            error: None,
        },
        JobStatus::Failed => JobStatusResponse {
            job_id: job.id,
            status: JobStatus::Failed.as_str(),
            message: None,
            should_resume: None,
            result: None,
            error: job.error_message,
        },
    }
}

/// GET /api/v1/jobs/{id}
///
/// Read-only status projection; never mutates the job. A `pending`
/// response carries `shouldResume: true` so the client re-triggers the
/// drive endpoint.
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let job = state
        .jobs
        .find(&id)
        .await?
        .ok_or(CoreError::JobNotFound(id))?;

    Ok(Json(DataResponse {
        data: project_status(job),
    }))
}

// ---------------------------------------------------------------------------
// Drive
// ---------------------------------------------------------------------------

/// POST /api/v1/jobs/{id}/drive
///
/// Push the job through the provider's submit/poll protocol. Idempotent
/// and safe to call repeatedly; may hold the connection for up to the
/// polling ceiling.
pub async fn drive_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let outcome = pawsona_worker::drive_job(
        state.jobs.as_ref(),
        state.provider.as_ref(),
        &state.worker,
        &id,
    )
    .await?;

    let job = match outcome {
        pawsona_worker::DriveOutcome::Completed(job)
        | pawsona_worker::DriveOutcome::Failed(job)
        | pawsona_worker::DriveOutcome::Processing(job) => job,
    };

    Ok(Json(DataResponse {
        data: project_status(job),
    }))
}
