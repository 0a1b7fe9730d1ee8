//! Administrative code management: listing, bulk generation, purge.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use pawsona_core::cdkey::generate_batch;
use pawsona_db::models::cdkey::{CdkeyStats, CdkeySummary};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Listing payload: every code plus aggregate counts.
#[derive(Debug, Serialize)]
pub struct CdkeyListing {
    pub codes: Vec<CdkeySummary>,
    pub stats: CdkeyStats,
}

/// GET /api/v1/admin/cdkeys
pub async fn list_cdkeys(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let codes = state.codes.list().await?;
    let stats = CdkeyStats::from_summaries(&codes);
    Ok(Json(DataResponse {
        data: CdkeyListing { codes, stats },
    }))
}

/// Body for `POST /api/v1/admin/cdkeys/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub count: usize,
    /// Overrides the configured code prefix when present.
    #[serde(default)]
    pub prefix: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generated: usize,
    pub codes: Vec<String>,
}

/// POST /api/v1/admin/cdkeys/generate
///
/// Bulk-generate codes, unique among themselves and against every
/// existing code. May return fewer than requested if the generator
/// exhausts its attempt budget.
pub async fn generate_cdkeys(
    State(state): State<AppState>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<impl IntoResponse> {
    let prefix = input
        .prefix
        .unwrap_or_else(|| state.config.code_prefix.clone());

    let existing = state.codes.existing_codes().await?;
    let codes = generate_batch(&prefix, input.count, &existing)?;
    let generated = state.codes.insert_batch(&codes, Utc::now()).await?;

    tracing::info!(requested = input.count, generated, "Generated redemption codes");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: GenerateResponse { generated, codes },
        }),
    ))
}

#[derive(Debug, Serialize)]
pub struct PurgeResponse {
    pub removed: u64,
}

/// DELETE /api/v1/admin/cdkeys/used
///
/// Remove every `used` code. Available and pending codes are untouched.
pub async fn purge_used_cdkeys(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let removed = state.codes.purge_used().await?;
    tracing::info!(removed, "Purged used redemption codes");
    Ok(Json(DataResponse {
        data: PurgeResponse { removed },
    }))
}
