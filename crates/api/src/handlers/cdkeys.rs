//! Handlers for the `/cdkeys` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use pawsona_core::cdkey::{is_admin_code, normalize_code, ADMIN_CODE, ADMIN_REMAINING_USES};
use pawsona_core::error::CoreError;
use pawsona_db::models::cdkey::RedeemGrant;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /api/v1/cdkeys/redeem`.
#[derive(Debug, Deserialize)]
pub struct RedeemRequest {
    pub code: String,
}

/// Body for `POST /api/v1/cdkeys/report`.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub code: String,
    /// Whether the generation cycle this code paid for succeeded.
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub ok: bool,
}

/// POST /api/v1/cdkeys/redeem
///
/// Redeem a code, taking it `available -> pending`. The admin code
/// bypasses the store entirely and always succeeds.
pub async fn redeem(
    State(state): State<AppState>,
    Json(input): Json<RedeemRequest>,
) -> AppResult<impl IntoResponse> {
    let code = normalize_code(&input.code);
    if code.is_empty() {
        return Err(CoreError::InvalidRequest("code is required".to_string()).into());
    }

    if is_admin_code(&code) {
        tracing::info!("Admin code redeemed");
        return Ok(Json(DataResponse {
            data: RedeemGrant {
                code: ADMIN_CODE.to_string(),
                kind: "admin",
                remaining_uses: ADMIN_REMAINING_USES,
            },
        }));
    }

    let grant = state.codes.redeem(&code, Utc::now()).await?;
    tracing::info!(code = %grant.code, kind = grant.kind, "Code redeemed");
    Ok(Json(DataResponse { data: grant }))
}

/// POST /api/v1/cdkeys/report
///
/// Report the outcome of a redeemed code's generation cycle. Success
/// finalizes the code as `used`; failure releases it back to
/// `available`. Idempotent, and a late failure report cannot revive a
/// code that has since been used. The admin code is exempt.
pub async fn report(
    State(state): State<AppState>,
    Json(input): Json<ReportRequest>,
) -> AppResult<impl IntoResponse> {
    let code = normalize_code(&input.code);
    if code.is_empty() {
        return Err(CoreError::InvalidRequest("code is required".to_string()).into());
    }

    if !is_admin_code(&code) {
        if input.success {
            state.codes.report_success(&code, Utc::now()).await?;
        } else {
            state.codes.report_failure(&code).await?;
        }
        tracing::info!(code = %code, success = input.success, "Redemption outcome reported");
    }

    Ok(Json(DataResponse {
        data: ReportResponse { ok: true },
    }))
}
