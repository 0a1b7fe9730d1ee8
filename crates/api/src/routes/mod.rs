pub mod admin;
pub mod cdkeys;
pub mod health;
pub mod jobs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /jobs                      create generation job (POST)
/// /jobs/{id}                 client-facing status projection (GET)
/// /jobs/{id}/drive           push the job through the provider (POST)
///
/// /cdkeys/redeem             redeem a code (POST)
/// /cdkeys/report             report redemption outcome (POST)
///
/// /admin/cdkeys              list codes with stats (GET)
/// /admin/cdkeys/generate     bulk-generate codes (POST)
/// /admin/cdkeys/used         purge used codes (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/jobs", jobs::router())
        .nest("/cdkeys", cdkeys::router())
        .nest("/admin", admin::router())
}
