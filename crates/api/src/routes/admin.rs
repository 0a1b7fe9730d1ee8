//! Route definitions for the administrative `/admin` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /cdkeys           -> list_cdkeys
/// POST   /cdkeys/generate  -> generate_cdkeys
/// DELETE /cdkeys/used      -> purge_used_cdkeys
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cdkeys", get(admin::list_cdkeys))
        .route("/cdkeys/generate", post(admin::generate_cdkeys))
        .route("/cdkeys/used", delete(admin::purge_used_cdkeys))
}
