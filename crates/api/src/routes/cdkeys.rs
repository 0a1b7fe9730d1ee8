//! Route definitions for the `/cdkeys` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::cdkeys;
use crate::state::AppState;

/// Routes mounted at `/cdkeys`.
///
/// ```text
/// POST   /redeem          -> redeem
/// POST   /report          -> report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/redeem", post(cdkeys::redeem))
        .route("/report", post(cdkeys::report))
}
