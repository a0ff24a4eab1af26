//! Route definitions for the public `/applications` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::applications;
use crate::state::AppState;

/// Routes mounted at `/applications`.
///
/// ```text
/// POST /    -> submit (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(applications::submit))
}
