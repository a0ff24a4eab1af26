//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin_applications;
use crate::state::AppState;

/// Routes mounted at `/admin`. Every handler requires an allow-listed admin.
///
/// ```text
/// GET /applications          -> list (filtered)
/// GET /applications/export   -> export_csv (filtered)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/applications", get(admin_applications::list))
        .route("/applications/export", get(admin_applications::export_csv))
}
