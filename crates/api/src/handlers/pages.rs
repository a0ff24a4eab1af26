//! Page handlers for the single-page frontend.
//!
//! The built frontend is one `index.html` that renders the form, the login
//! screen, or the dashboard depending on the path. Only the dashboard path
//! is gated here; data itself is always protected by the API extractors.

use std::path::Path;

use axum::extract::{Request, State};
use axum::response::{IntoResponse, Redirect, Response};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::error::AppError;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Route of the administrator login page.
pub const LOGIN_PATH: &str = "/admin-login";

/// Route of the gated administrator dashboard.
pub const DASHBOARD_PATH: &str = "/alterino-game-dev-admins";

/// GET /alterino-game-dev-admins
///
/// Serve the dashboard to an allow-listed administrator. Anyone else is
/// redirected to the login page before any application data is read.
pub async fn dashboard(
    State(state): State<AppState>,
    admin: Result<RequireAdmin, AppError>,
    request: Request,
) -> Response {
    match admin {
        Ok(RequireAdmin(admin)) => {
            tracing::debug!(admin_id = admin.admin_id, "Serving dashboard");
            serve_index(&state.config.static_dir, request).await
        }
        Err(rejection) => {
            tracing::debug!(reason = %rejection, "Dashboard access denied, redirecting to login");
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}

/// Serve `index.html` from the static directory.
pub async fn serve_index(static_dir: &Path, request: Request) -> Response {
    match ServeFile::new(static_dir.join("index.html"))
        .oneshot(request)
        .await
    {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
