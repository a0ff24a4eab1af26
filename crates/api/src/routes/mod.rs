pub mod admin;
pub mod applications;
pub mod auth;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /applications                     submit (public)
///
/// /auth/login                       login (public)
/// /auth/refresh                     refresh (public)
/// /auth/logout                      logout (requires auth)
/// /auth/session                     current admin (allow-listed admin)
///
/// /admin/applications               filtered list (allow-listed admin)
/// /admin/applications/export        filtered CSV download (allow-listed admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/applications", applications::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
