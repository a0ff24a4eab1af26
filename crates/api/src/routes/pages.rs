//! Page routes serving the pre-built frontend.

use axum::routing::get;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ServerConfig;
use crate::handlers::pages::{self, DASHBOARD_PATH, LOGIN_PATH};
use crate::state::AppState;

/// Page routes, mounted at the root.
///
/// ```text
/// /                             submission form (public)
/// /admin-login                  login page (public)
/// /alterino-game-dev-admins     dashboard (allow-listed admin, else redirect)
/// /assets/*                     static bundle
/// ```
pub fn router(config: &ServerConfig) -> Router<AppState> {
    let index = config.static_dir.join("index.html");

    Router::new()
        .route_service("/", ServeFile::new(&index))
        .route_service(LOGIN_PATH, ServeFile::new(&index))
        .route(DASHBOARD_PATH, get(pages::dashboard))
        .nest_service("/assets", ServeDir::new(config.static_dir.join("assets")))
}
