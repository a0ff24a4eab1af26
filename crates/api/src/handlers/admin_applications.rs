//! Handlers for the admin dashboard's view of submitted applications.
//!
//! Both endpoints parse the filter before touching the database, fetch every
//! stored record once, and narrow the list in memory.

use alterino_core::export::{build_csv, EXPORT_FILENAME};
use alterino_core::filter::ApplicationFilter;
use alterino_db::models::application::Application;
use alterino_db::repositories::ApplicationRepo;
use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::middleware::rbac::RequireAdmin;
use crate::query::ApplicationListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/applications?search=&experience=
///
/// List applications newest first, narrowed by the dashboard filter.
pub async fn list(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ApplicationListParams>,
) -> AppResult<Json<DataResponse<Vec<Application>>>> {
    let filter = params.to_filter()?;
    let applications = fetch_filtered(&state, &filter).await?;

    tracing::debug!(
        admin_id = admin.admin_id,
        count = applications.len(),
        "Listed applications",
    );

    Ok(Json(DataResponse { data: applications }))
}

/// GET /api/v1/admin/applications/export?search=&experience=
///
/// Download the currently filtered applications as `applications.csv`.
pub async fn export_csv(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ApplicationListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.to_filter()?;
    let applications = fetch_filtered(&state, &filter).await?;

    let csv = build_csv(&applications);

    tracing::info!(
        admin_id = admin.admin_id,
        rows = applications.len(),
        "Exported applications CSV",
    );

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        csv,
    ))
}

async fn fetch_filtered(
    state: &AppState,
    filter: &ApplicationFilter,
) -> AppResult<Vec<Application>> {
    let all = ApplicationRepo::list_all(&state.pool).await?;
    Ok(filter.apply(all))
}
