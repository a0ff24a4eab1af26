//! Handlers for the public `/applications` resource.

use alterino_core::application::{validate_submission, ApplicationSubmission};
use alterino_db::models::application::Application;
use alterino_db::repositories::ApplicationRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/applications
///
/// Validate and store a recruitment form submission. Nothing is written
/// unless every field passes validation. Returns 201 with the stored record.
pub async fn submit(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ApplicationSubmission>,
) -> AppResult<(StatusCode, Json<DataResponse<Application>>)> {
    let new_application = validate_submission(input)?;

    let application = ApplicationRepo::create(&state.pool, &new_application).await?;

    tracing::info!(
        application_id = application.id,
        experience_level = %application.experience_level,
        "Application submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: application }),
    ))
}
