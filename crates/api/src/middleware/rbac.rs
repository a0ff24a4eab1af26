//! Allow-list authorization.
//!
//! A valid token is not enough to see applicant data: the token's email must
//! also appear in `ADMIN_EMAILS`. Removing an address from the list revokes
//! access on the next request without touching the database.

use alterino_core::error::CoreError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an allow-listed administrator. Rejects with 403 Forbidden otherwise.
///
/// Only the access token's claims are consulted: `is_active` is not re-read
/// from the database. A deactivated account cannot refresh, so its access
/// lapses when the current access token expires.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !state.config.admin_emails.contains(&user.email) {
            tracing::warn!(admin_id = user.admin_id, "Rejected admin not on allow-list");
            return Err(AppError::Core(CoreError::Forbidden(
                "Administrator access required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
