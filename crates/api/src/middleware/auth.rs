//! JWT-based authentication extractor for Axum handlers.

use alterino_core::error::CoreError;
use alterino_core::types::DbId;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use crate::auth::cookie::session_token;
use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin account, taken from the access token.
///
/// The token is read from an `Authorization: Bearer` header when present and
/// from the `admin_session` cookie otherwise.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The admin account's database id (from `claims.sub`).
    pub admin_id: DbId,
    /// The account email the token was issued for.
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = match parts.headers.get(AUTHORIZATION) {
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|v| v.strip_prefix("Bearer "))
                .ok_or_else(|| {
                    AppError::Core(CoreError::Unauthorized(
                        "Invalid Authorization format. Expected: Bearer <token>".into(),
                    ))
                })?,
            None => session_token(&jar).ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header or session cookie".into(),
                ))
            })?,
        };

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            admin_id: claims.sub,
            email: claims.email,
        })
    }
}
