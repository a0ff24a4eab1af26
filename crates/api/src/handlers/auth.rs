//! Handlers for the `/auth` resource (login, refresh, logout, session).

use alterino_core::error::CoreError;
use alterino_db::models::admin_user::{AdminUser, AdminUserInfo};
use alterino_db::models::session::CreateSession;
use alterino_db::repositories::{AdminUserRepo, SessionRepo};
use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum consecutive failed login attempts before locking the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Duration in minutes to lock an account after exceeding failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub admin: AdminUserInfo,
}

type WithCookie<T> = (CookieJar, Json<T>);

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens and
/// sets the `admin_session` cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    ApiJson(input): ApiJson<LoginRequest>,
) -> AppResult<WithCookie<AuthResponse>> {
    let admin = AdminUserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    if !admin.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let mut failed_so_far = admin.failed_login_count;
    if let Some(locked_until) = admin.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
        // The lock ran out: the next failures count from zero.
        AdminUserRepo::clear_lock(&state.pool, admin.id).await?;
        failed_so_far = 0;
    }

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        AdminUserRepo::increment_failed_login(&state.pool, admin.id).await?;

        let new_count = failed_so_far + 1;
        if new_count >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            AdminUserRepo::lock_account(&state.pool, admin.id, lock_until).await?;
            tracing::warn!(admin_id = admin.id, "Admin account locked after failed logins");
        }

        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    AdminUserRepo::record_successful_login(&state.pool, admin.id).await?;
    tracing::info!(admin_id = admin.id, "Admin logged in");

    issue_tokens(&state, jar, &admin, user_agent(&headers)).await
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new tokens. The old refresh token is
/// consumed atomically (rotation), so replaying it, even concurrently,
/// yields at most one new session.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    ApiJson(input): ApiJson<RefreshRequest>,
) -> AppResult<WithCookie<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::consume_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let admin = AdminUserRepo::find_by_id(&state.pool, session.admin_user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Account no longer exists".into()))
        })?;

    if !admin.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    issue_tokens(&state, jar, &admin, user_agent(&headers)).await
}

/// POST /api/v1/auth/logout
///
/// Revoke every refresh session of the caller and clear the session cookie.
/// Returns 204 No Content.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    auth_user: AuthUser,
) -> AppResult<(StatusCode, CookieJar)> {
    let revoked = SessionRepo::revoke_all_for_admin(&state.pool, auth_user.admin_id).await?;
    tracing::info!(admin_id = auth_user.admin_id, revoked, "Admin logged out");

    Ok((
        StatusCode::NO_CONTENT,
        jar.add(clear_session_cookie(state.config.cookie_secure)),
    ))
}

/// GET /api/v1/auth/session
///
/// Return the signed-in administrator. Answers 401 without a valid token and
/// 403 when the account's email is not on the allow-list.
pub async fn session(RequireAdmin(admin): RequireAdmin) -> Json<DataResponse<AdminUserInfo>> {
    Json(DataResponse {
        data: AdminUserInfo {
            id: admin.admin_id,
            email: admin.email,
        },
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Generate access + refresh tokens, persist a session row, and build the
/// response with the session cookie added to `jar`.
async fn issue_tokens(
    state: &AppState,
    jar: CookieJar,
    admin: &AdminUser,
    user_agent: Option<String>,
) -> AppResult<WithCookie<AuthResponse>> {
    let jwt = &state.config.jwt;

    let access_token = generate_access_token(admin.id, &admin.email, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let session_input = CreateSession {
        admin_user_id: admin.id,
        refresh_token_hash: refresh_hash,
        expires_at: Utc::now() + chrono::Duration::days(jwt.refresh_token_expiry_days),
        user_agent,
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    let expires_in = jwt.access_token_expiry_secs();
    let cookie = session_cookie(access_token.clone(), expires_in, state.config.cookie_secure);

    Ok((
        jar.add(cookie),
        Json(AuthResponse {
            access_token,
            refresh_token: refresh_plaintext,
            expires_in,
            admin: AdminUserInfo::from(admin),
        }),
    ))
}
