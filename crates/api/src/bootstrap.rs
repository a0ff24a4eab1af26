//! Startup creation of the first administrator account.
//!
//! Accounts are never created over HTTP. When `ADMIN_BOOTSTRAP_EMAIL` and
//! `ADMIN_BOOTSTRAP_PASSWORD` are set, the account is created once at
//! startup; later restarts leave an existing account untouched.

use alterino_core::error::CoreError;
use alterino_db::models::admin_user::CreateAdminUser;
use alterino_db::repositories::AdminUserRepo;
use alterino_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};

/// Create the configured bootstrap admin if it does not exist yet.
///
/// Returns `true` when a new account was created.
pub async fn ensure_bootstrap_admin(pool: &DbPool, config: &ServerConfig) -> AppResult<bool> {
    let Some(bootstrap) = &config.bootstrap_admin else {
        return Ok(false);
    };

    if !config.admin_emails.contains(&bootstrap.email) {
        tracing::warn!(
            email = %bootstrap.email,
            "Bootstrap admin is not in ADMIN_EMAILS and will not be able to open the dashboard",
        );
    }

    if AdminUserRepo::find_by_email(pool, &bootstrap.email)
        .await?
        .is_some()
    {
        tracing::debug!(email = %bootstrap.email, "Bootstrap admin already exists");
        return Ok(false);
    }

    validate_password_strength(&bootstrap.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&bootstrap.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            email: bootstrap.email.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, email = %admin.email, "Bootstrap admin created");
    Ok(true)
}
