//! Admin account model and DTOs.

use alterino_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full row from the `admin_users` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// Use [`AdminUserInfo`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public admin info returned by the auth endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserInfo {
    pub id: DbId,
    pub email: String,
}

impl From<&AdminUser> for AdminUserInfo {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// DTO for creating an admin account. The password must already be hashed.
#[derive(Debug)]
pub struct CreateAdminUser {
    pub email: String,
    pub password_hash: String,
}
