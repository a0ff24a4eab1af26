//! Repository for the `applications` table.

use alterino_core::application::{FormChoice, NewApplication};
use sqlx::PgPool;

use crate::models::application::Application;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, full_name, usn, branch_semester, email, phone, skillset, \
    experience_level, has_projects, portfolio_link, weekly_hours, \
    communication_platform, gaming_preferences, join_reason, has_computer, \
    created_at";

/// Insert and read-all access to submitted applications.
///
/// Applications are written once by the submission flow and only read
/// afterwards; there is no update or delete.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert one validated application, returning the stored row.
    pub async fn create(pool: &PgPool, input: &NewApplication) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications \
                (full_name, usn, branch_semester, email, phone, skillset, \
                 experience_level, has_projects, portfolio_link, weekly_hours, \
                 communication_platform, gaming_preferences, join_reason, has_computer) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(&input.full_name)
            .bind(&input.usn)
            .bind(&input.branch_semester)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.skillset_strings())
            .bind(input.experience_level.as_str())
            .bind(input.has_projects)
            .bind(&input.portfolio_link)
            .bind(input.weekly_hours.as_str())
            .bind(input.communication_platform.as_str())
            .bind(&input.gaming_preferences)
            .bind(&input.join_reason)
            .bind(input.has_computer)
            .fetch_one(pool)
            .await
    }

    /// Every application, newest first (ties broken by id, newest first).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Application>(&query).fetch_all(pool).await
    }
}
