//! Application entity model.

use alterino_core::export::{optional_cell, CsvRecord, MULTI_VALUE_SEPARATOR};
use alterino_core::filter::ApplicantRecord;
use alterino_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `applications` table.
///
/// Choice columns are read back as their stored strings; they were checked
/// against the closed sets on the way in (and by `CHECK` constraints).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub full_name: String,
    pub usn: String,
    pub branch_semester: String,
    pub email: String,
    pub phone: String,
    pub skillset: Vec<String>,
    pub experience_level: String,
    pub has_projects: bool,
    pub portfolio_link: Option<String>,
    pub weekly_hours: String,
    pub communication_platform: String,
    pub gaming_preferences: Option<String>,
    pub join_reason: String,
    pub has_computer: bool,
    pub created_at: Timestamp,
}

impl ApplicantRecord for Application {
    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn usn(&self) -> &str {
        &self.usn
    }

    fn experience_level(&self) -> &str {
        &self.experience_level
    }
}

impl CsvRecord for Application {
    fn csv_fields(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.usn.clone(),
            self.branch_semester.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.skillset.join(MULTI_VALUE_SEPARATOR),
            self.experience_level.clone(),
            self.has_projects.to_string(),
            optional_cell(self.portfolio_link.as_deref()),
            self.weekly_hours.clone(),
            self.communication_platform.clone(),
            optional_cell(self.gaming_preferences.as_deref()),
            self.join_reason.clone(),
            self.has_computer.to_string(),
            self.id.to_string(),
            self.created_at.to_rfc3339(),
        ]
    }
}
