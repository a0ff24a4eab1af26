//! Dashboard search and experience filter.
//!
//! The dashboard fetches every stored application once and narrows the list
//! in memory: a case-insensitive substring search over name, email and USN,
//! AND-ed with an optional experience-level selector.

use std::str::FromStr;

use crate::application::{ExperienceLevel, FormChoice};
use crate::error::CoreError;

/// Selector value that disables the experience filter.
pub const EXPERIENCE_ALL: &str = "all";

/// The fields of an application the dashboard filter looks at.
pub trait ApplicantRecord {
    fn full_name(&self) -> &str;
    fn email(&self) -> &str;
    fn usn(&self) -> &str;
    fn experience_level(&self) -> &str;
}

/// The dashboard's categorical selector over `experience_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceFilter {
    #[default]
    All,
    Level(ExperienceLevel),
}

impl ExperienceFilter {
    fn accepts(self, level: &str) -> bool {
        match self {
            ExperienceFilter::All => true,
            ExperienceFilter::Level(expected) => expected.as_str() == level,
        }
    }
}

impl FromStr for ExperienceFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == EXPERIENCE_ALL {
            return Ok(ExperienceFilter::All);
        }
        ExperienceLevel::parse_choice(s)
            .map(ExperienceFilter::Level)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown experience filter '{s}'. Use '{EXPERIENCE_ALL}' or one of the experience levels"
                ))
            })
    }
}

/// Search text plus experience selector, as chosen on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    /// Lowercased once at construction.
    search: String,
    experience: ExperienceFilter,
}

impl ApplicationFilter {
    pub fn new(search: &str, experience: ExperienceFilter) -> Self {
        Self {
            search: search.to_lowercase(),
            experience,
        }
    }

    /// Build a filter from optional query-string values.
    ///
    /// A missing `search` means no text filter; a missing `experience` means
    /// [`EXPERIENCE_ALL`]. An unrecognised experience value is an error.
    pub fn from_params(search: Option<&str>, experience: Option<&str>) -> Result<Self, CoreError> {
        let experience = match experience {
            Some(raw) => raw.parse()?,
            None => ExperienceFilter::All,
        };
        Ok(Self::new(search.unwrap_or_default(), experience))
    }

    /// `true` when both the text match and the experience match hold.
    pub fn matches<R: ApplicantRecord>(&self, record: &R) -> bool {
        self.matches_text(record) && self.experience.accepts(record.experience_level())
    }

    fn matches_text<R: ApplicantRecord>(&self, record: &R) -> bool {
        if self.search.is_empty() {
            return true;
        }
        [record.full_name(), record.email(), record.usn()]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.search))
    }

    /// Keep the matching records, preserving their order.
    pub fn apply<R: ApplicantRecord>(&self, records: Vec<R>) -> Vec<R> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}
