//! Application record choices, submission validation, and normalization.
//!
//! A submission arrives as loosely-typed strings (what a browser form posts).
//! [`validate_submission`] checks every field constraint at once and, only if
//! all of them hold, converts the input into a typed [`NewApplication`] ready
//! for a single insert.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{CoreError, FieldViolation};

// ---------------------------------------------------------------------------
// Enumerated choices
// ---------------------------------------------------------------------------

/// A closed set of values offered by one of the form's pickers.
///
/// The string form (`as_str`) is what the form posts, what the database
/// stores, and what the dashboard filters on.
pub trait FormChoice: Copy + Sized + 'static {
    /// Field label used at the start of validation messages.
    const LABEL: &'static str;
    /// Every choice, in the order the form presents them.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Exact (case-sensitive) match against the choice strings.
    fn parse_choice(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    fn one_of_message() -> String {
        let choices: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
        format!("{} must be one of: {}", Self::LABEL, choices.join(", "))
    }
}

macro_rules! form_choice {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl FormChoice for $name {
            const LABEL: &'static str = $label;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_choice(s).ok_or_else(|| CoreError::Validation(Self::one_of_message()))
            }
        }
    };
}

form_choice! {
    /// Areas of interest an applicant can tick (multi-select).
    Skill("Skill") {
        Programming => "Programming",
        ArtDesign => "Art/Design",
        GameWriting => "Game Writing",
        SoundDesign => "Sound Design",
        Testing => "Testing",
        CantSay => "Can't Say",
    }
}

form_choice! {
    /// Self-reported experience; also the dashboard's only categorical filter.
    ExperienceLevel("Experience level") {
        Beginner => "Beginner",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
        CantSay => "Can't Say",
    }
}

form_choice! {
    WeeklyHours("Weekly hours") {
        UnderFive => "<5 hours",
        FiveToTen => "5-10 hours",
        TenPlus => "10+ hours",
    }
}

form_choice! {
    CommunicationPlatform("Communication platform") {
        WhatsApp => "WhatsApp",
        Discord => "Discord",
        Email => "Email",
    }
}

// ---------------------------------------------------------------------------
// Submission input
// ---------------------------------------------------------------------------

/// Raw submission body for `POST /applications`.
///
/// Every field defaults when absent so that a missing field is reported as
/// a field violation rather than a JSON parse failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ApplicationSubmission {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub full_name: String,

    #[validate(length(min = 1, message = "USN is required"))]
    pub usn: String,

    #[validate(length(min = 1, message = "Branch and semester are required"))]
    pub branch_semester: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone: String,

    #[validate(
        length(min = 1, message = "Select at least one skill"),
        custom(function = "validate_skills")
    )]
    pub skillset: Vec<String>,

    #[validate(custom(function = "validate_experience_level"))]
    pub experience_level: String,

    pub has_projects: bool,

    pub portfolio_link: Option<String>,

    #[validate(custom(function = "validate_weekly_hours"))]
    pub weekly_hours: String,

    #[validate(custom(function = "validate_communication_platform"))]
    pub communication_platform: String,

    pub gaming_preferences: Option<String>,

    #[validate(length(min = 10, message = "Please provide a reason"))]
    pub join_reason: String,

    pub has_computer: bool,
}

fn choice_error(message: String) -> ValidationError {
    ValidationError::new("choice").with_message(Cow::Owned(message))
}

fn validate_choice<T: FormChoice>(value: &str) -> Result<(), ValidationError> {
    match T::parse_choice(value) {
        Some(_) => Ok(()),
        None => Err(choice_error(T::one_of_message())),
    }
}

fn validate_skills(skills: &[String]) -> Result<(), ValidationError> {
    match skills.iter().find(|s| Skill::parse_choice(s).is_none()) {
        Some(unknown) => Err(choice_error(format!(
            "Unknown skill '{unknown}'. {}",
            Skill::one_of_message()
        ))),
        None => Ok(()),
    }
}

fn validate_experience_level(value: &str) -> Result<(), ValidationError> {
    validate_choice::<ExperienceLevel>(value)
}

fn validate_weekly_hours(value: &str) -> Result<(), ValidationError> {
    validate_choice::<WeeklyHours>(value)
}

fn validate_communication_platform(value: &str) -> Result<(), ValidationError> {
    validate_choice::<CommunicationPlatform>(value)
}

// ---------------------------------------------------------------------------
// Normalized record
// ---------------------------------------------------------------------------

/// A fully validated application, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewApplication {
    pub full_name: String,
    pub usn: String,
    pub branch_semester: String,
    pub email: String,
    pub phone: String,
    pub skillset: Vec<Skill>,
    pub experience_level: ExperienceLevel,
    pub has_projects: bool,
    pub portfolio_link: Option<String>,
    pub weekly_hours: WeeklyHours,
    pub communication_platform: CommunicationPlatform,
    pub gaming_preferences: Option<String>,
    pub join_reason: String,
    pub has_computer: bool,
}

impl NewApplication {
    /// Skill tags as stored in the `TEXT[]` column.
    pub fn skillset_strings(&self) -> Vec<String> {
        self.skillset.iter().map(|s| s.as_str().to_string()).collect()
    }
}

/// Validate a submission and normalize it.
///
/// Either every constraint holds and a [`NewApplication`] is returned, or
/// [`CoreError::InvalidFields`] lists one violation per offending field,
/// ordered by field name.
///
/// Normalization collapses duplicate skills (first occurrence wins), turns
/// blank optional texts into `None`, and drops `portfolio_link` unless
/// `has_projects` is set.
pub fn validate_submission(input: ApplicationSubmission) -> Result<NewApplication, CoreError> {
    if let Err(errors) = input.validate() {
        return Err(CoreError::InvalidFields(collect_violations(&errors)));
    }

    let mut skillset = Vec::with_capacity(input.skillset.len());
    for raw in &input.skillset {
        let skill: Skill = raw.parse()?;
        if !skillset.contains(&skill) {
            skillset.push(skill);
        }
    }

    let portfolio_link = if input.has_projects {
        non_blank(input.portfolio_link)
    } else {
        None
    };

    Ok(NewApplication {
        experience_level: input.experience_level.parse()?,
        weekly_hours: input.weekly_hours.parse()?,
        communication_platform: input.communication_platform.parse()?,
        full_name: input.full_name,
        usn: input.usn,
        branch_semester: input.branch_semester,
        email: input.email,
        phone: input.phone,
        skillset,
        has_projects: input.has_projects,
        portfolio_link,
        gaming_preferences: non_blank(input.gaming_preferences),
        join_reason: input.join_reason,
        has_computer: input.has_computer,
    })
}

/// Flatten `validator` output into one message per field, sorted by field.
fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                FieldViolation::new(field.to_string(), message)
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn valid_submission() -> ApplicationSubmission {
        ApplicationSubmission {
            full_name: "Asha Rao".into(),
            usn: "1AB20CS001".into(),
            branch_semester: "CSE 4th".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            skillset: vec!["Programming".into(), "Art/Design".into()],
            experience_level: "Beginner".into(),
            has_projects: true,
            portfolio_link: Some("https://itch.io/asha".into()),
            weekly_hours: "5-10 hours".into(),
            communication_platform: "Discord".into(),
            gaming_preferences: Some("Metroidvanias".into()),
            join_reason: "I want to ship a game jam entry.".into(),
            has_computer: true,
        }
    }

    fn violations(input: ApplicationSubmission) -> Vec<FieldViolation> {
        match validate_submission(input) {
            Err(CoreError::InvalidFields(v)) => v,
            other => panic!("expected InvalidFields, got {other:?}"),
        }
    }

    fn single_violation(input: ApplicationSubmission) -> FieldViolation {
        let mut v = violations(input);
        assert_eq!(v.len(), 1, "expected exactly one violation, got {v:?}");
        v.remove(0)
    }

    #[test]
    fn valid_submission_is_accepted() {
        let app = validate_submission(valid_submission()).expect("should validate");
        assert_eq!(app.full_name, "Asha Rao");
        assert_eq!(app.skillset, vec![Skill::Programming, Skill::ArtDesign]);
        assert_eq!(app.experience_level, ExperienceLevel::Beginner);
        assert_eq!(app.weekly_hours, WeeklyHours::FiveToTen);
        assert_eq!(app.communication_platform, CommunicationPlatform::Discord);
        assert_eq!(app.portfolio_link.as_deref(), Some("https://itch.io/asha"));
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        let mut input = valid_submission();
        input.full_name = "Al".into();
        input.usn = "1".into();
        input.branch_semester = "E".into();
        input.phone = "0123456789".into();
        input.join_reason = "0123456789".into();
        assert!(validate_submission(input).is_ok());
    }

    #[test]
    fn short_name_is_rejected() {
        let mut input = valid_submission();
        input.full_name = "A".into();
        let v = single_violation(input);
        assert_eq!(v.field, "full_name");
        assert_eq!(v.message, "Name must be at least 2 characters");
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut input = valid_submission();
        // One character, two bytes.
        input.full_name = "é".into();
        assert_eq!(single_violation(input).field, "full_name");
    }

    #[test]
    fn empty_usn_and_branch_are_rejected() {
        let mut input = valid_submission();
        input.usn = String::new();
        input.branch_semester = String::new();
        let v = violations(input);
        assert_eq!(
            v,
            vec![
                FieldViolation::new("branch_semester", "Branch and semester are required"),
                FieldViolation::new("usn", "USN is required"),
            ]
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut input = valid_submission();
        input.email = "not-an-email".into();
        let v = single_violation(input);
        assert_eq!(v.field, "email");
        assert_eq!(v.message, "Invalid email");
    }

    #[test]
    fn short_phone_is_rejected() {
        let mut input = valid_submission();
        input.phone = "12345".into();
        let v = single_violation(input);
        assert_eq!(v.field, "phone");
        assert_eq!(v.message, "Phone number must be at least 10 digits");
    }

    #[test]
    fn empty_skillset_is_rejected() {
        let mut input = valid_submission();
        input.skillset = vec![];
        let v = single_violation(input);
        assert_eq!(v.field, "skillset");
        assert_eq!(v.message, "Select at least one skill");
    }

    #[test]
    fn unknown_skill_is_rejected() {
        let mut input = valid_submission();
        input.skillset = vec!["Programming".into(), "Juggling".into()];
        let v = single_violation(input);
        assert_eq!(v.field, "skillset");
        assert!(v.message.starts_with("Unknown skill 'Juggling'"), "{}", v.message);
    }

    #[test]
    fn unknown_choices_are_rejected_with_allowed_values() {
        let mut input = valid_submission();
        input.experience_level = "Expert".into();
        input.weekly_hours = "40 hours".into();
        input.communication_platform = "Telegram".into();
        let v = violations(input);
        let fields: Vec<&str> = v.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["communication_platform", "experience_level", "weekly_hours"]
        );
        assert_eq!(
            v[1].message,
            "Experience level must be one of: Beginner, Intermediate, Advanced, Can't Say"
        );
    }

    #[test]
    fn choices_are_case_sensitive() {
        let mut input = valid_submission();
        input.experience_level = "beginner".into();
        assert_eq!(single_violation(input).field, "experience_level");
    }

    #[test]
    fn short_join_reason_is_rejected() {
        let mut input = valid_submission();
        input.join_reason = "fun".into();
        let v = single_violation(input);
        assert_eq!(v.field, "join_reason");
        assert_eq!(v.message, "Please provide a reason");
    }

    #[test]
    fn missing_fields_deserialize_and_fail_validation() {
        let input: ApplicationSubmission =
            serde_json::from_str(r#"{"full_name": "Asha Rao"}"#).expect("should deserialize");
        assert!(!input.has_projects);
        assert!(!input.has_computer);
        let v = violations(input);
        assert!(v.iter().any(|f| f.field == "skillset"));
        assert!(v.iter().all(|f| f.field != "full_name"));
    }

    #[test]
    fn portfolio_link_is_dropped_without_projects() {
        let mut input = valid_submission();
        input.has_projects = false;
        let app = validate_submission(input).expect("should validate");
        assert_eq!(app.portfolio_link, None);
    }

    #[test]
    fn blank_optionals_become_none() {
        let mut input = valid_submission();
        input.portfolio_link = Some("   ".into());
        input.gaming_preferences = Some(String::new());
        let app = validate_submission(input).expect("should validate");
        assert_eq!(app.portfolio_link, None);
        assert_eq!(app.gaming_preferences, None);
    }

    #[test]
    fn duplicate_skills_are_collapsed_in_order() {
        let mut input = valid_submission();
        input.skillset = vec![
            "Testing".into(),
            "Programming".into(),
            "Testing".into(),
        ];
        let app = validate_submission(input).expect("should validate");
        assert_eq!(app.skillset, vec![Skill::Testing, Skill::Programming]);
        assert_eq!(app.skillset_strings(), vec!["Testing", "Programming"]);
    }

    #[test]
    fn choice_strings_round_trip_through_serde() {
        let json = serde_json::to_string(&ExperienceLevel::CantSay).unwrap();
        assert_eq!(json, "\"Can't Say\"");
        let hours: WeeklyHours = serde_json::from_str("\"<5 hours\"").unwrap();
        assert_eq!(hours, WeeklyHours::UnderFive);
    }

    #[test]
    fn from_str_rejects_unknown_choice() {
        assert_matches!("Slack".parse::<CommunicationPlatform>(), Err(CoreError::Validation(_)));
        assert_eq!("Email".parse::<CommunicationPlatform>().unwrap(), CommunicationPlatform::Email);
    }
}
