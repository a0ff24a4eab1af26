//! Database-level tests for application persistence and admin accounts.

use alterino_core::application::{
    CommunicationPlatform, ExperienceLevel, NewApplication, Skill, WeeklyHours,
};
use alterino_db::models::admin_user::CreateAdminUser;
use alterino_db::models::session::CreateSession;
use alterino_db::repositories::{AdminUserRepo, ApplicationRepo, SessionRepo};
use assert_matches::assert_matches;
use sqlx::PgPool;

fn new_application(full_name: &str, level: ExperienceLevel) -> NewApplication {
    NewApplication {
        full_name: full_name.to_string(),
        usn: "1AB20CS001".to_string(),
        branch_semester: "CSE 4".to_string(),
        email: format!("{}@example.com", full_name.to_lowercase().replace(' ', ".")),
        phone: "9876543210".to_string(),
        skillset: vec![Skill::Programming, Skill::SoundDesign],
        experience_level: level,
        has_projects: true,
        portfolio_link: Some("https://itch.io/me".to_string()),
        weekly_hours: WeeklyHours::TenPlus,
        communication_platform: CommunicationPlatform::WhatsApp,
        gaming_preferences: None,
        join_reason: "I want to make games with friends".to_string(),
        has_computer: true,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_health_check(pool: PgPool) {
    alterino_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_application_stores_choice_strings(pool: PgPool) {
    let input = new_application("Asha Rao", ExperienceLevel::CantSay);
    let stored = ApplicationRepo::create(&pool, &input).await.unwrap();

    assert!(stored.id > 0);
    assert_eq!(stored.full_name, "Asha Rao");
    assert_eq!(stored.skillset, vec!["Programming", "Sound Design"]);
    assert_eq!(stored.experience_level, "Can't Say");
    assert_eq!(stored.weekly_hours, "10+ hours");
    assert_eq!(stored.communication_platform, "WhatsApp");
    assert_eq!(stored.portfolio_link.as_deref(), Some("https://itch.io/me"));
    assert_eq!(stored.gaming_preferences, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_all_is_newest_first(pool: PgPool) {
    let first = new_application("First One", ExperienceLevel::Beginner);
    let first = ApplicationRepo::create(&pool, &first).await.unwrap();
    let second = new_application("Second One", ExperienceLevel::Advanced);
    let second = ApplicationRepo::create(&pool, &second).await.unwrap();

    let all = ApplicationRepo::list_all(&pool).await.unwrap();
    let ids: Vec<i64> = all.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_skillset_violates_check_constraint(pool: PgPool) {
    let mut input = new_application("No Skills", ExperienceLevel::Beginner);
    input.skillset.clear();

    let result = ApplicationRepo::create(&pool, &input).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_email_lookup_is_case_insensitive(pool: PgPool) {
    let created = AdminUserRepo::create(
        &pool,
        &CreateAdminUser {
            email: "Lead@Club.dev".to_string(),
            password_hash: "not-a-real-hash".to_string(),
        },
    )
    .await
    .unwrap();

    let found = AdminUserRepo::find_by_email(&pool, "lead@club.dev")
        .await
        .unwrap()
        .expect("admin should be found");
    assert_eq!(found.id, created.id);
    assert!(found.is_active);
    assert_eq!(found.failed_login_count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_admin_email_is_rejected(pool: PgPool) {
    let input = CreateAdminUser {
        email: "lead@club.dev".to_string(),
        password_hash: "x".to_string(),
    };
    AdminUserRepo::create(&pool, &input).await.unwrap();

    let duplicate = CreateAdminUser {
        email: "LEAD@club.dev".to_string(),
        password_hash: "y".to_string(),
    };
    assert_matches!(
        AdminUserRepo::create(&pool, &duplicate).await,
        Err(sqlx::Error::Database(_))
    );
}

async fn create_admin_with_session(pool: &PgPool, hash: &str) -> (i64, i64) {
    let admin = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            email: "lead@club.dev".to_string(),
            password_hash: "x".to_string(),
        },
    )
    .await
    .unwrap();

    let session = SessionRepo::create(
        pool,
        &CreateSession {
            admin_user_id: admin.id,
            refresh_token_hash: hash.to_string(),
            expires_at: chrono::Utc::now() + chrono::Duration::days(1),
            user_agent: None,
        },
    )
    .await
    .unwrap();

    (admin.id, session.id)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_session_is_consumed_once(pool: PgPool) {
    let (_, session_id) = create_admin_with_session(&pool, "abc123").await;

    let consumed = SessionRepo::consume_by_refresh_token_hash(&pool, "abc123")
        .await
        .unwrap()
        .expect("live session should be consumed");
    assert_eq!(consumed.id, session_id);
    assert!(consumed.is_revoked);

    assert!(SessionRepo::consume_by_refresh_token_hash(&pool, "abc123")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_consumes_yield_one_session(pool: PgPool) {
    create_admin_with_session(&pool, "raced").await;

    let (a, b) = tokio::join!(
        SessionRepo::consume_by_refresh_token_hash(&pool, "raced"),
        SessionRepo::consume_by_refresh_token_hash(&pool, "raced"),
    );

    let winners = [a.unwrap(), b.unwrap()]
        .into_iter()
        .filter(Option::is_some)
        .count();
    assert_eq!(winners, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_revoked_sessions_are_not_consumed_and_cleaned_up(pool: PgPool) {
    let (admin_id, _) = create_admin_with_session(&pool, "abc123").await;

    assert_eq!(SessionRepo::revoke_all_for_admin(&pool, admin_id).await.unwrap(), 1);
    assert_matches!(
        SessionRepo::consume_by_refresh_token_hash(&pool, "abc123").await,
        Ok(None)
    );

    assert_eq!(SessionRepo::cleanup_expired(&pool).await.unwrap(), 1);
}
