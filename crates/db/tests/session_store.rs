//! SQL-level tests for the session repository: hash-addressed lookups,
//! conditional rotation, and one-way revocation.

use chrono::{Duration, Utc};
use folio_db::models::admin_user::CreateAdminUser;
use folio_db::models::session::{CreateSession, RotateRefreshToken};
use folio_db::repositories::{AdminUserRepo, SessionRepo};
use sqlx::PgPool;

/// Seed an account and a session bound to it.
async fn seed_session(pool: &PgPool, session_id: &str) -> folio_db::models::session::AdminSession {
    let account = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            email: format!("{session_id}@example.com"),
            password_hash: "$argon2id$fake".to_string(),
            role: "admin".to_string(),
        },
    )
    .await
    .expect("account creation should succeed");

    let now = Utc::now();
    SessionRepo::create(
        pool,
        &CreateSession {
            admin_user_id: account.id,
            session_id: session_id.to_string(),
            access_token_hash: format!("access-hash-{session_id}"),
            refresh_token_hash: format!("refresh-hash-{session_id}"),
            access_token_expires_at: now + Duration::minutes(15),
            refresh_token_expires_at: now + Duration::days(7),
            ip_address: Some("203.0.113.7".to_string()),
            user_agent: Some("tests/1.0".to_string()),
            device_info: None,
        },
    )
    .await
    .expect("session creation should succeed")
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_find_by_session_id(pool: PgPool) {
    let session = seed_session(&pool, "s-roundtrip").await;

    let found = SessionRepo::find_by_session_id(&pool, "s-roundtrip")
        .await
        .unwrap()
        .expect("session should be found");

    assert_eq!(found.id, session.id);
    assert_eq!(found.admin_user_id, session.admin_user_id);
    assert!(!found.is_revoked);
    assert!(found.revoked_at.is_none());
    assert_eq!(found.ip_address.as_deref(), Some("203.0.113.7"));
    assert!(found.last_used_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hash_lookups_filter_dead_rows(pool: PgPool) {
    seed_session(&pool, "s-filter").await;

    // Live row is addressable by both hashes.
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "refresh-hash-s-filter")
        .await
        .unwrap()
        .is_some());
    assert!(SessionRepo::find_by_access_token_hash(&pool, "access-hash-s-filter")
        .await
        .unwrap()
        .is_some());

    // Revocation removes it from hash-addressed lookups...
    assert!(SessionRepo::revoke(&pool, "s-filter").await.unwrap());
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "refresh-hash-s-filter")
        .await
        .unwrap()
        .is_none());
    assert!(SessionRepo::find_by_access_token_hash(&pool, "access-hash-s-filter")
        .await
        .unwrap()
        .is_none());

    // ...but not from the session-id lookup, which reports state as-is.
    let row = SessionRepo::find_by_session_id(&pool, "s-filter")
        .await
        .unwrap()
        .expect("revoked row should still be addressable by id");
    assert!(row.is_revoked);
    assert!(row.revoked_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn expired_stored_refresh_is_not_found(pool: PgPool) {
    seed_session(&pool, "s-expired").await;

    // Push the stored refresh expiry into the past.
    sqlx::query(
        "UPDATE admin_sessions SET refresh_token_expires_at = NOW() - INTERVAL '1 minute'
         WHERE session_id = $1",
    )
    .bind("s-expired")
    .execute(&pool)
    .await
    .unwrap();

    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "refresh-hash-s-expired")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rotation_is_conditional_on_current_hash(pool: PgPool) {
    seed_session(&pool, "s-rotate").await;

    let input = RotateRefreshToken {
        refresh_token_hash: "rotated-hash".to_string(),
        refresh_token_expires_at: Utc::now() + Duration::days(7),
    };

    // First rotation wins.
    let rotated =
        SessionRepo::rotate_refresh_token(&pool, "s-rotate", "refresh-hash-s-rotate", &input)
            .await
            .unwrap();
    assert!(rotated);

    // A second attempt holding the stale hash loses the compare-and-swap.
    let raced =
        SessionRepo::rotate_refresh_token(&pool, "s-rotate", "refresh-hash-s-rotate", &input)
            .await
            .unwrap();
    assert!(!raced, "stale hash must not rotate");

    // Rotation replaced refresh material but left access material alone.
    let row = SessionRepo::find_by_session_id(&pool, "s-rotate")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.refresh_token_hash, "rotated-hash");
    assert_eq!(row.access_token_hash, "access-hash-s-rotate");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rotation_refuses_revoked_sessions(pool: PgPool) {
    seed_session(&pool, "s-revoked").await;
    assert!(SessionRepo::revoke(&pool, "s-revoked").await.unwrap());

    let rotated = SessionRepo::rotate_refresh_token(
        &pool,
        "s-revoked",
        "refresh-hash-s-revoked",
        &RotateRefreshToken {
            refresh_token_hash: "should-not-land".to_string(),
            refresh_token_expires_at: Utc::now() + Duration::days(7),
        },
    )
    .await
    .unwrap();

    assert!(!rotated);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn revoke_is_one_way_and_idempotent(pool: PgPool) {
    seed_session(&pool, "s-once").await;

    assert!(SessionRepo::revoke(&pool, "s-once").await.unwrap());
    // Second revoke matches no live row.
    assert!(!SessionRepo::revoke(&pool, "s-once").await.unwrap());
    // Revoking a nonexistent session is a no-op, not an error.
    assert!(!SessionRepo::revoke(&pool, "s-never-existed").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn touch_last_used_updates_timestamp(pool: PgPool) {
    let session = seed_session(&pool, "s-touch").await;

    sqlx::query("UPDATE admin_sessions SET last_used_at = NULL WHERE session_id = $1")
        .bind("s-touch")
        .execute(&pool)
        .await
        .unwrap();

    SessionRepo::touch_last_used(&pool, "s-touch").await.unwrap();

    let row = SessionRepo::find_by_session_id(&pool, "s-touch")
        .await
        .unwrap()
        .unwrap();
    assert!(row.last_used_at.is_some());
    assert!(row.updated_at >= session.updated_at);
}
