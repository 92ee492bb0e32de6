use engine::{Currency, EngineError, UserSummary};
use sea_orm::{ConnectionTrait, DbBackend, Statement};

mod common;

use common::{engine_with_db, seed_users};

#[tokio::test]
async fn create_user_opens_one_empty_account_per_currency() {
    let (engine, _db) = engine_with_db().await;

    let user = engine.create_user("alice", "secret").await.unwrap();

    assert_eq!(user.username, "alice");
    let currencies: Vec<Currency> = user.accounts.iter().map(|a| a.currency).collect();
    assert_eq!(currencies, Currency::ALL.to_vec());
    assert!(user.accounts.iter().all(|a| a.amount == 0 && a.user_id == user.id));
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let (engine, _db) = engine_with_db().await;
    engine.create_user("alice", "secret").await.unwrap();

    let err = engine.create_user(" alice ", "other").await.unwrap_err();

    assert_eq!(err, EngineError::ExistingKey("User".to_string()));
    assert_eq!(err.to_string(), "User already exists");
    assert_eq!(engine.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn blank_credentials_are_rejected() {
    let (engine, _db) = engine_with_db().await;

    let blank_name = engine.create_user("   ", "secret").await.unwrap_err();
    let blank_password = engine.create_user("alice", "").await.unwrap_err();

    assert!(matches!(blank_name, EngineError::InvalidInput(_)));
    assert!(matches!(blank_password, EngineError::InvalidInput(_)));
    assert!(engine.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn username_is_trimmed() {
    let (engine, _db) = engine_with_db().await;

    let user = engine.create_user("  bob\t", "secret").await.unwrap();

    assert_eq!(user.username, "bob");
    assert!(engine.authenticate("bob", "secret").await.unwrap().is_some());
}

#[tokio::test]
async fn authenticate_checks_password() {
    let (engine, _db) = engine_with_db().await;
    let user = engine.create_user("alice", "secret").await.unwrap();

    let ok = engine.authenticate("alice", "secret").await.unwrap();
    let wrong = engine.authenticate("alice", "Secret").await.unwrap();
    let unknown = engine.authenticate("mallory", "secret").await.unwrap();

    assert_eq!(
        ok,
        Some(UserSummary {
            id: user.id,
            username: "alice".to_string(),
        })
    );
    assert_eq!(wrong, None);
    assert_eq!(unknown, None);
}

#[tokio::test]
async fn password_is_stored_hashed() {
    let (engine, db) = engine_with_db().await;
    engine.create_user("alice", "secret").await.unwrap();

    let row = db
        .query_one(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT password FROM users WHERE username = 'alice'",
        ))
        .await
        .unwrap()
        .unwrap();
    let stored: String = row.try_get("", "password").unwrap();

    assert_ne!(stored, "secret");
    assert!(stored.starts_with("$argon2id$"));
}

#[tokio::test]
async fn user_returns_accounts_with_balances() {
    let (engine, _db) = engine_with_db().await;
    let users = seed_users(&engine, 2).await;

    let user = engine.user(users[1].id).await.unwrap();

    assert_eq!(user, users[1]);
    let amounts: Vec<i64> = user.accounts.iter().map(|a| a.amount).collect();
    assert_eq!(amounts, vec![20, 21, 22]);
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let (engine, _db) = engine_with_db().await;

    let err = engine.user(42).await.unwrap_err();

    assert_eq!(err, EngineError::KeyNotFound("user not exists".to_string()));
}

#[tokio::test]
async fn list_users_is_ordered_by_id() {
    let (engine, _db) = engine_with_db().await;
    let users = seed_users(&engine, 3).await;

    let listed = engine.list_users().await.unwrap();

    let names: Vec<&str> = listed.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["User_1", "User_2", "User_3"]);
    assert_eq!(listed[0].id, users[0].id);
}
