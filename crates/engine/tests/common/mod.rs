#![allow(dead_code)]

use std::sync::Arc;

use engine::{Account, Argon2Hasher, Currency, Engine, User};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

pub async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .credential_hasher(Arc::new(Argon2Hasher::with_params(8, 1, 1).unwrap()))
        .build()
        .await
        .unwrap();
    (engine, db)
}

/// Create `User_1..=count` (password `Password_n`) and fund every account
/// with `10 * n + currency ordinal`.
pub async fn seed_users(engine: &Engine, count: i64) -> Vec<User> {
    let mut users = Vec::new();
    for n in 1..=count {
        let mut user = engine
            .create_user(&format!("User_{n}"), &format!("Password_{n}"))
            .await
            .unwrap();
        for account in &mut user.accounts {
            *account = engine
                .deposit(account.id, user.id, 10 * n + account.currency.ordinal())
                .await
                .unwrap();
        }
        users.push(user);
    }
    users
}

/// Create a user whose `currency` account holds exactly `amount`.
pub async fn user_with_balance(
    engine: &Engine,
    username: &str,
    currency: Currency,
    amount: i64,
) -> (User, Account) {
    let user = engine.create_user(username, "password").await.unwrap();
    let account = account_in(&user, currency).clone();
    let account = if amount > 0 {
        engine.deposit(account.id, user.id, amount).await.unwrap()
    } else {
        account
    };
    (user, account)
}

pub fn account_in(user: &User, currency: Currency) -> &Account {
    user.accounts
        .iter()
        .find(|account| account.currency == currency)
        .expect("every user owns one account per currency")
}

pub async fn balance(engine: &Engine, account: &Account) -> i64 {
    engine
        .account(account.id, account.user_id)
        .await
        .unwrap()
        .amount
}
