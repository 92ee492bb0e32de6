use engine::{Currency, EngineError, TransferCmd};

mod common;

use common::{account_in, balance, engine_with_db, seed_users, user_with_balance};

#[tokio::test]
async fn transfer_moves_funds_between_users() {
    let (engine, _db) = engine_with_db().await;
    let (alice, from) = user_with_balance(&engine, "alice", Currency::Usd, 100).await;
    let (bob, to) = user_with_balance(&engine, "bob", Currency::Usd, 50).await;

    engine
        .transfer(TransferCmd::new(alice.id, from.id, 10).to(to.id, bob.id))
        .await
        .unwrap();

    assert_eq!(balance(&engine, &from).await, 90);
    assert_eq!(balance(&engine, &to).await, 60);
}

#[tokio::test]
async fn transfer_to_own_account_keeps_balance() {
    let (engine, _db) = engine_with_db().await;
    let (alice, account) = user_with_balance(&engine, "alice", Currency::Eur, 40).await;

    engine
        .transfer(TransferCmd::new(alice.id, account.id, 15).to(account.id, alice.id))
        .await
        .unwrap();

    assert_eq!(balance(&engine, &account).await, 40);
}

#[tokio::test]
async fn wrong_destination_owner_is_not_found() {
    let (engine, _db) = engine_with_db().await;
    let users = seed_users(&engine, 3).await;
    let from = account_in(&users[0], Currency::Usd);
    let to = account_in(&users[1], Currency::Usd);

    let err = engine
        .transfer(TransferCmd::new(users[0].id, from.id, 5).to(to.id, users[2].id))
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::KeyNotFound(_)));
    assert_eq!(balance(&engine, from).await, from.amount);
    assert_eq!(balance(&engine, to).await, to.amount);
}

#[tokio::test]
async fn source_owned_by_someone_else_is_not_found() {
    let (engine, _db) = engine_with_db().await;
    let users = seed_users(&engine, 2).await;
    let from = account_in(&users[1], Currency::Eur);
    let to = account_in(&users[0], Currency::Eur);

    let err = engine
        .transfer(TransferCmd::new(users[0].id, from.id, 5).to(to.id, users[0].id))
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::KeyNotFound(_)));
    assert_eq!(balance(&engine, from).await, from.amount);
}

#[tokio::test]
async fn missing_destination_is_not_found() {
    let (engine, _db) = engine_with_db().await;
    let users = seed_users(&engine, 2).await;
    let from = account_in(&users[0], Currency::Rub);

    let err = engine
        .transfer(TransferCmd::new(users[0].id, from.id, 5).to(9_999, users[1].id))
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn not_found_is_reported_before_invalid_amount() {
    let (engine, _db) = engine_with_db().await;
    let users = seed_users(&engine, 2).await;
    let from = account_in(&users[0], Currency::Usd);

    let err = engine
        .transfer(TransferCmd::new(users[0].id, from.id, -5).to(9_999, users[1].id))
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn non_positive_amount_is_rejected() {
    let (engine, _db) = engine_with_db().await;
    let users = seed_users(&engine, 2).await;
    let from = account_in(&users[0], Currency::Usd);
    let to = account_in(&users[1], Currency::Usd);

    for amount in [0, -10] {
        let err = engine
            .transfer(TransferCmd::new(users[0].id, from.id, amount).to(to.id, users[1].id))
            .await
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidAmount);
    }
    assert_eq!(balance(&engine, from).await, from.amount);
    assert_eq!(balance(&engine, to).await, to.amount);
}

#[tokio::test]
async fn currency_mismatch_is_reported_before_funds() {
    let (engine, _db) = engine_with_db().await;
    let users = seed_users(&engine, 2).await;
    let from = account_in(&users[0], Currency::Usd);
    let to = account_in(&users[1], Currency::Rub);

    let err = engine
        .transfer(TransferCmd::new(users[0].id, from.id, 1_000).to(to.id, users[1].id))
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::CurrencyMismatch);
    assert_eq!(err.to_string(), "Account currencies should be same");
}

#[tokio::test]
async fn insufficient_funds_leaves_both_balances() {
    let (engine, _db) = engine_with_db().await;
    let (alice, from) = user_with_balance(&engine, "alice", Currency::Eur, 20).await;
    let (bob, to) = user_with_balance(&engine, "bob", Currency::Eur, 5).await;

    let err = engine
        .transfer(TransferCmd::new(alice.id, from.id, 21).to(to.id, bob.id))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        EngineError::InsufficientFunds {
            amount: 21,
            currency: Currency::Eur,
        }
    );
    assert_eq!(err.to_string(), "Cannot withdraw 21 EUR");
    assert_eq!(balance(&engine, &from).await, 20);
    assert_eq!(balance(&engine, &to).await, 5);
}

#[tokio::test]
async fn transfer_of_whole_balance_empties_source() {
    let (engine, _db) = engine_with_db().await;
    let (alice, from) = user_with_balance(&engine, "alice", Currency::Rub, 33).await;
    let (bob, to) = user_with_balance(&engine, "bob", Currency::Rub, 0).await;

    engine
        .transfer(TransferCmd::new(alice.id, from.id, 33).to(to.id, bob.id))
        .await
        .unwrap();

    assert_eq!(balance(&engine, &from).await, 0);
    assert_eq!(balance(&engine, &to).await, 33);
}

#[tokio::test]
async fn rejected_credit_rolls_back_the_debit() {
    let (engine, _db) = engine_with_db().await;
    let (alice, from) = user_with_balance(&engine, "alice", Currency::Usd, 100).await;
    let (bob, to) = user_with_balance(&engine, "bob", Currency::Usd, i64::MAX - 5).await;

    let err = engine
        .transfer(TransferCmd::new(alice.id, from.id, 10).to(to.id, bob.id))
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::InvalidInput("balance limit exceeded".to_string()));
    assert_eq!(balance(&engine, &from).await, 100);
    assert_eq!(balance(&engine, &to).await, i64::MAX - 5);
}
