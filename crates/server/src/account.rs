//! Account API endpoints

use api_types::account::{Account, BalanceChange};
use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
};
use engine::UserSummary;

use crate::{ServerError, body, map_account, server::ServerState};

/// Handle requests for reading one of the caller's accounts
pub async fn get(
    Extension(user): Extension<UserSummary>,
    State(state): State<ServerState>,
    Path(account_id): Path<i64>,
) -> Result<Json<Account>, ServerError> {
    let account = state.engine.account(account_id, user.id).await?;
    Ok(Json(map_account(account)))
}

pub async fn deposit(
    Extension(user): Extension<UserSummary>,
    State(state): State<ServerState>,
    Path(account_id): Path<i64>,
    payload: Result<Json<BalanceChange>, JsonRejection>,
) -> Result<Json<Account>, ServerError> {
    let BalanceChange { amount } = body(payload)?;
    let account = state.engine.deposit(account_id, user.id, amount).await?;
    Ok(Json(map_account(account)))
}

pub async fn withdraw(
    Extension(user): Extension<UserSummary>,
    State(state): State<ServerState>,
    Path(account_id): Path<i64>,
    payload: Result<Json<BalanceChange>, JsonRejection>,
) -> Result<Json<Account>, ServerError> {
    let BalanceChange { amount } = body(payload)?;
    let account = state.engine.withdraw(account_id, user.id, amount).await?;
    Ok(Json(map_account(account)))
}
