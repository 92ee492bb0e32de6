//! User API endpoints

use api_types::user::{User, UserListItem, UserNew};
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};
use engine::UserSummary;

use crate::{ServerError, body, map_account, server::ServerState};

fn map_user(user: engine::User) -> User {
    User {
        id: user.id,
        username: user.username,
        accounts: user.accounts.into_iter().map(map_account).collect(),
    }
}

/// Sign up a new user (admin only).
pub async fn user_new(
    State(state): State<ServerState>,
    payload: Result<Json<UserNew>, JsonRejection>,
) -> Result<Json<User>, ServerError> {
    let UserNew { username, password } = body(payload)?;
    let user = state.engine.create_user(&username, &password).await?;
    Ok(Json(map_user(user)))
}

/// Profile of the authenticated user, accounts included.
pub async fn me(
    Extension(user): Extension<UserSummary>,
    State(state): State<ServerState>,
) -> Result<Json<User>, ServerError> {
    let user = state.engine.user(user.id).await?;
    Ok(Json(map_user(user)))
}

pub async fn list(
    _: Extension<UserSummary>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<UserListItem>>, ServerError> {
    let users = state
        .engine
        .list_users()
        .await?
        .into_iter()
        .map(|user| UserListItem {
            id: user.id,
            username: user.username,
        })
        .collect();
    Ok(Json(users))
}
