//! Transfer API endpoint

use api_types::transfer::TransferNew;
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::{TransferCmd, UserSummary};

use crate::{ServerError, body, server::ServerState};

pub async fn transfer(
    Extension(user): Extension<UserSummary>,
    State(state): State<ServerState>,
    payload: Result<Json<TransferNew>, JsonRejection>,
) -> Result<StatusCode, ServerError> {
    let payload = body(payload)?;
    state
        .engine
        .transfer(
            TransferCmd::new(user.id, payload.from_account_id, payload.amount)
                .to(payload.to_account_id, payload.to_user_id),
        )
        .await?;

    Ok(StatusCode::OK)
}
