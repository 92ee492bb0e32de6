use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use engine::EngineError;

pub use server::{ServerState, router, run_with_listener};

mod account;
mod server;
mod transfer;
mod user;

pub mod types {
    pub mod account {
        pub use api_types::account::{Account, BalanceChange};
    }

    pub mod transfer {
        pub use api_types::transfer::TransferNew;
    }

    pub mod user {
        pub use api_types::user::{User, UserListItem, UserNew};
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Database(_) | EngineError::Credentials(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        EngineError::InvalidAmount
        | EngineError::InsufficientFunds { .. }
        | EngineError::CurrencyMismatch
        | EngineError::ExistingKey(_)
        | EngineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::Credentials(msg) => {
            tracing::error!("credential error: {msg}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Engine(err) => {
                let status = status_for_engine_error(&err);
                // Missing or foreign resources answer with a bare 404.
                if status == StatusCode::NOT_FOUND {
                    return status.into_response();
                }
                (status, message_for_engine_error(err)).into_response()
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err).into_response(),
        }
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Generic(value.body_text())
    }
}

/// Unwrap a JSON body, turning any rejection into a plain-text 400.
pub(crate) fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ServerError> {
    let Json(value) = payload?;
    Ok(value)
}

pub(crate) fn map_currency(currency: engine::Currency) -> api_types::Currency {
    match currency {
        engine::Currency::Usd => api_types::Currency::Usd,
        engine::Currency::Eur => api_types::Currency::Eur,
        engine::Currency::Rub => api_types::Currency::Rub,
    }
}

pub(crate) fn map_account(account: engine::Account) -> api_types::account::Account {
    api_types::account::Account {
        id: account.id,
        amount: account.amount,
        currency: map_currency(account.currency),
    }
}
