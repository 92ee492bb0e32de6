//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when an account or user does not exist, or is not
//!   visible to the requesting user.
//! - [`InvalidAmount`] thrown when an amount is not strictly positive.
//! - [`InsufficientFunds`] thrown when a debit would leave a negative balance.
//! - [`CurrencyMismatch`] thrown when a transfer crosses currencies.
//!
//! The `Display` output of the validation errors is the exact message returned
//! to API clients.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InsufficientFunds`]: EngineError::InsufficientFunds
//!  [`CurrencyMismatch`]: EngineError::CurrencyMismatch
use sea_orm::DbErr;
use thiserror::Error;

use crate::Currency;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" not found!")]
    KeyNotFound(String),
    #[error("{0} already exists")]
    ExistingKey(String),
    #[error("Amount should be more than 0")]
    InvalidAmount,
    #[error("Cannot withdraw {amount} {currency}")]
    InsufficientFunds { amount: i64, currency: Currency },
    #[error("Account currencies should be same")]
    CurrencyMismatch,
    #[error("{0}")]
    InvalidInput(String),
    #[error("credential error: {0}")]
    Credentials(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidAmount, Self::InvalidAmount) => true,
            (
                Self::InsufficientFunds {
                    amount: a,
                    currency: ca,
                },
                Self::InsufficientFunds {
                    amount: b,
                    currency: cb,
                },
            ) => a == b && ca == cb,
            (Self::CurrencyMismatch, Self::CurrencyMismatch) => true,
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::Credentials(a), Self::Credentials(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
