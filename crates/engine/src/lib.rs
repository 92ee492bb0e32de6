//! Banking engine: users, per-currency accounts, deposits, withdrawals and
//! transfers on top of a `sea-orm` database.
//!
//! Every public operation of [`Engine`] runs in its own DB transaction, and
//! every balance change is a conditional increment so balances never go
//! negative, even under concurrent requests.

pub use accounts::Account;
pub use commands::TransferCmd;
pub use credentials::{Argon2Hasher, CredentialHasher};
pub use currency::Currency;
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use users::{User, UserSummary};

mod accounts;
mod commands;
mod credentials;
mod currency;
mod error;
mod ops;
mod users;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
