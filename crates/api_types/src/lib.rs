//! JSON request and response bodies of the banking HTTP API.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Rub,
}

pub mod account {
    use super::*;

    /// An account as returned by `GET /account/{id}`, deposits and withdrawals.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Account {
        pub id: i64,
        /// Balance in the smallest unit of `currency`.
        pub amount: i64,
        pub currency: Currency,
    }

    /// Body of `POST /account/deposit/{id}` and `POST /account/withdraw/{id}`.
    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct BalanceChange {
        pub amount: i64,
    }
}

pub mod transfer {
    use super::*;

    /// Body of `POST /transfer`.
    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransferNew {
        pub from_account_id: i64,
        pub to_account_id: i64,
        /// Expected owner of `to_account_id`.
        pub to_user_id: i64,
        pub amount: i64,
    }
}

pub mod user {
    use super::*;
    use crate::account::Account;

    /// Body of `POST /user/`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserNew {
        pub username: String,
        pub password: String,
    }

    /// A user with its accounts (`GET /user/me`, `POST /user/`).
    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct User {
        pub id: i64,
        pub username: String,
        pub accounts: Vec<Account>,
    }

    /// One entry of `GET /user/list`.
    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UserListItem {
        pub id: i64,
        pub username: String,
    }
}
