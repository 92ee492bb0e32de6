//! The module contains the `User` views and the `users` entity.
//!
//! The `password` column holds a PHC string produced by the configured
//! [`CredentialHasher`](crate::CredentialHasher), never the plaintext.

use sea_orm::entity::prelude::*;

use crate::Account;

/// A user together with its accounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub accounts: Vec<Account>,
}

/// Identity of a user without its accounts.
///
/// This is what authentication yields and what user listings return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
}

impl From<Model> for UserSummary {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            username: value.username,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::accounts::Entity")]
    Accounts,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
