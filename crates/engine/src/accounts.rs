//! The module contains `Account` struct and the `accounts` entity.

use sea_orm::entity::{ActiveValue, prelude::*};

use crate::{Currency, EngineError, ResultEngine, util::model_currency};

/// An account.
///
/// Each user owns one account per [`Currency`]. The balance (`amount`) is an
/// integer count of the smallest unit of the currency and never drops below
/// zero through engine operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub user_id: i64,
    pub currency: Currency,
    pub amount: i64,
}

impl Account {
    /// Balance left after applying `delta`, or the error a debit of that size
    /// produces.
    pub(crate) fn balance_after(&self, delta: i64) -> ResultEngine<i64> {
        match self.amount.checked_add(delta) {
            Some(balance) if balance >= 0 => Ok(balance),
            None if delta > 0 => Err(EngineError::InvalidInput(
                "balance limit exceeded".to_string(),
            )),
            _ => Err(EngineError::InsufficientFunds {
                amount: delta.saturating_abs(),
                currency: self.currency,
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub currency: String,
    pub amount: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Account {
    type Error = EngineError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            currency: model_currency(&value.currency)?,
            amount: value.amount,
        })
    }
}

/// Build the row inserted when a user signs up: zero balance, id assigned by
/// the database.
pub(crate) fn opening_row(user_id: i64, currency: Currency) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        currency: ActiveValue::Set(currency.code().to_string()),
        amount: ActiveValue::Set(0),
    }
}
