use sea_orm::{DatabaseTransaction, QueryFilter, TransactionTrait, prelude::*};

use crate::{Account, EngineError, ResultEngine, accounts};

use super::{Engine, with_tx};

impl Engine {
    /// Return an account owned by `user_id`.
    ///
    /// An account that exists but belongs to somebody else is reported exactly
    /// like a missing one, so the caller cannot probe foreign ids.
    pub async fn account(&self, account_id: i64, user_id: i64) -> ResultEngine<Account> {
        with_tx!(self, |db_tx| {
            let model = self.require_account(&db_tx, account_id, user_id).await?;
            Account::try_from(model)
        })
    }

    async fn find_owned_account(
        &self,
        db: &DatabaseTransaction,
        account_id: i64,
        user_id: i64,
    ) -> ResultEngine<Option<accounts::Model>> {
        accounts::Entity::find_by_id(account_id)
            .filter(accounts::Column::UserId.eq(user_id))
            .one(db)
            .await
            .map_err(Into::into)
    }

    pub(super) async fn require_account(
        &self,
        db: &DatabaseTransaction,
        account_id: i64,
        user_id: i64,
    ) -> ResultEngine<accounts::Model> {
        self.find_owned_account(db, account_id, user_id)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("account not exists".to_string()))
    }
}
