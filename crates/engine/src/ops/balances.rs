use sea_orm::{DatabaseTransaction, QueryFilter, TransactionTrait, prelude::*, sea_query::Expr};

use crate::{Account, EngineError, ResultEngine, accounts, util::ensure_positive_amount};

use super::{Engine, with_tx};

impl Engine {
    /// Add `amount` to an account of `user_id` and return the updated account.
    pub async fn deposit(
        &self,
        account_id: i64,
        user_id: i64,
        amount: i64,
    ) -> ResultEngine<Account> {
        ensure_positive_amount(amount)?;
        let account = with_tx!(self, |db_tx| {
            self.apply_delta(&db_tx, account_id, user_id, amount).await
        })?;
        tracing::info!(
            account_id,
            user_id,
            amount,
            balance = account.amount,
            "deposit"
        );
        Ok(account)
    }

    /// Remove `amount` from an account of `user_id` and return the updated
    /// account. Fails without touching the balance when it cannot cover the
    /// whole amount.
    pub async fn withdraw(
        &self,
        account_id: i64,
        user_id: i64,
        amount: i64,
    ) -> ResultEngine<Account> {
        ensure_positive_amount(amount)?;
        let account = with_tx!(self, |db_tx| {
            self.apply_delta(&db_tx, account_id, user_id, -amount).await
        })?;
        tracing::info!(
            account_id,
            user_id,
            amount,
            balance = account.amount,
            "withdraw"
        );
        Ok(account)
    }

    /// Apply `delta` to a single account row as one conditional increment.
    ///
    /// The bound check lives in the `UPDATE` itself, so two debits racing on
    /// the same row can never both pass against a balance that only covers
    /// one of them. The row is always read back afterwards: it is the value
    /// returned on success, and when no row was touched it tells "not found"
    /// apart from "cannot apply".
    pub(super) async fn apply_delta(
        &self,
        db: &DatabaseTransaction,
        account_id: i64,
        user_id: i64,
        delta: i64,
    ) -> ResultEngine<Account> {
        let mut update = accounts::Entity::update_many()
            .col_expr(
                accounts::Column::Amount,
                Expr::col(accounts::Column::Amount).add(delta),
            )
            .filter(accounts::Column::Id.eq(account_id))
            .filter(accounts::Column::UserId.eq(user_id));
        update = if delta < 0 {
            update.filter(accounts::Column::Amount.gte(delta.saturating_neg()))
        } else {
            update.filter(accounts::Column::Amount.lte(i64::MAX - delta))
        };

        let result = update.exec(db).await?;
        let account = self
            .require_account(db, account_id, user_id)
            .await
            .and_then(Account::try_from)?;
        if result.rows_affected == 0 {
            tracing::debug!(
                account_id,
                delta,
                balance = account.amount,
                "balance change rejected"
            );
            let err = match account.balance_after(delta) {
                Err(err) => err,
                Ok(_) => EngineError::InsufficientFunds {
                    amount: delta.saturating_abs(),
                    currency: account.currency,
                },
            };
            return Err(err);
        }
        Ok(account)
    }
}
