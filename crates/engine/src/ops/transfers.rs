use sea_orm::TransactionTrait;

use crate::{Account, EngineError, ResultEngine, TransferCmd, util::ensure_positive_amount};

use super::{Engine, with_tx};

impl Engine {
    /// Move `cmd.amount` from an account of the requesting user to
    /// `cmd.to_account_id`.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. the source account exists and belongs to `cmd.user_id`;
    /// 2. the destination account exists and belongs to `cmd.to_user_id`
    ///    (a wrong owner is reported as not found);
    /// 3. the amount is positive;
    /// 4. both accounts share a currency;
    /// 5. the source balance covers the amount.
    ///
    /// Debit and credit commit in the same DB transaction.
    pub async fn transfer(&self, cmd: TransferCmd) -> ResultEngine<()> {
        let TransferCmd {
            from_account_id,
            to_account_id,
            to_user_id,
            amount,
            user_id,
        } = cmd;

        let (source, destination) = with_tx!(self, |db_tx| {
            let source = self
                .require_account(&db_tx, from_account_id, user_id)
                .await
                .and_then(Account::try_from)?;
            let destination = self
                .require_account(&db_tx, to_account_id, to_user_id)
                .await
                .and_then(Account::try_from)?;
            ensure_positive_amount(amount)?;
            if source.currency != destination.currency {
                return Err(EngineError::CurrencyMismatch);
            }
            source.balance_after(-amount)?;

            let source = self
                .apply_delta(&db_tx, source.id, source.user_id, -amount)
                .await?;
            let destination = self
                .apply_delta(&db_tx, destination.id, destination.user_id, amount)
                .await?;
            Ok((source, destination))
        })?;

        tracing::info!(
            from_account_id = source.id,
            to_account_id = destination.id,
            amount,
            currency = %source.currency,
            "transfer"
        );
        Ok(())
    }
}
