use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    Account, Currency, EngineError, ResultEngine, User, UserSummary, accounts, users,
    util::normalize_required_text,
};

use super::{Engine, with_tx};

impl Engine {
    /// Sign up a new user.
    ///
    /// The password is hashed before it reaches the database and one empty
    /// account is opened for every [`Currency`].
    pub async fn create_user(&self, username: &str, password: &str) -> ResultEngine<User> {
        let username = normalize_required_text(username, "username")?;
        if password.is_empty() {
            return Err(EngineError::InvalidInput(
                "password must not be empty".to_string(),
            ));
        }
        let password_hash = self.hasher.hash(password)?;

        let user = with_tx!(self, |db_tx| {
            let exists = users::Entity::find()
                .filter(users::Column::Username.eq(username.as_str()))
                .one(&db_tx)
                .await?
                .is_some();
            if exists {
                return Err(EngineError::ExistingKey("User".to_string()));
            }

            let model = users::ActiveModel {
                id: ActiveValue::NotSet,
                username: ActiveValue::Set(username.clone()),
                password: ActiveValue::Set(password_hash),
            }
            .insert(&db_tx)
            .await?;

            let mut opened = Vec::with_capacity(Currency::ALL.len());
            for currency in Currency::ALL {
                let row = accounts::opening_row(model.id, currency)
                    .insert(&db_tx)
                    .await?;
                opened.push(Account::try_from(row)?);
            }

            Ok(User {
                id: model.id,
                username: model.username,
                accounts: opened,
            })
        })?;

        tracing::info!(user_id = user.id, username = %user.username, "user created");
        Ok(user)
    }

    /// Return a user with all of its accounts.
    pub async fn user(&self, user_id: i64) -> ResultEngine<User> {
        with_tx!(self, |db_tx| {
            let model = users::Entity::find_by_id(user_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("user not exists".to_string()))?;

            let accounts = model
                .find_related(accounts::Entity)
                .order_by_asc(accounts::Column::Id)
                .all(&db_tx)
                .await?
                .into_iter()
                .map(Account::try_from)
                .collect::<ResultEngine<Vec<_>>>()?;

            Ok(User {
                id: model.id,
                username: model.username,
                accounts,
            })
        })
    }

    /// List every user, oldest first.
    pub async fn list_users(&self) -> ResultEngine<Vec<UserSummary>> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(UserSummary::from).collect())
    }

    /// Verify a username/password pair.
    ///
    /// Returns `Ok(None)` for an unknown username or a wrong password; errors
    /// are reserved for storage failures.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> ResultEngine<Option<UserSummary>> {
        let Some(model) = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.database)
            .await?
        else {
            return Ok(None);
        };

        if !self.hasher.verify(password, &model.password) {
            tracing::debug!(username, "password mismatch");
            return Ok(None);
        }
        Ok(Some(UserSummary::from(model)))
    }
}
