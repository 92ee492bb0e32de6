use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{Argon2Hasher, CredentialHasher, ResultEngine};

mod access;
mod balances;
mod transfers;
mod users;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
///
/// An early `return`/`?` out of the block drops the transaction, which rolls it back.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result: $crate::ResultEngine<_> = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// Entry point for every banking operation.
///
/// The engine holds no balance state of its own: every read and write goes
/// through the database, so one `Engine` can be shared (behind an `Arc`) by
/// any number of concurrent requests.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    hasher: Arc<dyn CredentialHasher>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
pub struct EngineBuilder {
    database: DatabaseConnection,
    hasher: Arc<dyn CredentialHasher>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            database: DatabaseConnection::default(),
            hasher: Arc::new(Argon2Hasher::default()),
        }
    }
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Replace the default Argon2id hasher.
    pub fn credential_hasher(mut self, hasher: Arc<dyn CredentialHasher>) -> EngineBuilder {
        self.hasher = hasher;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
            hasher: self.hasher,
        })
    }
}
