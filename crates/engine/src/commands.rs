//! Command structs for engine operations.
//!
//! These types group parameters for write operations, keeping call sites
//! readable and avoiding long argument lists.

/// Move funds from an account of the requesting user to an account of
/// `to_user_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferCmd {
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub to_user_id: i64,
    pub amount: i64,
    pub user_id: i64,
}

impl TransferCmd {
    #[must_use]
    pub fn new(user_id: i64, from_account_id: i64, amount: i64) -> Self {
        Self {
            from_account_id,
            to_account_id: 0,
            to_user_id: 0,
            amount,
            user_id,
        }
    }

    /// Destination account and the user it is expected to belong to.
    #[must_use]
    pub fn to(mut self, to_account_id: i64, to_user_id: i64) -> Self {
        self.to_account_id = to_account_id;
        self.to_user_id = to_user_id;
        self
    }
}
