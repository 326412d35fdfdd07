use crate::domain::{Account, AccountId, LedgerError, TradeOrder, TradeRecord};
use async_trait::async_trait;

/// Storage port for accounts, holdings, and the trade journal.
///
/// `commit_trade` is the atomic unit of the system: the implementation must
/// run the whole read-validate-write-journal sequence under exclusive
/// per-account serialization, and a failure at any point (validation or
/// journal append) must leave account and holding state unchanged. Trades
/// against different accounts must not block each other.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Get the account for an owner, creating it with the configured
    /// starting balance if it does not exist yet.
    async fn get_or_create(&self, owner_id: &str) -> Account;

    /// Get an account by owner ID
    async fn get_by_owner(&self, owner_id: &str) -> Option<Account>;

    /// Atomically validate and apply a trade against the owner's account,
    /// appending an immutable record to the journal on success.
    async fn commit_trade(
        &self,
        owner_id: &str,
        order: TradeOrder,
    ) -> Result<TradeRecord, LedgerError>;

    /// Committed trades for an account, newest first.
    async fn trades_for(&self, account_id: AccountId) -> Vec<TradeRecord>;

    /// Get all accounts
    async fn list(&self) -> Vec<Account>;
}
