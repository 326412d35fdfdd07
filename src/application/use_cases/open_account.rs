use crate::application::ports::LedgerStore;
use crate::domain::Account;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum OpenAccountError {
    #[error("Invalid owner id: {0}")]
    InvalidOwnerId(&'static str),
}

/// Registration: get-or-create the account for an owner with the configured
/// starting balance. Idempotent per owner.
pub struct OpenAccountUseCase<L>
where
    L: LedgerStore,
{
    ledger: Arc<L>,
}

impl<L> OpenAccountUseCase<L>
where
    L: LedgerStore,
{
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    pub async fn execute(&self, owner_id: &str) -> Result<Account, OpenAccountError> {
        let owner_id = owner_id.trim();
        if owner_id.is_empty() {
            return Err(OpenAccountError::InvalidOwnerId("cannot be empty"));
        }
        if owner_id.len() > 64 {
            return Err(OpenAccountError::InvalidOwnerId("too long (max 64 chars)"));
        }

        let account = self.ledger.get_or_create(owner_id).await;
        tracing::debug!(owner = %owner_id, account_id = %account.id, "account opened");
        Ok(account)
    }
}
