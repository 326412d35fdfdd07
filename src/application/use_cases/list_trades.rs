use crate::application::ports::LedgerStore;
use crate::application::use_cases::Page;
use crate::domain::TradeRecord;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ListTradesError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

/// Paginated trade history for an owner, newest first.
pub struct ListTradesUseCase<L>
where
    L: LedgerStore,
{
    ledger: Arc<L>,
}

impl<L> ListTradesUseCase<L>
where
    L: LedgerStore,
{
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    pub async fn execute(
        &self,
        owner_id: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Page<TradeRecord>, ListTradesError> {
        let account = self
            .ledger
            .get_by_owner(owner_id)
            .await
            .ok_or_else(|| ListTradesError::AccountNotFound(owner_id.to_string()))?;

        let trades = self.ledger.trades_for(account.id).await;
        Ok(Page::slice(trades, page, per_page))
    }
}
