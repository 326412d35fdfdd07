use crate::application::ports::LedgerStore;
use crate::application::use_cases::Page;
use crate::domain::AccountId;
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct HoldingView {
    pub symbol: String,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct PortfolioView {
    pub account_id: AccountId,
    pub owner_id: String,
    pub balance: Decimal,
    pub holdings: Vec<HoldingView>,
}

#[derive(Debug, Clone, Error)]
pub enum GetPortfolioError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

/// Read side of the dashboard: balance plus symbol-ordered holdings.
pub struct GetPortfolioUseCase<L>
where
    L: LedgerStore,
{
    ledger: Arc<L>,
}

impl<L> GetPortfolioUseCase<L>
where
    L: LedgerStore,
{
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    pub async fn execute(&self, owner_id: &str) -> Result<PortfolioView, GetPortfolioError> {
        let account = self
            .ledger
            .get_by_owner(owner_id)
            .await
            .ok_or_else(|| GetPortfolioError::AccountNotFound(owner_id.to_string()))?;

        let holdings = account
            .holdings()
            .map(|(symbol, quantity)| HoldingView {
                symbol: symbol.to_string(),
                quantity,
            })
            .collect();

        Ok(PortfolioView {
            account_id: account.id,
            owner_id: account.owner_id.clone(),
            balance: account.balance(),
            holdings,
        })
    }

    pub async fn holdings_page(
        &self,
        owner_id: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Page<HoldingView>, GetPortfolioError> {
        let view = self.execute(owner_id).await?;
        Ok(Page::slice(view.holdings, page, per_page))
    }

    /// Substring search over owned symbols (case-insensitive).
    pub async fn search_holdings(
        &self,
        owner_id: &str,
        query: &str,
    ) -> Result<Vec<HoldingView>, GetPortfolioError> {
        let view = self.execute(owner_id).await?;
        let needle = query.trim().to_uppercase();
        Ok(view
            .holdings
            .into_iter()
            .filter(|h| h.symbol.contains(&needle))
            .collect())
    }
}
