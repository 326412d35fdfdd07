use crate::domain::Symbol;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point-in-time market quote for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: Symbol,
    pub price: Decimal,
    pub open: Decimal,
    pub previous_close: Decimal,
}

#[derive(Debug, Clone, Error)]
pub enum PriceError {
    #[error("Price fetch failed: {0}")]
    FetchFailed(String),

    #[error("No quote available for {0}")]
    UnknownSymbol(Symbol),
}

/// Port for the external market-price collaborator.
///
/// The ledger engine never calls this itself; prices are fetched up front
/// and passed into `commit_trade` as plain inputs.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn quote(&self, symbol: &Symbol) -> Result<StockQuote, PriceError>;
}
