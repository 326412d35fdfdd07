//! Place-trade use case: fetch the current price, then run the ledger step.
//!
//! The price lookup happens entirely before the engine is invoked; the engine
//! only ever sees a concrete positive price.

use crate::application::ports::{LedgerStore, PriceError, PriceSource};
use crate::domain::{LedgerError, Side, Symbol, TradeOrder, TradeRecord};
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct PlaceTradeCommand {
    pub owner_id: String,
    pub symbol: String,
    pub side: Side,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct PlaceTradeResult {
    pub record: TradeRecord,
    /// Cash balance after the trade committed.
    pub balance: Decimal,
}

#[derive(Debug, Clone, Error)]
pub enum PlaceTradeError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Price unavailable: {0}")]
    PriceUnavailable(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

pub struct PlaceTradeUseCase<L, P>
where
    L: LedgerStore,
    P: PriceSource + ?Sized,
{
    ledger: Arc<L>,
    price_source: Arc<P>,
}

impl<L, P> PlaceTradeUseCase<L, P>
where
    L: LedgerStore,
    P: PriceSource + ?Sized,
{
    pub fn new(ledger: Arc<L>, price_source: Arc<P>) -> Self {
        Self {
            ledger,
            price_source,
        }
    }

    pub async fn execute(
        &self,
        command: PlaceTradeCommand,
    ) -> Result<PlaceTradeResult, PlaceTradeError> {
        let symbol = Symbol::new(&command.symbol)
            .map_err(|e| PlaceTradeError::InvalidSymbol(e.to_string()))?;

        // Reject bad quantities before spending a price lookup on them.
        if command.quantity == 0 {
            return Err(LedgerError::InvalidQuantity.into());
        }

        let quote = self
            .price_source
            .quote(&symbol)
            .await
            .map_err(|e| match e {
                PriceError::FetchFailed(msg) => PlaceTradeError::PriceUnavailable(msg),
                PriceError::UnknownSymbol(s) => {
                    PlaceTradeError::PriceUnavailable(format!("no quote for {}", s))
                }
            })?;

        let order = TradeOrder {
            symbol,
            side: command.side,
            quantity: command.quantity,
            price: quote.price,
        };

        let record = self.ledger.commit_trade(&command.owner_id, order).await?;

        tracing::info!(
            owner = %command.owner_id,
            symbol = %record.symbol,
            side = %record.side,
            quantity = record.quantity,
            total = %record.total,
            "trade committed"
        );

        let balance = self
            .ledger
            .get_by_owner(&command.owner_id)
            .await
            .map(|a| a.balance())
            .unwrap_or(Decimal::ZERO);

        Ok(PlaceTradeResult { record, balance })
    }
}
