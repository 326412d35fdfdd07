use crate::application::ports::{PriceError, PriceSource, StockQuote};
use crate::domain::Symbol;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum QuotePriceError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error(transparent)]
    Price(#[from] PriceError),
}

/// Symbol-validated passthrough to the price source.
pub struct QuotePriceUseCase<P>
where
    P: PriceSource + ?Sized,
{
    price_source: Arc<P>,
}

impl<P> QuotePriceUseCase<P>
where
    P: PriceSource + ?Sized,
{
    pub fn new(price_source: Arc<P>) -> Self {
        Self { price_source }
    }

    pub async fn execute(&self, symbol: &str) -> Result<StockQuote, QuotePriceError> {
        let symbol =
            Symbol::new(symbol).map_err(|e| QuotePriceError::InvalidSymbol(e.to_string()))?;
        Ok(self.price_source.quote(&symbol).await?)
    }
}
