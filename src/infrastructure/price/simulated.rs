use crate::application::ports::{PriceError, PriceSource, StockQuote};
use crate::domain::Symbol;
use async_trait::async_trait;
use dashmap::DashMap;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Offline quote provider for demos and tests.
///
/// Holds a per-symbol price table. In fixed mode every quote returns the
/// table value unchanged; in walk mode each quote nudges the stored price
/// by up to `volatility_bps` basis points in either direction and persists
/// the move, giving a crude random walk. Symbols not in the table are
/// rejected as unknown, matching the live provider's behavior.
pub struct SimulatedPriceSource {
    prices: DashMap<String, Decimal>,
    volatility_bps: u32,
}

impl SimulatedPriceSource {
    /// Fixed prices, no movement. Starts empty.
    pub fn fixed() -> Self {
        SimulatedPriceSource {
            prices: DashMap::new(),
            volatility_bps: 0,
        }
    }

    /// Random-walk prices with the given per-quote volatility in basis points.
    pub fn walking(volatility_bps: u32) -> Self {
        SimulatedPriceSource {
            prices: DashMap::new(),
            volatility_bps,
        }
    }

    pub fn with_price(self, symbol: &str, price: Decimal) -> Self {
        self.prices.insert(symbol.to_uppercase(), price);
        self
    }

    /// A handful of well-known symbols with plausible prices.
    pub fn with_defaults(self) -> Self {
        self.with_price("AAPL", dec!(200.00))
            .with_price("MSFT", dec!(420.00))
            .with_price("GOOG", dec!(155.00))
            .with_price("AMZN", dec!(185.00))
            .with_price("TSLA", dec!(250.00))
            .with_price("NVDA", dec!(115.00))
    }

    pub fn set_price(&self, symbol: &str, price: Decimal) {
        self.prices.insert(symbol.to_uppercase(), price);
    }

    fn next_price(&self, current: Decimal) -> Decimal {
        if self.volatility_bps == 0 {
            return current;
        }
        let bps = self.volatility_bps as i64;
        let drift_bps = rand::thread_rng().gen_range(-bps..=bps);
        let drifted = current + current * Decimal::new(drift_bps, 4);
        // Prices never walk to zero or below a cent.
        drifted.round_dp(2).max(dec!(0.01))
    }
}

#[async_trait]
impl PriceSource for SimulatedPriceSource {
    async fn quote(&self, symbol: &Symbol) -> Result<StockQuote, PriceError> {
        let mut entry = self
            .prices
            .get_mut(symbol.as_str())
            .ok_or_else(|| PriceError::UnknownSymbol(symbol.clone()))?;

        let previous_close = *entry.value();
        let price = self.next_price(previous_close);
        *entry.value_mut() = price;

        Ok(StockQuote {
            symbol: symbol.clone(),
            price,
            open: previous_close,
            previous_close,
        })
    }
}
