//! Broker Simulator
//!
//! A simulated stock-trading service built around an atomic ledger engine.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture with clear separation of concerns:
//!
//! - **Domain**: Core business entities and rules (Account, TradeOrder, TradeRecord)
//! - **Application**: Use cases and port interfaces (PlaceTrade, GetPortfolio, etc.)
//! - **Infrastructure**: Implementations of ports (InMemoryLedger, AlphaQuoteSource, etc.)
//! - **Presentation**: REST API handlers
//!
//! # Features
//!
//! - Atomic buy/sell ledger: a trade debits or credits cash and updates the
//!   holding as one step, or not at all
//! - Exact decimal money, two decimal places everywhere
//! - REST API (`/api/v1/...`) for accounts, trades, quotes, and symbol search
//! - Pluggable quote providers: simulated random walk or Alpha Vantage
//! - Injectable clock for deterministic tests
//!
//! # Example
//!
//! ```ignore
//! use broker_sim::{Broker, infrastructure::BrokerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let broker = Broker::new(BrokerConfig::default());
//!     broker.run().await.unwrap();
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use domain::{
    Account, AccountId, Clock, LedgerError, Side, Symbol, Timestamp, TradeOrder, TradeRecord,
};

pub use infrastructure::{
    AlphaQuoteSource, BrokerConfig, InMemoryLedger, ListingFileCatalog, QuoteProvider,
    SimulatedPriceSource, SimulationClock, SystemClock,
};

pub use application::{
    LedgerStore, Page, PlaceTradeCommand, PlaceTradeResult, PriceSource, StockQuote, SymbolCatalog,
};

pub use presentation::{AppState, create_router};

use axum::Router;
use infrastructure::ConfigError;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The main broker server: wires the ledger, quote provider, and catalog
/// together and exposes them over REST.
pub struct Broker<C: Clock + 'static> {
    pub config: BrokerConfig,
    pub clock: Arc<C>,
    pub ledger: Arc<InMemoryLedger<C>>,
    pub price_source: Arc<dyn PriceSource>,
    pub catalog: Arc<ListingFileCatalog>,
}

impl<C: Clock + 'static> Broker<C> {
    /// Build a broker from config with the given clock.
    pub fn with_clock(config: BrokerConfig, clock: Arc<C>) -> Result<Self, ConfigError> {
        let mut ledger = InMemoryLedger::new(Arc::clone(&clock), config.ledger.starting_balance);
        if let Some(capacity) = config.ledger.journal_capacity {
            ledger = ledger.with_journal_capacity(capacity);
        }
        let ledger = Arc::new(ledger);

        for owner_id in &config.accounts {
            ledger.open_account(owner_id);
        }

        let price_source: Arc<dyn PriceSource> = match config.quotes.provider {
            QuoteProvider::Simulated => Arc::new(
                SimulatedPriceSource::walking(config.quotes.volatility_bps).with_defaults(),
            ),
            QuoteProvider::AlphaVantage => {
                let api_key = config
                    .quotes
                    .resolve_api_key()
                    .ok_or(ConfigError::MissingApiKey)?;
                Arc::new(AlphaQuoteSource::new(api_key))
            }
        };

        let catalog = match &config.catalog.listing_file {
            Some(path) => Arc::new(ListingFileCatalog::load(path).map_err(|e| {
                ConfigError::Io {
                    path: path.clone(),
                    error: e.to_string(),
                }
            })?),
            None => Arc::new(ListingFileCatalog::with_defaults()),
        };

        Ok(Broker {
            config,
            clock,
            ledger,
            price_source,
            catalog,
        })
    }

    /// Create the REST API router
    pub fn rest_router(&self) -> Router {
        let state = Arc::new(AppState::new(
            Arc::clone(&self.clock),
            Arc::clone(&self.ledger),
            Arc::clone(&self.price_source),
            Arc::clone(&self.catalog),
        ));

        create_router(state)
    }

    /// Run the broker server
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let router = self.rest_router();

        tracing::info!("Broker simulator listening on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

impl Broker<SystemClock> {
    /// Build a broker on the system clock.
    pub fn new(config: BrokerConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }
}

impl Broker<SimulationClock> {
    /// Build a broker on a simulation clock (for tests and demos).
    pub fn simulated(config: BrokerConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Arc::new(SimulationClock::new()))
    }
}
