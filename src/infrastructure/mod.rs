pub mod catalog;
pub mod clock;
pub mod config;
pub mod price;
pub mod repositories;

pub use catalog::ListingFileCatalog;
pub use clock::{SimulationClock, SystemClock};
pub use config::{BrokerConfig, ConfigError, QuoteProvider};
pub use price::{AlphaQuoteSource, SimulatedPriceSource};
pub use repositories::InMemoryLedger;
