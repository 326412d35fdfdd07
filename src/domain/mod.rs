pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export entity types
pub use entities::{Account, AccountId, LedgerError, TradeId, TradeOrder, TradeRecord};

// Re-export services
pub use services::Clock;

// Re-export value objects
pub use value_objects::{CASH_DECIMALS, Side, Symbol, Timestamp};
