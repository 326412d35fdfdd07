mod ledger_store;
mod price_source;
mod symbol_catalog;

pub use ledger_store::LedgerStore;
pub use price_source::{PriceError, PriceSource, StockQuote};
pub use symbol_catalog::{ListedSymbol, SymbolCatalog};
