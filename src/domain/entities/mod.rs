mod account;
mod trade;

pub use account::{Account, AccountId, LedgerError, TradeOrder};
pub use trade::{TradeId, TradeRecord};
