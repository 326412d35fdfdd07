mod side;
mod symbol;

pub use side::Side;
pub use symbol::Symbol;

pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Cash amounts and prices are fixed-point with this many decimal places.
pub const CASH_DECIMALS: u32 = 2;
