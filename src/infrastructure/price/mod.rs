pub mod alpha_quote;
pub mod simulated;

pub use alpha_quote::AlphaQuoteSource;
pub use simulated::SimulatedPriceSource;
