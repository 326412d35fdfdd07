pub mod ports;
pub mod use_cases;

pub use ports::{
    LedgerStore, ListedSymbol, PriceError, PriceSource, StockQuote, SymbolCatalog,
};
pub use use_cases::{
    GetPortfolioError, GetPortfolioUseCase, HoldingView, ListTradesError, ListTradesUseCase,
    OpenAccountError, OpenAccountUseCase, Page, PlaceTradeCommand, PlaceTradeError,
    PlaceTradeResult, PlaceTradeUseCase, PortfolioView, QuotePriceError, QuotePriceUseCase,
    SearchSymbolsError, SearchSymbolsUseCase,
};
