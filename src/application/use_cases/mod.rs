mod list_trades;
mod open_account;
mod place_trade;
mod portfolio;
mod quote_price;
mod search_symbols;

pub use list_trades::{ListTradesError, ListTradesUseCase};
pub use open_account::{OpenAccountError, OpenAccountUseCase};
pub use place_trade::{PlaceTradeCommand, PlaceTradeError, PlaceTradeResult, PlaceTradeUseCase};
pub use portfolio::{GetPortfolioError, GetPortfolioUseCase, HoldingView, PortfolioView};
pub use quote_price::{QuotePriceError, QuotePriceUseCase};
pub use search_symbols::{SearchSymbolsError, SearchSymbolsUseCase};

/// One page of an ordered result set, Django-paginator style: an
/// out-of-range or zero page clamps to the nearest valid page instead of
/// erroring.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn slice(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
        let per_page = per_page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);
        let items: Vec<T> = items
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();
        Page {
            items,
            page,
            per_page,
            total_items,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
