use crate::application::{HoldingView, ListedSymbol, Page, StockQuote};
use crate::domain::{Account, TradeRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request to register an account
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterAccountRequest {
    pub owner_id: String,
}

/// Account view with balance and holdings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account_id: String,
    pub owner_id: String,
    pub balance: String,
    pub holdings: Vec<HoldingDto>,
    pub created_at: i64,
}

impl AccountResponse {
    pub fn from_account(account: &Account) -> Self {
        AccountResponse {
            account_id: account.id.to_string(),
            owner_id: account.owner_id.clone(),
            balance: account.balance().to_string(),
            holdings: account
                .holdings()
                .map(|(symbol, quantity)| HoldingDto {
                    symbol: symbol.to_string(),
                    quantity,
                })
                .collect(),
            created_at: account.created_at.timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HoldingDto {
    pub symbol: String,
    pub quantity: u32,
}

impl From<HoldingView> for HoldingDto {
    fn from(view: HoldingView) -> Self {
        HoldingDto {
            symbol: view.symbol,
            quantity: view.quantity,
        }
    }
}

/// Standalone balance view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub owner_id: String,
    pub balance: String,
}

/// Request to place a trade
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTradeRequest {
    pub owner_id: String,
    pub symbol: String,
    pub side: String,
    pub quantity: u32,
}

/// Committed trade record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub trade_id: String,
    pub sequence: u64,
    pub account_id: String,
    pub symbol: String,
    pub side: String,
    pub quantity: u32,
    pub price: String,
    pub total: String,
    pub executed_at: i64,
}

impl TradeResponse {
    pub fn from_record(record: &TradeRecord) -> Self {
        TradeResponse {
            trade_id: record.id.to_string(),
            sequence: record.sequence,
            account_id: record.account_id.to_string(),
            symbol: record.symbol.to_string(),
            side: record.side.to_string(),
            quantity: record.quantity,
            price: record.price.to_string(),
            total: record.total.to_string(),
            executed_at: record.executed_at.timestamp_millis(),
        }
    }
}

/// Trade response plus the balance after commit
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedTradeResponse {
    #[serde(flatten)]
    pub trade: TradeResponse,
    pub balance: String,
}

/// One page of results with pagination metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> PageResponse<T> {
    pub fn from_page<U>(page: Page<U>, f: impl Fn(U) -> T) -> Self {
        let has_previous = page.has_previous();
        let has_next = page.has_next();
        PageResponse {
            items: page.items.into_iter().map(f).collect(),
            page: page.page,
            per_page: page.per_page,
            total_items: page.total_items,
            total_pages: page.total_pages,
            has_previous,
            has_next,
        }
    }
}

/// Pagination query params
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    10
}

/// Holdings search query params
#[derive(Debug, Clone, Deserialize)]
pub struct HoldingsSearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Quote query params
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteQuery {
    pub symbol: String,
}

/// Quote view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub symbol: String,
    pub price: String,
    pub open: String,
    pub previous_close: String,
}

impl QuoteResponse {
    pub fn from_quote(quote: &StockQuote) -> Self {
        QuoteResponse {
            symbol: quote.symbol.to_string(),
            price: format_money(quote.price),
            open: format_money(quote.open),
            previous_close: format_money(quote.previous_close),
        }
    }
}

/// Quotes come back from providers at arbitrary scale; render at 2 dp.
fn format_money(value: Decimal) -> String {
    value.round_dp(2).to_string()
}

/// Symbol search query params
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolSearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// One catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct ListedSymbolDto {
    pub symbol: String,
    pub name: String,
}

impl From<ListedSymbol> for ListedSymbolDto {
    fn from(listing: ListedSymbol) -> Self {
        ListedSymbolDto {
            symbol: listing.symbol,
            name: listing.name,
        }
    }
}

/// Server time response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTimeResponse {
    pub server_time: i64,
}

/// Ping response (empty)
#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(code: i32, msg: impl Into<String>) -> Self {
        ErrorResponse {
            code,
            msg: msg.into(),
        }
    }
}
