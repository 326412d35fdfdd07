use crate::application::ports::{PriceError, PriceSource, StockQuote};
use crate::domain::{CASH_DECIMALS, Symbol};
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

#[derive(Error, Debug)]
pub enum QuoteApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("No quote data for symbol {0}")]
    Empty(String),
}

impl From<QuoteApiError> for PriceError {
    fn from(err: QuoteApiError) -> Self {
        match err {
            QuoteApiError::Empty(symbol) => match Symbol::new(&symbol) {
                Ok(sym) => PriceError::UnknownSymbol(sym),
                Err(_) => PriceError::FetchFailed(format!("no quote data for {}", symbol)),
            },
            other => PriceError::FetchFailed(other.to_string()),
        }
    }
}

/// HTTP client for the Alpha Vantage GLOBAL_QUOTE endpoint.
///
/// The API wraps quote fields in a "Global Quote" object with numbered
/// keys ("05. price" etc). An unknown symbol comes back as 200 OK with an
/// empty object, which surfaces here as `PriceError::UnknownSymbol`.
#[derive(Clone)]
pub struct AlphaQuoteSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AlphaQuoteSource {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), api_key)
    }

    /// Point the client at a different host, for tests against a local stub.
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        AlphaQuoteSource {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    async fn global_quote(&self, symbol: &Symbol) -> Result<StockQuote, QuoteApiError> {
        let url = format!(
            "{}/query?function=GLOBAL_QUOTE&symbol={}&apikey={}",
            self.base_url,
            symbol.as_str(),
            self.api_key
        );
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(QuoteApiError::Parse(format!("HTTP {}: {}", status, text)));
        }

        let envelope: QuoteEnvelope =
            serde_json::from_str(&text).map_err(|e| QuoteApiError::Parse(e.to_string()))?;

        let payload = match envelope.global_quote {
            Some(payload) if !payload.price.is_empty() => payload,
            _ => return Err(QuoteApiError::Empty(symbol.as_str().to_string())),
        };

        Ok(StockQuote {
            symbol: symbol.clone(),
            price: parse_field("05. price", &payload.price)?,
            open: parse_field("02. open", &payload.open)?,
            previous_close: parse_field("08. previous close", &payload.previous_close)?,
        })
    }
}

/// Parse a quote field and normalize it to the ledger's 2-decimal cash
/// scale. The API renders prices at four decimal places ("200.1200"), so
/// trailing zeros are dropped; a genuinely sub-cent price is an error
/// rather than something to round away.
fn parse_field(name: &str, raw: &str) -> Result<Decimal, QuoteApiError> {
    let value = Decimal::from_str(raw)
        .map_err(|e| QuoteApiError::Parse(format!("field {:?} = {:?}: {}", name, raw, e)))?;
    let mut normalized = value.round_dp(CASH_DECIMALS);
    if normalized != value {
        return Err(QuoteApiError::Parse(format!(
            "field {:?} = {:?}: more than {} decimal places",
            name, raw, CASH_DECIMALS
        )));
    }
    normalized.rescale(CASH_DECIMALS);
    Ok(normalized)
}

#[derive(Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "Global Quote")]
    global_quote: Option<QuotePayload>,
}

#[derive(Deserialize, Default)]
struct QuotePayload {
    #[serde(rename = "02. open", default)]
    open: String,
    #[serde(rename = "05. price", default)]
    price: String,
    #[serde(rename = "08. previous close", default)]
    previous_close: String,
}

#[async_trait]
impl PriceSource for AlphaQuoteSource {
    async fn quote(&self, symbol: &Symbol) -> Result<StockQuote, PriceError> {
        self.global_quote(symbol).await.map_err(PriceError::from)
    }
}
