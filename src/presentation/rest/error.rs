use crate::application::{
    GetPortfolioError, ListTradesError, OpenAccountError, PlaceTradeError, PriceError,
    QuotePriceError, SearchSymbolsError,
};
use crate::domain::LedgerError;
use crate::presentation::rest::dto::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
    pub status: StatusCode,
}

impl ApiError {
    pub fn bad_request(code: i32, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn not_found(code: i32, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        ApiError {
            code: -1016,
            message: message.into(),
            status: StatusCode::BAD_GATEWAY,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError {
            code: -1000,
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid_parameter(param: &str, reason: &str) -> Self {
        Self::bad_request(-1100, format!("Illegal parameter '{}': {}", param, reason))
    }

    pub fn missing_parameter(param: &str) -> Self {
        Self::bad_request(
            -1102,
            format!("Mandatory parameter '{}' was not sent", param),
        )
    }

    pub fn account_not_found(owner_id: &str) -> Self {
        Self::not_found(-2014, format!("Account not found: {}", owner_id))
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AccountNotFound(owner) => ApiError::account_not_found(&owner),
            LedgerError::Storage(msg) => ApiError::internal(msg),
            // Validation rejections share one code; the message carries detail.
            other => ApiError::bad_request(-2010, other.to_string()),
        }
    }
}

impl From<PlaceTradeError> for ApiError {
    fn from(err: PlaceTradeError) -> Self {
        match err {
            PlaceTradeError::InvalidSymbol(msg) => ApiError::invalid_parameter("symbol", &msg),
            PlaceTradeError::PriceUnavailable(msg) => ApiError::bad_gateway(msg),
            PlaceTradeError::Ledger(e) => e.into(),
        }
    }
}

impl From<OpenAccountError> for ApiError {
    fn from(err: OpenAccountError) -> Self {
        match err {
            OpenAccountError::InvalidOwnerId(msg) => ApiError::invalid_parameter("owner_id", msg),
        }
    }
}

impl From<GetPortfolioError> for ApiError {
    fn from(err: GetPortfolioError) -> Self {
        match err {
            GetPortfolioError::AccountNotFound(owner) => ApiError::account_not_found(&owner),
        }
    }
}

impl From<ListTradesError> for ApiError {
    fn from(err: ListTradesError) -> Self {
        match err {
            ListTradesError::AccountNotFound(owner) => ApiError::account_not_found(&owner),
        }
    }
}

impl From<QuotePriceError> for ApiError {
    fn from(err: QuotePriceError) -> Self {
        match err {
            QuotePriceError::InvalidSymbol(msg) => ApiError::invalid_parameter("symbol", &msg),
            QuotePriceError::Price(PriceError::UnknownSymbol(symbol)) => {
                ApiError::not_found(-1121, format!("No quote available for {}", symbol))
            }
            QuotePriceError::Price(PriceError::FetchFailed(msg)) => ApiError::bad_gateway(msg),
        }
    }
}

impl From<SearchSymbolsError> for ApiError {
    fn from(err: SearchSymbolsError) -> Self {
        match err {
            SearchSymbolsError::MissingQuery => ApiError::missing_parameter("q"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.code, self.message));
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
