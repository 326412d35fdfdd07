use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::application::{
    GetPortfolioUseCase, ListTradesUseCase, OpenAccountUseCase, PlaceTradeCommand,
    PlaceTradeUseCase, QuotePriceUseCase, SearchSymbolsUseCase,
};
use crate::domain::{Clock, Side};
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// GET /api/v1/ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {})
}

/// GET /api/v1/time
pub async fn server_time<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
) -> Json<ServerTimeResponse> {
    Json(ServerTimeResponse {
        server_time: state.clock.now_millis(),
    })
}

/// POST /api/v1/accounts
pub async fn register_account<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Json(req): Json<RegisterAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let use_case = OpenAccountUseCase::new(Arc::clone(&state.ledger));
    let account = use_case.execute(&req.owner_id).await?;
    Ok((StatusCode::CREATED, Json(AccountResponse::from_account(&account))))
}

/// GET /api/v1/accounts/{owner_id}
pub async fn get_account<C: Clock>(
    Path(owner_id): Path<String>,
    State(state): State<Arc<AppState<C>>>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state
        .ledger
        .account_of(&owner_id)
        .ok_or_else(|| ApiError::account_not_found(&owner_id))?;
    Ok(Json(AccountResponse::from_account(&account)))
}

/// GET /api/v1/accounts/{owner_id}/balance
pub async fn get_balance<C: Clock>(
    Path(owner_id): Path<String>,
    State(state): State<Arc<AppState<C>>>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let use_case = GetPortfolioUseCase::new(Arc::clone(&state.ledger));
    let view = use_case.execute(&owner_id).await?;
    Ok(Json(BalanceResponse {
        owner_id: view.owner_id,
        balance: view.balance.to_string(),
    }))
}

/// GET /api/v1/accounts/{owner_id}/holdings
pub async fn get_holdings<C: Clock>(
    Path(owner_id): Path<String>,
    Query(query): Query<PageQuery>,
    State(state): State<Arc<AppState<C>>>,
) -> Result<Json<PageResponse<HoldingDto>>, ApiError> {
    let use_case = GetPortfolioUseCase::new(Arc::clone(&state.ledger));
    let page = use_case
        .holdings_page(&owner_id, query.page, query.per_page)
        .await?;
    Ok(Json(PageResponse::from_page(page, HoldingDto::from)))
}

/// GET /api/v1/accounts/{owner_id}/holdings/search
pub async fn search_holdings<C: Clock>(
    Path(owner_id): Path<String>,
    Query(query): Query<HoldingsSearchQuery>,
    State(state): State<Arc<AppState<C>>>,
) -> Result<Json<Vec<HoldingDto>>, ApiError> {
    let use_case = GetPortfolioUseCase::new(Arc::clone(&state.ledger));
    let holdings = use_case.search_holdings(&owner_id, &query.q).await?;
    Ok(Json(holdings.into_iter().map(HoldingDto::from).collect()))
}

/// GET /api/v1/accounts/{owner_id}/trades
pub async fn get_trades<C: Clock>(
    Path(owner_id): Path<String>,
    Query(query): Query<PageQuery>,
    State(state): State<Arc<AppState<C>>>,
) -> Result<Json<PageResponse<TradeResponse>>, ApiError> {
    let use_case = ListTradesUseCase::new(Arc::clone(&state.ledger));
    let page = use_case
        .execute(&owner_id, query.page, query.per_page)
        .await?;
    Ok(Json(PageResponse::from_page(page, |record| {
        TradeResponse::from_record(&record)
    })))
}

/// POST /api/v1/trades
pub async fn create_trade<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Json(req): Json<CreateTradeRequest>,
) -> Result<(StatusCode, Json<PlacedTradeResponse>), ApiError> {
    let side: Side = req
        .side
        .as_str()
        .try_into()
        .map_err(|_| ApiError::invalid_parameter("side", "must be BUY or SELL"))?;

    let use_case = PlaceTradeUseCase::new(
        Arc::clone(&state.ledger),
        Arc::clone(&state.price_source),
    );

    let result = use_case
        .execute(PlaceTradeCommand {
            owner_id: req.owner_id,
            symbol: req.symbol,
            side,
            quantity: req.quantity,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PlacedTradeResponse {
            trade: TradeResponse::from_record(&result.record),
            balance: result.balance.to_string(),
        }),
    ))
}

/// GET /api/v1/quote
pub async fn get_quote<C: Clock>(
    Query(query): Query<QuoteQuery>,
    State(state): State<Arc<AppState<C>>>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let use_case = QuotePriceUseCase::new(Arc::clone(&state.price_source));
    let quote = use_case.execute(&query.symbol).await?;
    Ok(Json(QuoteResponse::from_quote(&quote)))
}

/// GET /api/v1/symbols
pub async fn search_symbols<C: Clock>(
    Query(query): Query<SymbolSearchQuery>,
    State(state): State<Arc<AppState<C>>>,
) -> Result<Json<Vec<ListedSymbolDto>>, ApiError> {
    let use_case = SearchSymbolsUseCase::new(Arc::clone(&state.catalog));
    let listings = use_case.execute(&query.q, query.limit)?;
    Ok(Json(listings.into_iter().map(ListedSymbolDto::from).collect()))
}
