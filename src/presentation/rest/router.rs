use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::application::PriceSource;
use crate::domain::Clock;
use crate::infrastructure::{InMemoryLedger, ListingFileCatalog};

/// Application state shared across handlers
pub struct AppState<C: Clock> {
    pub clock: Arc<C>,
    pub ledger: Arc<InMemoryLedger<C>>,
    pub price_source: Arc<dyn PriceSource>,
    pub catalog: Arc<ListingFileCatalog>,
}

impl<C: Clock> AppState<C> {
    pub fn new(
        clock: Arc<C>,
        ledger: Arc<InMemoryLedger<C>>,
        price_source: Arc<dyn PriceSource>,
        catalog: Arc<ListingFileCatalog>,
    ) -> Self {
        AppState {
            clock,
            ledger,
            price_source,
            catalog,
        }
    }
}

/// Create the REST API router
pub fn create_router<C: Clock + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        // Health endpoints
        .route("/api/v1/ping", get(handlers::ping))
        .route("/api/v1/time", get(handlers::server_time::<C>))
        // Accounts
        .route("/api/v1/accounts", post(handlers::register_account::<C>))
        .route(
            "/api/v1/accounts/{owner_id}",
            get(handlers::get_account::<C>),
        )
        .route(
            "/api/v1/accounts/{owner_id}/balance",
            get(handlers::get_balance::<C>),
        )
        .route(
            "/api/v1/accounts/{owner_id}/holdings",
            get(handlers::get_holdings::<C>),
        )
        .route(
            "/api/v1/accounts/{owner_id}/holdings/search",
            get(handlers::search_holdings::<C>),
        )
        .route(
            "/api/v1/accounts/{owner_id}/trades",
            get(handlers::get_trades::<C>),
        )
        // Trading
        .route("/api/v1/trades", post(handlers::create_trade::<C>))
        // Market data
        .route("/api/v1/quote", get(handlers::get_quote::<C>))
        .route("/api/v1/symbols", get(handlers::search_symbols::<C>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
