//! Integration tests for the REST API
//!
//! Drives the full axum stack: account registration, the trade endpoint with
//! both sides and their rejection cases, portfolio reads, pagination, quotes,
//! and symbol search.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use broker_sim::{
    infrastructure::{InMemoryLedger, ListingFileCatalog, SimulatedPriceSource, SimulationClock},
    presentation::rest::{AppState, create_router},
    PriceSource,
};
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Create a test application state with fixed prices and the default
/// starting balance of 10000.00.
fn create_test_state() -> Arc<AppState<SimulationClock>> {
    let clock = Arc::new(SimulationClock::new());
    let ledger = Arc::new(InMemoryLedger::new(Arc::clone(&clock), dec!(10000.00)));
    let price_source: Arc<dyn PriceSource> = Arc::new(
        SimulatedPriceSource::fixed()
            .with_price("AAPL", dec!(200.00))
            .with_price("MSFT", dec!(420.00))
            .with_price("TSLA", dec!(333.33)),
    );
    let catalog = Arc::new(ListingFileCatalog::with_defaults());

    Arc::new(AppState::new(clock, ledger, price_source, catalog))
}

/// Create test state with an already-registered account
fn create_test_state_with_account(owner_id: &str) -> Arc<AppState<SimulationClock>> {
    let state = create_test_state();
    state.ledger.open_account(owner_id);
    state
}

async fn get(state: Arc<AppState<SimulationClock>>, uri: &str) -> (StatusCode, Value) {
    let app = create_router(state);
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

async fn post(
    state: Arc<AppState<SimulationClock>>,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let app = create_router(state);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

fn trade(owner_id: &str, symbol: &str, side: &str, quantity: u32) -> Value {
    json!({
        "ownerId": owner_id,
        "symbol": symbol,
        "side": side,
        "quantity": quantity
    })
}

// ============================================================================
// Basic Endpoints
// ============================================================================

#[tokio::test]
async fn test_ping_endpoint() {
    let (status, body) = get(create_test_state(), "/api/v1/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_server_time_endpoint() {
    let (status, body) = get(create_test_state(), "/api/v1/time").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("serverTime").is_some());
}

// ============================================================================
// Accounts
// ============================================================================

#[tokio::test]
async fn test_register_account() {
    let state = create_test_state();
    let (status, body) = post(
        Arc::clone(&state),
        "/api/v1/accounts",
        json!({"owner_id": "alice"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ownerId"], "alice");
    assert_eq!(body["balance"], "10000.00");
    assert!(body["holdings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_twice_returns_same_account() {
    let state = create_test_state();
    let (_, first) = post(
        Arc::clone(&state),
        "/api/v1/accounts",
        json!({"owner_id": "alice"}),
    )
    .await;
    let (status, second) = post(
        Arc::clone(&state),
        "/api/v1/accounts",
        json!({"owner_id": "alice"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["accountId"], second["accountId"]);
}

#[tokio::test]
async fn test_register_rejects_blank_owner() {
    let (status, body) = post(
        create_test_state(),
        "/api/v1/accounts",
        json!({"owner_id": "   "}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("code").is_some());
    assert!(body.get("msg").is_some());
}

#[tokio::test]
async fn test_get_unknown_account_is_404() {
    let (status, _) = get(create_test_state(), "/api/v1/accounts/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_balance() {
    let state = create_test_state_with_account("alice");
    let (status, body) = get(state, "/api/v1/accounts/alice/balance").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], "10000.00");
}

// ============================================================================
// Trades - BUY side
// ============================================================================

#[tokio::test]
async fn test_buy_debits_cash_and_adds_holding() {
    let state = create_test_state_with_account("alice");

    let (status, body) = post(
        Arc::clone(&state),
        "/api/v1/trades",
        trade("alice", "AAPL", "BUY", 10),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["symbol"], "AAPL");
    assert_eq!(body["side"], "BUY");
    assert_eq!(body["quantity"], 10);
    assert_eq!(body["price"], "200.00");
    assert_eq!(body["total"], "2000.00");
    assert_eq!(body["balance"], "8000.00");

    let (_, account) = get(state, "/api/v1/accounts/alice").await;
    assert_eq!(account["balance"], "8000.00");
    assert_eq!(account["holdings"][0]["symbol"], "AAPL");
    assert_eq!(account["holdings"][0]["quantity"], 10);
}

#[tokio::test]
async fn test_buy_lowercase_symbol_is_normalized() {
    let state = create_test_state_with_account("alice");
    let (status, body) = post(state, "/api/v1/trades", trade("alice", "aapl", "BUY", 1)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["symbol"], "AAPL");
}

#[tokio::test]
async fn test_buy_beyond_balance_is_rejected() {
    let state = create_test_state_with_account("alice");

    // 51 * 200.00 = 10200.00 > 10000.00
    let (status, body) = post(
        Arc::clone(&state),
        "/api/v1/trades",
        trade("alice", "AAPL", "BUY", 51),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].as_str().unwrap().contains("Insufficient balance"));

    // Nothing changed.
    let (_, account) = get(state, "/api/v1/accounts/alice").await;
    assert_eq!(account["balance"], "10000.00");
    assert!(account["holdings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_buy_exactly_the_balance_succeeds() {
    let state = create_test_state_with_account("alice");

    let (status, body) = post(state, "/api/v1/trades", trade("alice", "AAPL", "BUY", 50)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["balance"], "0.00");
}

// ============================================================================
// Trades - SELL side
// ============================================================================

#[tokio::test]
async fn test_sell_credits_cash_and_removes_exhausted_holding() {
    let state = create_test_state_with_account("alice");
    post(
        Arc::clone(&state),
        "/api/v1/trades",
        trade("alice", "AAPL", "BUY", 10),
    )
    .await;

    let (status, body) = post(
        Arc::clone(&state),
        "/api/v1/trades",
        trade("alice", "AAPL", "SELL", 10),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["side"], "SELL");
    assert_eq!(body["balance"], "10000.00");

    let (_, account) = get(state, "/api/v1/accounts/alice").await;
    assert!(account["holdings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_oversell_is_rejected() {
    let state = create_test_state_with_account("alice");
    post(
        Arc::clone(&state),
        "/api/v1/trades",
        trade("alice", "AAPL", "BUY", 5),
    )
    .await;

    let (status, body) = post(
        Arc::clone(&state),
        "/api/v1/trades",
        trade("alice", "AAPL", "SELL", 6),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].as_str().unwrap().contains("Insufficient holdings"));

    let (_, account) = get(state, "/api/v1/accounts/alice").await;
    assert_eq!(account["holdings"][0]["quantity"], 5);
}

#[tokio::test]
async fn test_sell_unowned_symbol_is_rejected() {
    let state = create_test_state_with_account("alice");

    let (status, body) = post(state, "/api/v1/trades", trade("alice", "MSFT", "SELL", 1)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].as_str().unwrap().contains("MSFT"));
}

// ============================================================================
// Trades - Input Validation
// ============================================================================

#[tokio::test]
async fn test_invalid_side_is_rejected() {
    let state = create_test_state_with_account("alice");
    let (status, _) = post(state, "/api/v1/trades", trade("alice", "AAPL", "HODL", 1)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_zero_quantity_is_rejected() {
    let state = create_test_state_with_account("alice");
    let (status, _) = post(state, "/api/v1/trades", trade("alice", "AAPL", "BUY", 0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_symbol_is_rejected() {
    let state = create_test_state_with_account("alice");
    let (status, _) = post(
        state,
        "/api/v1/trades",
        trade("alice", "NOT A SYMBOL!", "BUY", 1),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_trade_for_unknown_account_is_404() {
    let state = create_test_state();
    let (status, _) = post(state, "/api/v1/trades", trade("ghost", "AAPL", "BUY", 1)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unquoted_symbol_is_bad_gateway() {
    let state = create_test_state_with_account("alice");
    let (status, _) = post(state, "/api/v1/trades", trade("alice", "ZZZZ", "BUY", 1)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

// ============================================================================
// Trade History
// ============================================================================

#[tokio::test]
async fn test_trade_history_newest_first_and_paginated() {
    let state = create_test_state_with_account("alice");
    for symbol in ["AAPL", "MSFT", "TSLA"] {
        post(
            Arc::clone(&state),
            "/api/v1/trades",
            trade("alice", symbol, "BUY", 1),
        )
        .await;
    }

    let (status, body) = get(
        Arc::clone(&state),
        "/api/v1/accounts/alice/trades?page=1&per_page=2",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 3);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["hasNext"], true);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["symbol"], "TSLA");
    assert_eq!(items[1]["symbol"], "MSFT");

    // Out-of-range page clamps to the last page.
    let (_, body) = get(state, "/api/v1/accounts/alice/trades?page=99&per_page=2").await;
    assert_eq!(body["page"], 2);
    assert_eq!(body["items"][0]["symbol"], "AAPL");
}

// ============================================================================
// Holdings
// ============================================================================

#[tokio::test]
async fn test_holdings_are_symbol_ordered() {
    let state = create_test_state_with_account("alice");
    for symbol in ["TSLA", "AAPL", "MSFT"] {
        post(
            Arc::clone(&state),
            "/api/v1/trades",
            trade("alice", symbol, "BUY", 1),
        )
        .await;
    }

    let (status, body) = get(state, "/api/v1/accounts/alice/holdings").await;

    assert_eq!(status, StatusCode::OK);
    let symbols: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["symbol"].as_str().unwrap())
        .collect();
    assert_eq!(symbols, vec!["AAPL", "MSFT", "TSLA"]);
}

#[tokio::test]
async fn test_holdings_search() {
    let state = create_test_state_with_account("alice");
    for symbol in ["AAPL", "MSFT"] {
        post(
            Arc::clone(&state),
            "/api/v1/trades",
            trade("alice", symbol, "BUY", 1),
        )
        .await;
    }

    let (status, body) = get(state, "/api/v1/accounts/alice/holdings/search?q=aap").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["symbol"], "AAPL");
}

// ============================================================================
// Market Data
// ============================================================================

#[tokio::test]
async fn test_quote_endpoint() {
    let (status, body) = get(create_test_state(), "/api/v1/quote?symbol=AAPL").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "AAPL");
    assert_eq!(body["price"], "200.00");
    assert!(body.get("previousClose").is_some());
}

#[tokio::test]
async fn test_quote_unknown_symbol_is_404() {
    let (status, _) = get(create_test_state(), "/api/v1/quote?symbol=ZZZZ").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_symbol_search() {
    let (status, body) = get(create_test_state(), "/api/v1/symbols?q=apple").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["symbol"], "AAPL");
}

#[tokio::test]
async fn test_symbol_search_requires_query() {
    let (status, body) = get(create_test_state(), "/api/v1/symbols").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].as_str().unwrap().contains("'q'"));
}
