//! Brokerage account entity: cash balance, holdings, and the ledger step.

use crate::domain::value_objects::{CASH_DECIMALS, Side, Symbol, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

use super::{TradeId, TradeRecord};

pub type AccountId = Uuid;

/// Errors produced by the ledger engine. Every variant leaves account and
/// holding state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Invalid quantity: must be a positive whole number of shares")]
    InvalidQuantity,

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Insufficient balance: have {available}, need {required}")]
    InsufficientBalance {
        available: Decimal,
        required: Decimal,
    },

    #[error("Insufficient holdings of {symbol}: own {owned}, tried to sell {requested}")]
    InsufficientHoldings {
        symbol: Symbol,
        owned: u32,
        requested: u32,
    },

    #[error("No holding of {0}")]
    NoSuchHolding(Symbol),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}

/// A validated request to trade: symbol, side, share count, unit price.
///
/// The price has already been fetched by the caller; the engine treats it as
/// an opaque positive 2-decimal value and never performs lookups itself.
#[derive(Debug, Clone)]
pub struct TradeOrder {
    pub symbol: Symbol,
    pub side: Side,
    pub quantity: u32,
    pub price: Decimal,
}

impl TradeOrder {
    /// Input validation, before any state is read.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.quantity == 0 {
            return Err(LedgerError::InvalidQuantity);
        }
        if self.price <= Decimal::ZERO {
            return Err(LedgerError::InvalidPrice(format!(
                "{} is not positive",
                self.price
            )));
        }
        if self.price.scale() > CASH_DECIMALS {
            return Err(LedgerError::InvalidPrice(format!(
                "{} has more than {} decimal places",
                self.price, CASH_DECIMALS
            )));
        }
        Ok(())
    }

    /// quantity x price, exact decimal multiplication at 2 decimal places.
    pub fn total(&self) -> Decimal {
        let mut total = Decimal::from(self.quantity) * self.price;
        // Inputs carry at most 2 decimal places, so this never rounds.
        total.rescale(CASH_DECIMALS);
        total
    }
}

/// A brokerage account: one per user, cash balance plus share holdings.
///
/// Mutated only through [`Account::apply`]; the balance never goes negative
/// and a holding entry never exists with quantity zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub owner_id: String,
    balance: Decimal,
    holdings: BTreeMap<Symbol, u32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Account {
    pub fn new(owner_id: impl Into<String>, starting_balance: Decimal, now: Timestamp) -> Self {
        let mut balance = starting_balance.max(Decimal::ZERO);
        balance.rescale(CASH_DECIMALS);
        Account {
            id: Uuid::new_v4(),
            owner_id: owner_id.into(),
            balance,
            holdings: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Current cash balance (2 decimal places).
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Shares held for a symbol; absence means zero.
    pub fn holding(&self, symbol: &Symbol) -> u32 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Does the account hold any of this symbol at all?
    pub fn owns(&self, symbol: &Symbol) -> bool {
        self.holdings.contains_key(symbol)
    }

    /// All holdings in symbol order. Every entry has quantity > 0.
    pub fn holdings(&self) -> impl Iterator<Item = (&Symbol, u32)> {
        self.holdings.iter().map(|(s, q)| (s, *q))
    }

    pub fn holdings_count(&self) -> usize {
        self.holdings.len()
    }

    /// The ledger step: validate, then debit/credit cash and adjust the
    /// holding, all-or-nothing.
    ///
    /// Validation runs to completion before the first mutation, so any error
    /// return leaves the account exactly as it was. A SELL that exhausts a
    /// holding removes the entry entirely rather than leaving it at zero.
    pub fn apply(
        &mut self,
        order: &TradeOrder,
        executed_at: Timestamp,
        sequence: u64,
    ) -> Result<TradeRecord, LedgerError> {
        order.validate()?;
        let total = order.total();

        match order.side {
            Side::Buy => {
                if self.balance < total {
                    return Err(LedgerError::InsufficientBalance {
                        available: self.balance,
                        required: total,
                    });
                }
                self.balance -= total;
                *self.holdings.entry(order.symbol.clone()).or_insert(0) += order.quantity;
            }
            Side::Sell => {
                let owned = match self.holdings.get(&order.symbol) {
                    Some(&q) => q,
                    None => return Err(LedgerError::NoSuchHolding(order.symbol.clone())),
                };
                if owned < order.quantity {
                    return Err(LedgerError::InsufficientHoldings {
                        symbol: order.symbol.clone(),
                        owned,
                        requested: order.quantity,
                    });
                }
                self.balance += total;
                let remaining = owned - order.quantity;
                if remaining == 0 {
                    self.holdings.remove(&order.symbol);
                } else {
                    self.holdings.insert(order.symbol.clone(), remaining);
                }
            }
        }
        self.updated_at = executed_at;

        Ok(TradeRecord {
            id: TradeId::new_v4(),
            sequence,
            account_id: self.id,
            symbol: order.symbol.clone(),
            side: order.side,
            quantity: order.quantity,
            price: order.price,
            total,
            executed_at,
        })
    }
}
