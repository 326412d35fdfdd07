use crate::domain::value_objects::{Side, Symbol, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AccountId;

pub type TradeId = Uuid;

/// An immutable, append-only record of a committed trade.
///
/// `total` is computed exactly once, at commit time, as quantity x price,
/// and is never recalculated afterwards. `sequence` is monotonic per ledger
/// instance and orders records even when two commits share a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: TradeId,
    pub sequence: u64,
    pub account_id: AccountId,
    pub symbol: Symbol,
    pub side: Side,
    pub quantity: u32,
    /// Unit price, fixed-point with 2 decimal places.
    pub price: Decimal,
    /// quantity x price, fixed-point with 2 decimal places.
    pub total: Decimal,
    pub executed_at: Timestamp,
}

impl PartialEq for TradeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TradeRecord {}

impl std::hash::Hash for TradeRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
