use crate::domain::value_objects::Timestamp;

/// Basic clock trait - provides current time.
///
/// The ledger stamps trade records from this, so tests can inject a fixed
/// clock and assert on commit timestamps.
pub trait Clock: Send + Sync {
    /// Get current time from this clock's perspective
    fn now(&self) -> Timestamp;

    /// Get current time as milliseconds since Unix epoch
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}
