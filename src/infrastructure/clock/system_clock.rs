use crate::domain::{Clock, Timestamp};
use chrono::Utc;

/// Wall-clock implementation backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        SystemClock
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}
