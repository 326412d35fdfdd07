use crate::domain::{Clock, Timestamp};
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

/// Simulation clock for tests and demos.
///
/// Starts at the wall-clock time of construction and only moves when
/// advanced or set explicitly, so trade timestamps are deterministic.
/// Thread-safe; clones share state.
#[derive(Debug)]
pub struct SimulationClock {
    inner: Arc<RwLock<DateTime<Utc>>>,
}

impl SimulationClock {
    pub fn new() -> Self {
        SimulationClock {
            inner: Arc::new(RwLock::new(Utc::now())),
        }
    }

    /// Create a clock starting at a specific time
    pub fn at(time: DateTime<Utc>) -> Self {
        SimulationClock {
            inner: Arc::new(RwLock::new(time)),
        }
    }

    pub fn advance(&self, duration: Duration) {
        let mut time = self.inner.write();
        *time += duration;
    }

    pub fn set_time(&self, time: Timestamp) {
        *self.inner.write() = time;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SimulationClock {
    fn clone(&self) -> Self {
        SimulationClock {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Clock for SimulationClock {
    fn now(&self) -> Timestamp {
        *self.inner.read()
    }
}
