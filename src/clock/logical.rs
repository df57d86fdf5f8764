//! Logical clock implementation

use super::traits::Clock;
use chrono::{DateTime, TimeDelta, Utc};

/// Hands out instants one second apart, starting at `origin`
#[derive(Debug, Clone)]
pub struct LogicalClock {
    next: DateTime<Utc>,
}

impl LogicalClock {
    /// Start at the Unix epoch
    pub fn new() -> Self {
        Self::starting_at(DateTime::<Utc>::UNIX_EPOCH)
    }

    pub fn starting_at(origin: DateTime<Utc>) -> Self {
        Self { next: origin }
    }
}

impl Default for LogicalClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for LogicalClock {
    fn now(&mut self) -> DateTime<Utc> {
        let current = self.next;
        self.next = current + TimeDelta::seconds(1);
        current
    }
}
