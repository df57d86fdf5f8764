//! Clock trait definition

use chrono::{DateTime, Utc};

/// Source of added-at instants - allows swapping wall-clock and logical time
pub trait Clock {
    /// The instant to stamp on the entry being admitted now
    fn now(&mut self) -> DateTime<Utc>;
}

/// Which clock a session should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockKind {
    /// Wall-clock time; two adds within one tick collide
    #[default]
    System,

    /// Strictly increasing instants, one second apart
    Logical,
}
