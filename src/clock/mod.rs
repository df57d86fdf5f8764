//! Timestamp sources for playlist admission
//!
//! Entries are ordered by the instant they were added. Interactive use
//! reads the wall clock; scripted runs and tests use a logical clock so the
//! order is reproducible.

mod logical;
mod system;
mod traits;

pub use logical::LogicalClock;
pub use system::SystemClock;
pub use traits::{Clock, ClockKind};

/// Build the clock selected by `kind`
pub fn from_kind(kind: ClockKind) -> Box<dyn Clock> {
    match kind {
        ClockKind::System => Box::new(SystemClock::new()),
        ClockKind::Logical => Box::new(LogicalClock::new()),
    }
}
