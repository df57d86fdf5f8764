//! Session configuration

use crate::clock::ClockKind;

/// Configuration for a catalogue + playlist session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Deleting a song or album from the library also drops it from the
    /// playlist
    pub cascade_removals: bool,

    /// Source of added-at instants
    pub clock: ClockKind,
}

impl SessionConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            cascade_removals: true,
            clock: ClockKind::System,
        }
    }

    /// Set whether library removals cascade into the playlist
    pub fn with_cascade(mut self, cascade: bool) -> Self {
        self.cascade_removals = cascade;
        self
    }

    /// Set the clock kind
    pub fn with_clock(mut self, clock: ClockKind) -> Self {
        self.clock = clock;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
