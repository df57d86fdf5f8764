use super::duration::format_mm_ss;
use serde::{Deserialize, Serialize};

/// A single song, either standalone in the library or part of an album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title (unique case-insensitively within its container)
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Length in seconds
    pub duration_seconds: u32,
}

impl Song {
    /// Create a new song
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration_seconds: u32) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration_seconds,
        }
    }

    /// Duration rendered as `mm:ss`
    pub fn formatted_duration(&self) -> String {
        format_mm_ss(u64::from(self.duration_seconds))
    }
}
