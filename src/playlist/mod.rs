//! Ordered playlist engine
//!
//! Entries are kept newest first by their added-at instant. A playback
//! cursor walks that order, and a title index answers membership queries
//! for both.

mod catalogue;
mod cursor;
mod engine;
mod list;
mod search;

pub use catalogue::Catalogue;
pub use cursor::{PlaybackCursor, PlaybackState};
pub use engine::Playlist;
pub use list::EntryList;
pub use search::TitleIndex;
