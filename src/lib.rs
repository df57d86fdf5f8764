//! Playlist Manager - a small personal media catalogue
//!
//! This library keeps a catalogue of songs and albums and a playlist that
//! orders a subset of it by the time each item was added, with a playback
//! cursor for skipping through it.

pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod playlist;
pub mod session;

pub use config::SessionConfig;
pub use error::{LibraryError, PlaylistError};
pub use playlist::{PlaybackState, Playlist};
pub use session::Session;
