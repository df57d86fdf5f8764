//! Data model for the media catalogue
//!
//! Songs and albums live in the `Library`; the playlist holds `Entry`
//! copies of them stamped with the instant they were added.

mod album;
mod duration;
mod entry;
mod library;
mod song;
mod title;

pub use album::Album;
pub use duration::{format_hh_mm_ss, format_mm_ss};
pub use entry::{Entry, Record};
pub use library::Library;
pub use song::Song;
pub use title::{same_title, TitleKey};
