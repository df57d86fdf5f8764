//! Line-oriented command layer over the library and playlist
//!
//! This is the presentation side: it turns text commands into library and
//! playlist calls and turns their results and errors into reply lines.

mod command;
mod runner;

pub use command::{Command, USAGE};
pub use runner::{Outcome, Session};
