//! Script command parsing
//!
//! One command per line: a verb, then `|`-separated arguments so titles may
//! contain spaces. `add-song Teardrop | Massive Attack | 5:30`

use anyhow::{bail, Context, Result};

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddSong {
        title: String,
        artist: String,
        duration_seconds: u32,
    },
    RemoveSong {
        title: String,
    },
    AddAlbum {
        title: String,
        artist: String,
    },
    RemoveAlbum {
        title: String,
    },
    AddToAlbum {
        album: String,
        title: String,
        duration_seconds: u32,
    },
    RemoveFromAlbum {
        album: String,
        title: String,
    },
    ShowLibrary,
    ShowAlbum {
        title: String,
    },
    Queue {
        title: String,
    },
    Dequeue {
        title: String,
    },
    Play {
        title: String,
    },
    Stop,
    Next,
    Previous,
    Repeat,
    Status,
    Search {
        title: String,
    },
    List,
    Help,
    Quit,
}

/// Usage lines shown by `help`
pub const USAGE: &[&str] = &[
    "add-song TITLE | ARTIST | DURATION",
    "remove-song TITLE",
    "add-album TITLE | ARTIST",
    "remove-album TITLE",
    "add-to-album ALBUM | TITLE | DURATION",
    "remove-from-album ALBUM | TITLE",
    "library",
    "album-songs ALBUM",
    "queue TITLE",
    "dequeue TITLE",
    "play TITLE",
    "stop",
    "next",
    "prev",
    "repeat",
    "status",
    "search TITLE",
    "list",
    "help",
    "quit",
];

impl Command {
    /// Parse one line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add-song" => {
                let [title, artist, duration] = fields(verb, rest, ["TITLE", "ARTIST", "DURATION"])?;
                Command::AddSong {
                    title,
                    artist,
                    duration_seconds: parse_duration(&duration)?,
                }
            }
            "remove-song" => {
                let [title] = fields(verb, rest, ["TITLE"])?;
                Command::RemoveSong { title }
            }
            "add-album" => {
                let [title, artist] = fields(verb, rest, ["TITLE", "ARTIST"])?;
                Command::AddAlbum { title, artist }
            }
            "remove-album" => {
                let [title] = fields(verb, rest, ["TITLE"])?;
                Command::RemoveAlbum { title }
            }
            "add-to-album" => {
                let [album, title, duration] = fields(verb, rest, ["ALBUM", "TITLE", "DURATION"])?;
                Command::AddToAlbum {
                    album,
                    title,
                    duration_seconds: parse_duration(&duration)?,
                }
            }
            "remove-from-album" => {
                let [album, title] = fields(verb, rest, ["ALBUM", "TITLE"])?;
                Command::RemoveFromAlbum { album, title }
            }
            "library" => no_fields(verb, rest, Command::ShowLibrary)?,
            "album-songs" => {
                let [title] = fields(verb, rest, ["ALBUM"])?;
                Command::ShowAlbum { title }
            }
            "queue" => {
                let [title] = fields(verb, rest, ["TITLE"])?;
                Command::Queue { title }
            }
            "dequeue" => {
                let [title] = fields(verb, rest, ["TITLE"])?;
                Command::Dequeue { title }
            }
            "play" => {
                let [title] = fields(verb, rest, ["TITLE"])?;
                Command::Play { title }
            }
            "stop" => no_fields(verb, rest, Command::Stop)?,
            "next" => no_fields(verb, rest, Command::Next)?,
            "prev" => no_fields(verb, rest, Command::Previous)?,
            "repeat" => no_fields(verb, rest, Command::Repeat)?,
            "status" => no_fields(verb, rest, Command::Status)?,
            "search" => {
                let [title] = fields(verb, rest, ["TITLE"])?;
                Command::Search { title }
            }
            "list" => no_fields(verb, rest, Command::List)?,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => bail!("unknown command '{}' (try 'help')", verb),
        };

        Ok(Some(command))
    }
}

fn fields<const N: usize>(verb: &str, rest: &str, names: [&str; N]) -> Result<[String; N]> {
    let parts: Vec<String> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('|').map(|p| p.trim().to_string()).collect()
    };

    if parts.iter().any(|p| p.is_empty()) {
        bail!("usage: {} {}", verb, names.join(" | "));
    }
    parts
        .try_into()
        .map_err(|_| anyhow::anyhow!("usage: {} {}", verb, names.join(" | ")))
}

fn no_fields(verb: &str, rest: &str, command: Command) -> Result<Command> {
    if !rest.is_empty() {
        bail!("'{}' takes no arguments", verb);
    }
    Ok(command)
}

/// Seconds, either plain (`215`) or `mm:ss` (`3:35`)
fn parse_duration(text: &str) -> Result<u32> {
    match text.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes: u32 = minutes
                .trim()
                .parse()
                .with_context(|| format!("invalid minutes in duration '{}'", text))?;
            let seconds: u32 = seconds
                .trim()
                .parse()
                .with_context(|| format!("invalid seconds in duration '{}'", text))?;
            if seconds >= 60 {
                bail!("seconds must be below 60 in duration '{}'", text);
            }
            minutes
                .checked_mul(60)
                .and_then(|m| m.checked_add(seconds))
                .with_context(|| format!("duration '{}' is too long", text))
        }
        None => text
            .parse()
            .with_context(|| format!("invalid duration '{}'", text)),
    }
}
