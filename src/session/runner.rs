//! Command execution against a library and its playlist

use super::command::{Command, USAGE};
use crate::clock::{self, Clock};
use crate::config::SessionConfig;
use crate::error::PlaylistError;
use crate::model::{Album, Entry, Library, Song};
use crate::playlist::{PlaybackState, Playlist};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// What the caller should do after a line has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print these lines and keep reading
    Reply(Vec<String>),

    /// Stop reading input
    Quit,
}

/// One user's library, playlist and clock
pub struct Session {
    config: SessionConfig,
    library: Library,
    playlist: Playlist,
    clock: Box<dyn Clock>,
}

impl Session {
    /// Create a session using the clock named in `config`
    pub fn new(config: SessionConfig) -> Self {
        let clock = clock::from_kind(config.clock);
        Self::with_clock(config, clock)
    }

    /// Create a session with an explicit clock
    pub fn with_clock(config: SessionConfig, clock: Box<dyn Clock>) -> Self {
        log::info!(
            "Session started (cascade removals: {}, clock: {:?})",
            config.cascade_removals,
            config.clock
        );
        Self {
            config,
            library: Library::new(),
            playlist: Playlist::new(),
            clock,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Read commands until EOF or `quit`, writing every reply to `out`
    pub fn run_script<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for (number, line) in input.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", number + 1))?;
            match self.run_line(&line) {
                Outcome::Reply(lines) => {
                    for reply in lines {
                        writeln!(out, "{}", reply).context("Failed to write reply")?;
                    }
                }
                Outcome::Quit => {
                    log::info!("Quit requested at line {}", number + 1);
                    break;
                }
            }
        }
        out.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Parse and execute one line; failures become an error reply
    pub fn run_line(&mut self, line: &str) -> Outcome {
        let result = Command::parse(line).and_then(|command| match command {
            None => Ok(Outcome::Reply(Vec::new())),
            Some(Command::Quit) => Ok(Outcome::Quit),
            Some(command) => self.execute(command).map(Outcome::Reply),
        });

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Command '{}' failed: {}", line.trim(), e);
                Outcome::Reply(vec![format!("Error - {}", e)])
            }
        }
    }

    /// Execute a parsed command, returning the reply lines
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>> {
        log::debug!("Executing {:?}", command);
        let reply = match command {
            Command::AddSong {
                title,
                artist,
                duration_seconds,
            } => {
                self.library
                    .add_song(Song::new(title.clone(), artist, duration_seconds))?;
                vec![format!("Song '{}' has been added to the library.", title)]
            }
            Command::RemoveSong { title } => {
                let song = self.library.remove_song(&title)?;
                let mut reply = vec![format!("Song '{}' has been removed from the library.", song.title)];
                reply.extend(self.cascade(&song.title)?);
                reply
            }
            Command::AddAlbum { title, artist } => {
                self.library.add_album(Album::new(title.clone(), artist))?;
                vec![format!("Album '{}' has been added to the library.", title)]
            }
            Command::RemoveAlbum { title } => {
                let album = self.library.remove_album(&title)?;
                let mut reply = vec![format!("Album '{}' has been removed from the library.", album.title)];
                reply.extend(self.cascade(&album.title)?);
                reply
            }
            Command::AddToAlbum {
                album,
                title,
                duration_seconds,
            } => {
                let artist = self
                    .library
                    .album(&album)
                    .map(|a| a.artist.clone())
                    .unwrap_or_default();
                self.library
                    .add_song_to_album(&album, Song::new(title.clone(), artist, duration_seconds))?;
                self.sync_album(&album);
                vec![format!("Song '{}' has been added to album '{}'.", title, album)]
            }
            Command::RemoveFromAlbum { album, title } => {
                let song = self.library.remove_song_from_album(&album, &title)?;
                self.sync_album(&album);
                vec![format!("Song '{}' has been removed from album '{}'.", song.title, album)]
            }
            Command::ShowLibrary => self.show_library(),
            Command::ShowAlbum { title } => self.show_album(&title)?,
            Command::Queue { title } => {
                self.playlist
                    .admit(&self.library, &title, self.clock.as_mut())?;
                vec![format!("'{}' has been added to the playlist.", title)]
            }
            Command::Dequeue { title } => {
                let entry = self.playlist.remove_by_title(&title)?;
                vec![format!("'{}' has been removed from the playlist.", entry.title())]
            }
            Command::Play { title } => {
                let entry = self.playlist.play(&title)?;
                vec![format!("Now playing: {}", describe(entry))]
            }
            Command::Stop => {
                let title = self
                    .playlist
                    .now_playing()
                    .map(|e| e.title().to_string())
                    .unwrap_or_default();
                self.playlist.stop()?;
                vec![format!("Stopped '{}'.", title)]
            }
            Command::Next => {
                let entry = self.playlist.skip_forward()?;
                vec![format!("Now playing: {}", describe(entry))]
            }
            Command::Previous => {
                let entry = self.playlist.skip_backward()?;
                vec![format!("Now playing: {}", describe(entry))]
            }
            Command::Repeat => {
                let entry = self.playlist.repeat()?;
                vec![format!("Now playing: {} (repeat)", describe(entry))]
            }
            Command::Status => vec![self.status()],
            Command::Search { title } => {
                let entry = self
                    .playlist
                    .find(&title)
                    .ok_or_else(|| PlaylistError::NotFound { title: title.clone() })?;
                vec![
                    format!("Found: {}", describe(entry)),
                    format!("  Date added: {}", stamp(entry)),
                ]
            }
            Command::List => self.show_playlist(),
            Command::Help => {
                let mut reply = vec!["Commands:".to_string()];
                reply.extend(USAGE.iter().map(|u| format!("  {}", u)));
                reply
            }
            Command::Quit => Vec::new(),
        };
        Ok(reply)
    }

    /// Drop a deleted library record from the playlist when configured to
    fn cascade(&mut self, title: &str) -> Result<Vec<String>> {
        if !self.config.cascade_removals || !self.playlist.contains(title) {
            return Ok(Vec::new());
        }
        let entry = self.playlist.remove_by_title(title)?;
        log::info!("Cascaded removal of '{}' into the playlist", entry.title());
        Ok(vec![format!("'{}' has also been removed from the playlist.", entry.title())])
    }

    fn sync_album(&mut self, title: &str) {
        if let Some(album) = self.library.album(title) {
            self.playlist.refresh_album(album.clone());
        }
    }

    fn status(&self) -> String {
        match (self.playlist.current_state(), self.playlist.now_playing()) {
            (PlaybackState::Playing(index), Some(entry)) => format!(
                "Playing '{}' ({} of {}).",
                entry.title(),
                index + 1,
                self.playlist.len()
            ),
            _ => "Stopped.".to_string(),
        }
    }

    fn show_playlist(&self) -> Vec<String> {
        if self.playlist.is_empty() {
            return vec!["The playlist is empty.".to_string()];
        }

        let playing = match self.playlist.current_state() {
            PlaybackState::Playing(index) => Some(index),
            PlaybackState::Stopped => None,
        };

        let mut reply = vec!["Playlist (most recently added first):".to_string()];
        for (index, entry) in self.playlist.iter().enumerate() {
            let marker = if playing == Some(index) { '>' } else { ' ' };
            reply.push(format!(
                "{} {}. {} added {}",
                marker,
                index + 1,
                describe(entry),
                stamp(entry)
            ));
        }
        reply
    }

    fn show_library(&self) -> Vec<String> {
        let mut reply = vec![format!("Songs ({}):", self.library.song_count())];
        for song in self.library.songs() {
            reply.push(format!(
                "  {} - {} ({})",
                song.title,
                song.artist,
                song.formatted_duration()
            ));
        }
        reply.push(format!("Albums ({}):", self.library.album_count()));
        for album in self.library.albums() {
            reply.push(format!(
                "  {} - {} ({} songs, {})",
                album.title,
                album.artist,
                album.songs().len(),
                album.formatted_duration()
            ));
        }
        reply
    }

    fn show_album(&self, title: &str) -> Result<Vec<String>> {
        let album = self
            .library
            .album(title)
            .with_context(|| format!("album '{}' was not found in the library", title))?;

        let mut reply = vec![format!("{} - {} ({}):", album.title, album.artist, album.formatted_duration())];
        for (index, song) in album.songs().iter().enumerate() {
            reply.push(format!("  {}. {} ({})", index + 1, song.title, song.formatted_duration()));
        }
        Ok(reply)
    }
}

fn describe(entry: &Entry) -> String {
    format!(
        "[{}] {} - {} ({})",
        entry.record().kind(),
        entry.title(),
        entry.artist(),
        entry.record().formatted_duration()
    )
}

fn stamp(entry: &Entry) -> String {
    entry.added_at().format("%Y-%m-%d %H:%M:%S").to_string()
}
