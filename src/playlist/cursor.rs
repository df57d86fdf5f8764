//! Playback cursor over the ordered entry list
//!
//! The cursor is an index into the `EntryList` plus a playing/stopped
//! state. It never holds a reference into the list; instead the owner
//! reports every insert and removal so the index can be kept pointing at
//! the same logical entry.

use super::list::EntryList;
use super::search::TitleIndex;
use crate::error::PlaylistError;
use crate::model::Entry;
use serde::{Deserialize, Serialize};

/// What the cursor is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing is playing
    #[default]
    Stopped,

    /// The entry at this list index is playing
    Playing(usize),
}

/// Position plus playing/stopped state
#[derive(Debug, Clone, Default)]
pub struct PlaybackCursor {
    state: PlaybackState,
}

impl PlaybackCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing(_))
    }

    /// Start playing the entry titled `title`
    pub fn play<'a>(&mut self, list: &'a EntryList, title: &str) -> Result<&'a Entry, PlaylistError> {
        if self.is_playing() {
            return Err(PlaylistError::AlreadyPlaying);
        }
        let index = list
            .position(title)
            .ok_or_else(|| PlaylistError::NotInPlaylist {
                title: title.to_string(),
            })?;
        let entry = list.get(index).ok_or_else(|| PlaylistError::NotInPlaylist {
            title: title.to_string(),
        })?;
        self.state = PlaybackState::Playing(index);
        Ok(entry)
    }

    pub fn stop(&mut self) -> Result<(), PlaylistError> {
        match self.state {
            PlaybackState::Playing(_) => {
                self.state = PlaybackState::Stopped;
                Ok(())
            }
            PlaybackState::Stopped => Err(PlaylistError::NotPlaying),
        }
    }

    /// Move one entry towards the oldest; does not wrap
    pub fn skip_forward<'a>(&mut self, list: &'a EntryList) -> Result<&'a Entry, PlaylistError> {
        let index = self.playing_index()?;
        let next = index + 1;
        let entry = list.get(next).ok_or(PlaylistError::EndOfList)?;
        self.state = PlaybackState::Playing(next);
        Ok(entry)
    }

    /// Move one entry towards the newest; does not wrap
    pub fn skip_backward<'a>(&mut self, list: &'a EntryList) -> Result<&'a Entry, PlaylistError> {
        let index = self.playing_index()?;
        let previous = index.checked_sub(1).ok_or(PlaylistError::StartOfList)?;
        let entry = list.get(previous).ok_or(PlaylistError::StartOfList)?;
        self.state = PlaybackState::Playing(previous);
        Ok(entry)
    }

    /// The current entry again, cursor unchanged
    pub fn repeat<'a>(&self, list: &'a EntryList) -> Result<&'a Entry, PlaylistError> {
        self.current(list).ok_or(PlaylistError::NotPlaying)
    }

    /// The entry now playing, if any
    pub fn current<'a>(&self, list: &'a EntryList) -> Option<&'a Entry> {
        match self.state {
            PlaybackState::Playing(index) => list.get(index),
            PlaybackState::Stopped => None,
        }
    }

    /// An entry was inserted at `index`; entries from there on shifted down
    pub fn entry_inserted(&mut self, index: usize) {
        if let PlaybackState::Playing(current) = self.state {
            if index <= current {
                self.state = PlaybackState::Playing(current + 1);
            }
        }
    }

    /// The entry at `index` was removed
    ///
    /// Removing the playing entry stops playback; removing one ahead of it
    /// compacts the index.
    pub fn entry_removed(&mut self, index: usize) {
        if let PlaybackState::Playing(current) = self.state {
            if index == current {
                self.state = PlaybackState::Stopped;
            } else if index < current {
                self.state = PlaybackState::Playing(current - 1);
            }
        }
    }

    fn playing_index(&self) -> Result<usize, PlaylistError> {
        match self.state {
            PlaybackState::Playing(index) => Ok(index),
            PlaybackState::Stopped => Err(PlaylistError::NotPlaying),
        }
    }
}
