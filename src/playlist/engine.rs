//! The playlist: ordered entries plus the cursor that plays them

use super::catalogue::Catalogue;
use super::cursor::{PlaybackCursor, PlaybackState};
use super::list::EntryList;
use super::search::TitleIndex;
use crate::clock::Clock;
use crate::error::PlaylistError;
use crate::model::{Album, Entry, Record};

/// A playlist owning its entries and playback cursor
///
/// Every mutation of the entry list goes through here so the cursor is told
/// about it in the same call. Not thread-safe by itself; a shared playlist
/// needs one lock around the whole value.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    entries: EntryList,
    cursor: PlaybackCursor,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a catalogue record, stamped with the clock's current instant
    pub fn admit<C>(
        &mut self,
        catalogue: &C,
        title: &str,
        clock: &mut dyn Clock,
    ) -> Result<(), PlaylistError>
    where
        C: Catalogue + ?Sized,
    {
        let not_in_catalogue = || PlaylistError::NotInCatalogue {
            title: title.to_string(),
        };

        if !catalogue.exists(title) {
            return Err(not_in_catalogue());
        }
        if self.contains(title) {
            return Err(PlaylistError::Duplicate {
                title: title.to_string(),
            });
        }

        let record = catalogue.get(title).ok_or_else(not_in_catalogue)?;
        self.insert_ordered(Entry::new(record, clock.now()))
    }

    /// Insert keeping newest-first order
    pub fn insert_ordered(&mut self, entry: Entry) -> Result<(), PlaylistError> {
        let title = entry.title().to_string();
        let added_at = entry.added_at();
        let position = self.entries.insert_ordered(entry)?;
        self.cursor.entry_inserted(position);
        log::debug!("Playlist: inserted '{}' ({}) at {}", title, added_at, position);
        Ok(())
    }

    /// Remove by title, re-anchoring the cursor
    pub fn remove_by_title(&mut self, title: &str) -> Result<Entry, PlaylistError> {
        let (position, entry) = self.entries.remove_by_title(title)?;
        self.cursor.entry_removed(position);
        log::debug!(
            "Playlist: removed '{}' from {}, cursor now {:?}",
            entry.title(),
            position,
            self.cursor.state()
        );
        Ok(entry)
    }

    /// Replace the playlist's copy of an album after its songs changed,
    /// keeping its place and `added_at`
    ///
    /// Returns false when no album entry carries this title; a song entry
    /// with the same title is left alone.
    pub fn refresh_album(&mut self, album: Album) -> bool {
        let Some(position) = self.entries.position(&album.title) else {
            return false;
        };
        match self.entries.get_mut(position) {
            Some(entry) if entry.is_album() => {
                log::debug!("Playlist: refreshed album '{}'", album.title);
                entry.replace_record(Record::Album(album));
                true
            }
            _ => false,
        }
    }

    /// Entries newest first
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Song entries only, in playlist order
    pub fn songs(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| !e.is_album())
    }

    /// Album entries only, in playlist order
    pub fn albums(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_album())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.entries.contains(title)
    }

    pub fn find(&self, title: &str) -> Option<&Entry> {
        self.entries.find(title)
    }

    pub fn play(&mut self, title: &str) -> Result<&Entry, PlaylistError> {
        let entry = self.cursor.play(&self.entries, title)?;
        log::debug!("Playlist: playing '{}'", entry.title());
        Ok(entry)
    }

    pub fn stop(&mut self) -> Result<(), PlaylistError> {
        self.cursor.stop()
    }

    pub fn skip_forward(&mut self) -> Result<&Entry, PlaylistError> {
        self.cursor.skip_forward(&self.entries)
    }

    pub fn skip_backward(&mut self) -> Result<&Entry, PlaylistError> {
        self.cursor.skip_backward(&self.entries)
    }

    pub fn repeat(&self) -> Result<&Entry, PlaylistError> {
        self.cursor.repeat(&self.entries)
    }

    pub fn current_state(&self) -> PlaybackState {
        self.cursor.state()
    }

    pub fn now_playing(&self) -> Option<&Entry> {
        self.cursor.current(&self.entries)
    }
}
