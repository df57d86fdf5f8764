use super::{Album, Song};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A canonical catalogue record: either a song or an album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Record {
    Song(Song),
    Album(Album),
}

impl Record {
    pub fn title(&self) -> &str {
        match self {
            Record::Song(song) => &song.title,
            Record::Album(album) => &album.title,
        }
    }

    pub fn artist(&self) -> &str {
        match self {
            Record::Song(song) => &song.artist,
            Record::Album(album) => &album.artist,
        }
    }

    /// Length in seconds; albums sum their songs
    pub fn duration_seconds(&self) -> u64 {
        match self {
            Record::Song(song) => u64::from(song.duration_seconds),
            Record::Album(album) => album.duration_seconds(),
        }
    }

    /// `mm:ss` for songs, `hh:mm:ss` for albums
    pub fn formatted_duration(&self) -> String {
        match self {
            Record::Song(song) => song.formatted_duration(),
            Record::Album(album) => album.formatted_duration(),
        }
    }

    pub fn is_album(&self) -> bool {
        matches!(self, Record::Album(_))
    }

    /// Short label used when listing mixed records
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Song(_) => "song",
            Record::Album(_) => "album",
        }
    }
}

impl From<Song> for Record {
    fn from(song: Song) -> Self {
        Record::Song(song)
    }
}

impl From<Album> for Record {
    fn from(album: Album) -> Self {
        Record::Album(album)
    }
}

/// A record copied into the playlist, stamped with the instant it was added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    record: Record,
    added_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(record: impl Into<Record>, added_at: DateTime<Utc>) -> Self {
        Self {
            record: record.into(),
            added_at,
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn title(&self) -> &str {
        self.record.title()
    }

    pub fn artist(&self) -> &str {
        self.record.artist()
    }

    pub fn duration_seconds(&self) -> u64 {
        self.record.duration_seconds()
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    pub fn is_album(&self) -> bool {
        self.record.is_album()
    }

    /// Songs carried by an album entry; empty for a song entry
    pub fn songs(&self) -> &[Song] {
        match &self.record {
            Record::Song(_) => &[],
            Record::Album(album) => album.songs(),
        }
    }

    /// Swap in a fresh copy of the record, keeping `added_at`
    pub(crate) fn replace_record(&mut self, record: Record) {
        self.record = record;
    }
}
