use super::duration::format_hh_mm_ss;
use super::title::same_title;
use super::Song;
use crate::error::LibraryError;
use serde::{Deserialize, Serialize};

/// An album: an artist plus songs kept in the order they were added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Album title
    pub title: String,

    /// Album artist
    pub artist: String,

    /// Songs in user-add order (not time sorted)
    songs: Vec<Song>,
}

impl Album {
    /// Create a new empty album
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            songs: Vec::new(),
        }
    }

    /// Append a song; titles are unique within the album
    pub fn add_song(&mut self, song: Song) -> Result<(), LibraryError> {
        if self.contains_song(&song.title) {
            return Err(LibraryError::SongAlreadyInAlbum {
                album: self.title.clone(),
                song: song.title,
            });
        }
        self.songs.push(song);
        Ok(())
    }

    /// Remove a song by title, keeping the order of the rest
    pub fn remove_song(&mut self, title: &str) -> Result<Song, LibraryError> {
        let index = self
            .songs
            .iter()
            .position(|s| same_title(&s.title, title))
            .ok_or_else(|| LibraryError::SongNotInAlbum {
                album: self.title.clone(),
                song: title.to_string(),
            })?;
        Ok(self.songs.remove(index))
    }

    pub fn contains_song(&self, title: &str) -> bool {
        self.songs.iter().any(|s| same_title(&s.title, title))
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Total length, always summed from the current song list
    pub fn duration_seconds(&self) -> u64 {
        self.songs.iter().map(|s| u64::from(s.duration_seconds)).sum()
    }

    /// Total length rendered as `hh:mm:ss`
    pub fn formatted_duration(&self) -> String {
        format_hh_mm_ss(self.duration_seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_follows_song_list() {
        let mut album = Album::new("OK Computer", "Radiohead");
        assert_eq!(album.duration_seconds(), 0);

        album.add_song(Song::new("Airbag", "Radiohead", 284)).unwrap();
        album.add_song(Song::new("Let Down", "Radiohead", 299)).unwrap();
        assert_eq!(album.duration_seconds(), 583);

        album.remove_song("airbag").unwrap();
        assert_eq!(album.duration_seconds(), 299);
        assert_eq!(album.formatted_duration(), "00:04:59");
    }

    #[test]
    fn test_song_order_is_add_order() {
        let mut album = Album::new("Mezzanine", "Massive Attack");
        album.add_song(Song::new("Teardrop", "Massive Attack", 330)).unwrap();
        album.add_song(Song::new("Angel", "Massive Attack", 379)).unwrap();

        let titles: Vec<&str> = album.songs().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Teardrop", "Angel"]);
    }

    #[test]
    fn test_duplicate_song_rejected() {
        let mut album = Album::new("Mezzanine", "Massive Attack");
        album.add_song(Song::new("Angel", "Massive Attack", 379)).unwrap();

        let err = album
            .add_song(Song::new("ANGEL", "Massive Attack", 1))
            .unwrap_err();
        assert!(matches!(err, LibraryError::SongAlreadyInAlbum { .. }));
        assert_eq!(album.songs().len(), 1);
    }

    #[test]
    fn test_remove_missing_song() {
        let mut album = Album::new("Mezzanine", "Massive Attack");
        assert!(album.remove_song("Teardrop").is_err());
    }
}
