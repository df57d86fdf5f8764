use super::title::same_title;
use super::{Album, Record, Song};
use crate::error::LibraryError;
use crate::playlist::Catalogue;

/// Complete music library containing standalone songs and albums
///
/// Titles are unique across both collections, so a lookup by title is
/// never ambiguous.
#[derive(Debug, Clone, Default)]
pub struct Library {
    /// Standalone songs, in add order
    songs: Vec<Song>,

    /// Albums, in add order
    albums: Vec<Album>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a standalone song to the library
    pub fn add_song(&mut self, song: Song) -> Result<(), LibraryError> {
        self.ensure_free(&song.title)?;
        log::debug!("Library: added song '{}'", song.title);
        self.songs.push(song);
        Ok(())
    }

    /// Remove a standalone song; album songs are untouched
    pub fn remove_song(&mut self, title: &str) -> Result<Song, LibraryError> {
        let index = self
            .songs
            .iter()
            .position(|s| same_title(&s.title, title))
            .ok_or_else(|| LibraryError::SongNotFound {
                title: title.to_string(),
            })?;
        let song = self.songs.remove(index);
        log::debug!("Library: removed song '{}'", song.title);
        Ok(song)
    }

    /// Add an album to the library
    pub fn add_album(&mut self, album: Album) -> Result<(), LibraryError> {
        self.ensure_free(&album.title)?;
        log::debug!("Library: added album '{}'", album.title);
        self.albums.push(album);
        Ok(())
    }

    /// Remove an album together with its songs
    pub fn remove_album(&mut self, title: &str) -> Result<Album, LibraryError> {
        let index = self.album_index(title)?;
        let album = self.albums.remove(index);
        log::debug!("Library: removed album '{}'", album.title);
        Ok(album)
    }

    /// Add a song to a stored album
    pub fn add_song_to_album(&mut self, album_title: &str, song: Song) -> Result<(), LibraryError> {
        let index = self.album_index(album_title)?;
        let album = &mut self.albums[index];
        log::debug!("Library: adding '{}' to album '{}'", song.title, album.title);
        album.add_song(song)
    }

    /// Remove a song from a stored album
    pub fn remove_song_from_album(
        &mut self,
        album_title: &str,
        song_title: &str,
    ) -> Result<Song, LibraryError> {
        let index = self.album_index(album_title)?;
        let album = &mut self.albums[index];
        log::debug!("Library: removing '{}' from album '{}'", song_title, album.title);
        album.remove_song(song_title)
    }

    /// Get a standalone song by title
    pub fn song(&self, title: &str) -> Option<&Song> {
        self.songs.iter().find(|s| same_title(&s.title, title))
    }

    /// Get an album by title
    pub fn album(&self, title: &str) -> Option<&Album> {
        self.albums.iter().find(|a| same_title(&a.title, title))
    }

    /// All standalone songs
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// All albums
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Total number of standalone songs
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// Total number of albums
    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    fn album_index(&self, title: &str) -> Result<usize, LibraryError> {
        self.albums
            .iter()
            .position(|a| same_title(&a.title, title))
            .ok_or_else(|| LibraryError::AlbumNotFound {
                title: title.to_string(),
            })
    }

    fn ensure_free(&self, title: &str) -> Result<(), LibraryError> {
        if self.exists(title) {
            return Err(LibraryError::DuplicateTitle {
                title: title.to_string(),
            });
        }
        Ok(())
    }
}

impl Catalogue for Library {
    fn exists(&self, title: &str) -> bool {
        self.song(title).is_some() || self.album(title).is_some()
    }

    fn get(&self, title: &str) -> Option<Record> {
        self.song(title)
            .cloned()
            .map(Record::Song)
            .or_else(|| self.album(title).cloned().map(Record::Album))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_creation() {
        let lib = Library::new();
        assert_eq!(lib.song_count(), 0);
        assert_eq!(lib.album_count(), 0);
    }

    #[test]
    fn test_add_song() {
        let mut lib = Library::new();
        lib.add_song(Song::new("Test Song", "Test Artist", 180)).unwrap();

        assert_eq!(lib.song_count(), 1);
        assert!(lib.exists("test song"));
        assert_eq!(lib.song("TEST SONG").unwrap().artist, "Test Artist");
    }

    #[test]
    fn test_titles_unique_across_songs_and_albums() {
        let mut lib = Library::new();
        lib.add_album(Album::new("Blue", "Joni Mitchell")).unwrap();

        let err = lib.add_song(Song::new("blue", "Joni Mitchell", 180)).unwrap_err();
        assert_eq!(
            err,
            LibraryError::DuplicateTitle {
                title: "blue".to_string()
            }
        );
        assert_eq!(lib.song_count(), 0);
    }

    #[test]
    fn test_album_songs() {
        let mut lib = Library::new();
        lib.add_album(Album::new("Blue", "Joni Mitchell")).unwrap();
        lib.add_song_to_album("blue", Song::new("River", "Joni Mitchell", 240))
            .unwrap();
        lib.add_song_to_album("Blue", Song::new("A Case of You", "Joni Mitchell", 260))
            .unwrap();

        assert_eq!(lib.album("Blue").unwrap().duration_seconds(), 500);

        let removed = lib.remove_song_from_album("Blue", "river").unwrap();
        assert_eq!(removed.title, "River");
        assert_eq!(lib.album("Blue").unwrap().songs().len(), 1);
    }

    #[test]
    fn test_missing_album() {
        let mut lib = Library::new();
        let err = lib
            .add_song_to_album("Nowhere", Song::new("River", "Joni Mitchell", 240))
            .unwrap_err();
        assert!(matches!(err, LibraryError::AlbumNotFound { .. }));
        assert!(lib.remove_album("Nowhere").is_err());
    }

    #[test]
    fn test_get_materialises_copies() {
        let mut lib = Library::new();
        lib.add_song(Song::new("Hurt", "Johnny Cash", 218)).unwrap();
        lib.add_album(Album::new("American IV", "Johnny Cash")).unwrap();

        assert!(matches!(lib.get("hurt"), Some(Record::Song(_))));
        assert!(matches!(lib.get("american iv"), Some(Record::Album(_))));
        assert!(lib.get("Ring of Fire").is_none());

        lib.remove_song("Hurt").unwrap();
        assert!(!lib.exists("Hurt"));
    }
}
