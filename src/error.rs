//! Error taxonomy for the library and playlist engine
//!
//! Every variant is a local, recoverable condition. The session layer
//! decides how each one is shown to the user.

use thiserror::Error;

/// Failures raised by the playlist engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// The title (or its added-at instant) is already in the playlist
    #[error("'{title}' has already been added to the playlist")]
    Duplicate { title: String },

    /// No playlist entry carries this title
    #[error("'{title}' was not found in the playlist")]
    NotFound { title: String },

    /// `play` was asked for a title the playlist does not hold
    #[error("'{title}' is not in the playlist")]
    NotInPlaylist { title: String },

    #[error("an entry is already playing")]
    AlreadyPlaying,

    #[error("nothing is playing")]
    NotPlaying,

    #[error("reached the end of the playlist")]
    EndOfList,

    #[error("reached the start of the playlist")]
    StartOfList,

    /// Admission refused because the catalogue has no such record
    #[error("'{title}' does not exist in the library")]
    NotInCatalogue { title: String },
}

/// Failures raised by the song/album catalogue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("'{title}' already exists in the library")]
    DuplicateTitle { title: String },

    #[error("song '{title}' was not found in the library")]
    SongNotFound { title: String },

    #[error("album '{title}' was not found in the library")]
    AlbumNotFound { title: String },

    #[error("song '{song}' is not on album '{album}'")]
    SongNotInAlbum { album: String, song: String },

    #[error("song '{song}' is already on album '{album}'")]
    SongAlreadyInAlbum { album: String, song: String },
}
