use chrono::DateTime;
use playlist_manager::clock::LogicalClock;
use playlist_manager::model::{Album, Entry, Library, Song};
use playlist_manager::playlist::Catalogue;
use playlist_manager::{PlaybackState, Playlist, PlaylistError};

/// Song entry stamped `secs` seconds after the epoch
fn song_at(title: &str, secs: i64) -> Entry {
    Entry::new(
        Song::new(title, "Test Artist", 180),
        DateTime::from_timestamp(secs, 0).unwrap(),
    )
}

fn titles(playlist: &Playlist) -> Vec<String> {
    playlist.iter().map(|e| e.title().to_string()).collect()
}

#[test]
fn test_scenario_insert_play_skip_remove() {
    let mut playlist = Playlist::new();
    playlist.insert_ordered(song_at("A", 1)).unwrap();
    playlist.insert_ordered(song_at("B", 2)).unwrap();
    playlist.insert_ordered(song_at("C", 3)).unwrap();
    assert_eq!(titles(&playlist), vec!["C", "B", "A"]);

    playlist.play("B").unwrap();
    assert_eq!(playlist.current_state(), PlaybackState::Playing(1));

    let next = playlist.skip_forward().unwrap();
    assert_eq!(next.title(), "A");
    assert_eq!(playlist.current_state(), PlaybackState::Playing(2));

    playlist.remove_by_title("C").unwrap();
    assert_eq!(playlist.current_state(), PlaybackState::Playing(1));
    assert_eq!(playlist.now_playing().unwrap().title(), "A");
    assert_eq!(titles(&playlist), vec!["B", "A"]);
}

#[test]
fn test_ordering_invariant_for_shuffled_inserts() {
    let mut playlist = Playlist::new();
    let stamps = [12, 3, 47, 8, 30, 1, 22, 15, 40, 5];
    for (i, secs) in stamps.iter().enumerate() {
        playlist
            .insert_ordered(song_at(&format!("Track {}", i), *secs))
            .unwrap();
    }

    let added: Vec<_> = playlist.iter().map(|e| e.added_at()).collect();
    assert_eq!(added.len(), stamps.len());
    assert!(added.windows(2).all(|pair| pair[0] > pair[1]));
}

#[test]
fn test_duplicate_rejection_leaves_list_unchanged() {
    let mut playlist = Playlist::new();
    playlist.insert_ordered(song_at("A", 1)).unwrap();
    playlist.insert_ordered(song_at("B", 2)).unwrap();
    playlist.play("A").unwrap();
    let before = titles(&playlist);

    let err = playlist.insert_ordered(song_at("b", 9)).unwrap_err();
    assert_eq!(err, PlaylistError::Duplicate { title: "b".to_string() });
    assert_eq!(titles(&playlist), before);
    assert_eq!(playlist.current_state(), PlaybackState::Playing(1));
}

#[test]
fn test_identical_timestamp_rejected() {
    let mut playlist = Playlist::new();
    playlist.insert_ordered(song_at("A", 1)).unwrap();

    let err = playlist.insert_ordered(song_at("Z", 1)).unwrap_err();
    assert!(matches!(err, PlaylistError::Duplicate { .. }));
    assert_eq!(playlist.len(), 1);
}

#[test]
fn test_compaction_and_invalidation() {
    let build = || {
        let mut playlist = Playlist::new();
        playlist.insert_ordered(song_at("A", 5)).unwrap();
        playlist.insert_ordered(song_at("B", 3)).unwrap();
        playlist.insert_ordered(song_at("C", 1)).unwrap();
        playlist.play("B").unwrap();
        playlist
    };

    let mut playlist = build();
    playlist.remove_by_title("A").unwrap();
    assert_eq!(playlist.current_state(), PlaybackState::Playing(0));
    assert_eq!(playlist.now_playing().unwrap().title(), "B");

    let mut playlist = build();
    playlist.remove_by_title("B").unwrap();
    assert_eq!(playlist.current_state(), PlaybackState::Stopped);
}

#[test]
fn test_navigation_boundaries() {
    let mut playlist = Playlist::new();
    playlist.insert_ordered(song_at("A", 1)).unwrap();
    playlist.insert_ordered(song_at("B", 2)).unwrap();

    playlist.play("A").unwrap();
    assert_eq!(playlist.skip_forward().unwrap_err(), PlaylistError::EndOfList);
    assert_eq!(playlist.current_state(), PlaybackState::Playing(1));

    assert_eq!(playlist.skip_backward().unwrap().title(), "B");
    assert_eq!(playlist.skip_backward().unwrap_err(), PlaylistError::StartOfList);
    assert_eq!(playlist.current_state(), PlaybackState::Playing(0));

    assert_eq!(playlist.repeat().unwrap().title(), "B");
    assert_eq!(playlist.current_state(), PlaybackState::Playing(0));
}

#[test]
fn test_state_machine_violations() {
    let mut playlist = Playlist::new();
    playlist.insert_ordered(song_at("A", 1)).unwrap();

    assert_eq!(playlist.stop().unwrap_err(), PlaylistError::NotPlaying);
    assert_eq!(playlist.skip_forward().unwrap_err(), PlaylistError::NotPlaying);
    assert_eq!(
        playlist.play("Missing").unwrap_err(),
        PlaylistError::NotInPlaylist {
            title: "Missing".to_string()
        }
    );

    playlist.play("a").unwrap();
    assert_eq!(playlist.play("A").unwrap_err(), PlaylistError::AlreadyPlaying);
    playlist.stop().unwrap();
    assert_eq!(playlist.current_state(), PlaybackState::Stopped);
}

#[test]
fn test_round_trip_restores_state() {
    let mut playlist = Playlist::new();
    playlist.insert_ordered(song_at("A", 10)).unwrap();
    playlist.insert_ordered(song_at("B", 20)).unwrap();
    playlist.play("A").unwrap();
    let before = (titles(&playlist), playlist.current_state());

    for secs in [5, 15, 25] {
        playlist.insert_ordered(song_at("E", secs)).unwrap();
        playlist.remove_by_title("E").unwrap();
        assert_eq!((titles(&playlist), playlist.current_state()), before);
    }
}

#[test]
fn test_empty_playlist() {
    let mut playlist = Playlist::new();
    assert!(playlist.is_empty());
    assert_eq!(playlist.iter().count(), 0);
    assert!(playlist.now_playing().is_none());
    assert_eq!(
        playlist.remove_by_title("A").unwrap_err(),
        PlaylistError::NotFound {
            title: "A".to_string()
        }
    );
    assert!(!playlist.contains("A"));
}

#[test]
fn test_admit_albums_and_songs_from_library() {
    let mut library = Library::new();
    library.add_song(Song::new("Hurt", "Johnny Cash", 218)).unwrap();
    library.add_album(Album::new("Blue", "Joni Mitchell")).unwrap();
    library
        .add_song_to_album("Blue", Song::new("River", "Joni Mitchell", 240))
        .unwrap();
    library
        .add_song_to_album("Blue", Song::new("California", "Joni Mitchell", 230))
        .unwrap();
    assert!(library.exists("blue"));

    let mut clock = LogicalClock::new();
    let mut playlist = Playlist::new();
    playlist.admit(&library, "Blue", &mut clock).unwrap();
    playlist.admit(&library, "Hurt", &mut clock).unwrap();

    assert_eq!(titles(&playlist), vec!["Hurt", "Blue"]);
    let album = playlist.find("BLUE").unwrap();
    assert_eq!(album.duration_seconds(), 470);
    assert_eq!(album.songs()[0].title, "River");
    assert_eq!(playlist.songs().count(), 1);
    assert_eq!(playlist.albums().count(), 1);
}
