//! # Session State Container
//!
//! Observable state for the lyrics session, published over `tokio::sync::watch`
//! channels.
//!
//! ## Overview
//!
//! The container owns five observable fields:
//!
//! - `songs` - every cached song, as of the last store synchronization
//! - `search_results` - candidates from the most recent search
//! - `current_song` - the selected song, once its lyrics are available
//! - `is_searching_lyrics` - search in flight
//! - `is_fetching_lyrics` - lyrics fetch in flight
//!
//! Observers get read-only [`watch::Receiver`] views; mutation happens only
//! inside this crate, through the session controller's operations. Each
//! receiver always holds the latest published value, so a UI layer can render
//! the current state immediately and then re-render on change notifications.

use core_library::Song;
use provider_lrclib::SearchResult;
use tokio::sync::watch;

/// Observable session state
///
/// Holds the sending half of one watch channel per field. Receivers are
/// handed out on demand and stay valid for the lifetime of the session.
#[derive(Debug)]
pub struct SessionState {
    pub(crate) songs: watch::Sender<Vec<Song>>,
    pub(crate) search_results: watch::Sender<Vec<SearchResult>>,
    pub(crate) current_song: watch::Sender<Option<Song>>,
    pub(crate) is_searching_lyrics: watch::Sender<bool>,
    pub(crate) is_fetching_lyrics: watch::Sender<bool>,
}

impl SessionState {
    /// Create a state container with empty initial values
    ///
    /// The song list starts empty and is populated asynchronously once the
    /// initial store load completes.
    pub(crate) fn new() -> Self {
        Self {
            songs: watch::Sender::new(Vec::new()),
            search_results: watch::Sender::new(Vec::new()),
            current_song: watch::Sender::new(None),
            is_searching_lyrics: watch::Sender::new(false),
            is_fetching_lyrics: watch::Sender::new(false),
        }
    }

    /// Subscribe to the cached song list
    pub fn songs(&self) -> watch::Receiver<Vec<Song>> {
        self.songs.subscribe()
    }

    /// Subscribe to the current search results
    pub fn search_results(&self) -> watch::Receiver<Vec<SearchResult>> {
        self.search_results.subscribe()
    }

    /// Subscribe to the currently selected song
    pub fn current_song(&self) -> watch::Receiver<Option<Song>> {
        self.current_song.subscribe()
    }

    /// Subscribe to the search busy flag
    pub fn is_searching_lyrics(&self) -> watch::Receiver<bool> {
        self.is_searching_lyrics.subscribe()
    }

    /// Subscribe to the fetch busy flag
    pub fn is_fetching_lyrics(&self) -> watch::Receiver<bool> {
        self.is_fetching_lyrics.subscribe()
    }
}
