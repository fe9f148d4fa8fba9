//! # Session Controller
//!
//! Orchestrates the lyrics session: loading cached songs, searching the
//! remote provider, fetching lyrics, and publishing observable state for a
//! UI layer to render.
//!
//! ## Overview
//!
//! The `SessionController` owns the session state container and is its only
//! writer. It coordinates two collaborators:
//!
//! ```text
//! ┌────────────────────┐
//! │ SessionController  │
//! │  - SessionState    │
//! └──────────┬─────────┘
//!            │
//!            ├──> SongRepository  (cached songs, SQLite)
//!            └──> SongProvider    (remote search and lyrics fetch)
//! ```
//!
//! Operations spawn onto the tokio runtime and return a `JoinHandle` so
//! callers can observe completion; dropping the handle detaches the task.
//! Collaborator failures are logged and observable state keeps its
//! last-known-good value, so a UI layer never sees an error state it has to
//! handle.
//!
//! ## Concurrency
//!
//! Tasks race freely, with one rule: each busy-flag domain carries a
//! generation counter, and a task that is no longer the latest claimant
//! discards its result instead of publishing. A slow fetch can therefore
//! never overwrite the selection that superseded it, and a busy flag is
//! cleared exactly once, by the task that currently owns it.

use core_library::{Song, SongRepository};
use provider_lrclib::{SearchResult, SongProvider};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::state::SessionState;

/// Marks one busy-flag domain as claimed until dropped
///
/// Claiming bumps the domain's generation counter and raises the flag. On
/// drop the flag is lowered only if no later claim happened, so a superseded
/// task never clears the flag out from under the task that owns it.
struct BusyGuard<'a> {
    flag: &'a watch::Sender<bool>,
    counter: &'a AtomicU64,
    generation: u64,
}

impl<'a> BusyGuard<'a> {
    fn claim(flag: &'a watch::Sender<bool>, counter: &'a AtomicU64) -> Self {
        let generation = counter.fetch_add(1, Ordering::SeqCst) + 1;
        flag.send_replace(true);
        Self {
            flag,
            counter,
            generation,
        }
    }

    /// Whether this claim is still the latest in its domain
    fn is_current(&self) -> bool {
        self.counter.load(Ordering::SeqCst) == self.generation
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.is_current() {
            self.flag.send_replace(false);
        }
    }
}

/// Session controller for the lyrics library
///
/// Cheap to clone; all clones share the same state and collaborators.
///
/// # Example
///
/// ```ignore
/// use core_session::SessionController;
///
/// let controller = SessionController::new(repository, provider);
/// let mut songs = controller.songs();
///
/// controller.search_song("bohemian rhapsody");
/// ```
#[derive(Clone)]
pub struct SessionController {
    inner: Arc<Inner>,
}

struct Inner {
    state: SessionState,
    repository: Arc<dyn SongRepository>,
    provider: Arc<dyn SongProvider>,
    fetch_generation: AtomicU64,
    search_generation: AtomicU64,
}

impl SessionController {
    /// Create a controller and start loading the cached song list
    ///
    /// The load runs asynchronously; observers see an empty list until it
    /// completes. Must be called from within a tokio runtime.
    pub fn new(repository: Arc<dyn SongRepository>, provider: Arc<dyn SongProvider>) -> Self {
        let inner = Arc::new(Inner {
            state: SessionState::new(),
            repository,
            provider,
            fetch_generation: AtomicU64::new(0),
            search_generation: AtomicU64::new(0),
        });

        let loader = Arc::clone(&inner);
        tokio::spawn(async move {
            loader.reload_songs().await;
        });

        Self { inner }
    }

    /// Subscribe to the cached song list
    pub fn songs(&self) -> watch::Receiver<Vec<Song>> {
        self.inner.state.songs()
    }

    /// Subscribe to the current search results
    pub fn search_results(&self) -> watch::Receiver<Vec<SearchResult>> {
        self.inner.state.search_results()
    }

    /// Subscribe to the currently selected song
    pub fn current_song(&self) -> watch::Receiver<Option<Song>> {
        self.inner.state.current_song()
    }

    /// Subscribe to the search busy flag
    pub fn is_searching_lyrics(&self) -> watch::Receiver<bool> {
        self.inner.state.is_searching_lyrics()
    }

    /// Subscribe to the fetch busy flag
    pub fn is_fetching_lyrics(&self) -> watch::Receiver<bool> {
        self.inner.state.is_fetching_lyrics()
    }

    /// Select a song and fetch its lyrics
    ///
    /// Publishes the song as `current_song` once available, reading from the
    /// local store when the id is already cached and from the remote
    /// provider otherwise.
    pub fn select_song(&self, song_id: i64) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            inner.fetch_lyrics(song_id).await;
        })
    }

    /// Delete a song from the local store and refresh the song list
    pub fn delete_song(&self, song: Song) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            inner.delete_song(song).await;
        })
    }

    /// Resolve a `"<title>\n<artist>"` query to a selected song
    ///
    /// If a cached song matches the title (first line) and artist (last
    /// line), it is selected directly with no provider call. Otherwise the
    /// provider is searched and the first candidate, if any, is selected.
    /// An empty query is a no-op.
    ///
    /// The fetch busy flag is lowered when the operation completes,
    /// including on the path where the search succeeds but returns no
    /// candidates.
    pub fn auto_search(&self, query: impl Into<String>) -> JoinHandle<()> {
        let query = query.into();
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            inner.auto_search(query).await;
        })
    }

    /// Search the remote provider and publish the result list
    ///
    /// On failure the result list is published as empty and the failure is
    /// logged. An empty query is a no-op.
    pub fn search_song(&self, query: impl Into<String>) -> JoinHandle<()> {
        let query = query.into();
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            inner.search_song(query).await;
        })
    }
}

impl Inner {
    /// Replace the published song list with the store's current contents
    async fn reload_songs(&self) {
        match self.repository.list_all().await {
            Ok(songs) => {
                debug!(count = songs.len(), "Song list synchronized");
                self.state.songs.send_replace(songs);
            }
            Err(e) => warn!(error = %e, "Failed to reload song list"),
        }
    }

    #[instrument(skip(self))]
    async fn fetch_lyrics(&self, song_id: i64) {
        let guard = BusyGuard::claim(&self.state.is_fetching_lyrics, &self.fetch_generation);

        let cached = self.state.songs.borrow().iter().any(|s| s.id == song_id);
        if cached {
            match self.repository.find_by_id(song_id).await {
                Ok(Some(song)) => {
                    if guard.is_current() {
                        debug!(song_id, "Lyrics served from cache");
                        self.state.current_song.send_replace(Some(song));
                    }
                }
                Ok(None) => warn!(song_id, "Song listed but missing from store"),
                Err(e) => warn!(error = %e, song_id, "Failed to read song from store"),
            }
            return;
        }

        match self.provider.fetch_lyrics(song_id).await {
            Ok(song) => {
                if !guard.is_current() {
                    debug!(song_id, "Fetch superseded, discarding result");
                    return;
                }

                info!(song_id, title = %song.title, "Lyrics fetched");
                self.state.current_song.send_replace(Some(song.clone()));

                match self.repository.insert(&song).await {
                    Ok(()) => self.reload_songs().await,
                    Err(e) => warn!(error = %e, song_id, "Failed to cache fetched song"),
                }
            }
            Err(e) => warn!(error = %e, song_id, "Failed to fetch lyrics"),
        }
    }

    #[instrument(skip(self, song), fields(song_id = song.id))]
    async fn delete_song(&self, song: Song) {
        match self.repository.delete(song.id).await {
            Ok(deleted) => {
                debug!(song_id = song.id, deleted, "Song deleted");
                self.reload_songs().await;
            }
            Err(e) => warn!(error = %e, song_id = song.id, "Failed to delete song"),
        }
    }

    #[instrument(skip(self))]
    async fn auto_search(&self, query: String) {
        if query.is_empty() {
            return;
        }

        let title = query.lines().next().unwrap_or_default().trim();
        let artist = query.lines().last().unwrap_or_default().trim();

        let cached_id = {
            let songs = self.state.songs.borrow();
            songs
                .iter()
                .find(|s| s.title == title && s.artists == artist)
                .map(|s| s.id)
        };

        if let Some(song_id) = cached_id {
            debug!(song_id, "Query matches a cached song, selecting directly");
            self.fetch_lyrics(song_id).await;
            return;
        }

        let guard = BusyGuard::claim(&self.state.is_fetching_lyrics, &self.fetch_generation);

        match self.provider.search(&query).await {
            Ok(results) => {
                if !guard.is_current() {
                    debug!("Auto search superseded, discarding results");
                    return;
                }

                match results.first() {
                    Some(first) => {
                        debug!(song_id = first.id, "Auto search selecting first candidate");
                        self.fetch_lyrics(first.id).await;
                    }
                    None => debug!("Auto search returned no results"),
                }
            }
            Err(e) => warn!(error = %e, "Auto search failed"),
        }
    }

    #[instrument(skip(self))]
    async fn search_song(&self, query: String) {
        if query.is_empty() {
            return;
        }

        let guard = BusyGuard::claim(&self.state.is_searching_lyrics, &self.search_generation);

        match self.provider.search(&query).await {
            Ok(results) => {
                if guard.is_current() {
                    debug!(count = results.len(), "Search results published");
                    self.state.search_results.send_replace(results);
                } else {
                    debug!("Search superseded, discarding results");
                }
            }
            Err(e) => {
                warn!(error = %e, "Lyrics search failed");
                if guard.is_current() {
                    self.state.search_results.send_replace(Vec::new());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_guard_raises_and_lowers_flag() {
        let flag = watch::Sender::new(false);
        let counter = AtomicU64::new(0);

        {
            let _guard = BusyGuard::claim(&flag, &counter);
            assert!(*flag.borrow());
        }

        assert!(!*flag.borrow());
    }

    #[test]
    fn test_stale_guard_does_not_lower_flag() {
        let flag = watch::Sender::new(false);
        let counter = AtomicU64::new(0);

        let first = BusyGuard::claim(&flag, &counter);
        let second = BusyGuard::claim(&flag, &counter);

        assert!(!first.is_current());
        assert!(second.is_current());

        drop(first);
        assert!(*flag.borrow(), "Stale claim must leave the flag raised");

        drop(second);
        assert!(!*flag.borrow());
    }

    #[test]
    fn test_guard_generations_are_monotonic() {
        let flag = watch::Sender::new(false);
        let counter = AtomicU64::new(0);

        let first = BusyGuard::claim(&flag, &counter);
        let second = BusyGuard::claim(&flag, &counter);

        assert!(second.generation > first.generation);
    }
}
