//! LRCLIB API client implementation
//!
//! Implements the `SongProvider` trait against the LRCLIB REST API.

use async_trait::async_trait;
use core_library::Song;
use core_runtime::ProviderConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::error::{LrclibError, Result};
use crate::types::{LrclibTrack, SearchResult};

/// LRCLIB API base URL
const LRCLIB_API_BASE: &str = "https://lrclib.net/api";

/// Connect timeout for new connections
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote lyrics provider contract
///
/// The search operation returns lightweight candidates ranked by the
/// provider; the fetch operation returns a fully populated `Song` ready
/// for caching.
///
/// Implementations must be thread-safe (`Send + Sync`) to allow sharing
/// across async tasks.
#[async_trait]
pub trait SongProvider: Send + Sync {
    /// Search for tracks matching a free-text query
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;

    /// Fetch full lyrics for a track by its provider id
    ///
    /// # Errors
    ///
    /// Returns `LrclibError::TrackNotFound` if the id is unknown to the
    /// provider.
    async fn fetch_lyrics(&self, track_id: i64) -> Result<Song>;
}

/// LRCLIB API client
///
/// LRCLIB is a keyless API; per its usage guidelines the client identifies
/// itself with a descriptive User-Agent instead of an API token.
///
/// # Example
///
/// ```ignore
/// use core_runtime::ProviderConfig;
/// use provider_lrclib::{LrclibClient, SongProvider};
///
/// let client = LrclibClient::new(&ProviderConfig::new())?;
/// let results = client.search("bohemian rhapsody").await?;
/// ```
pub struct LrclibClient {
    /// HTTP client with pooling and timeouts configured
    client: Client,

    /// API base URL, no trailing slash
    base_url: String,
}

impl LrclibClient {
    /// Create a new LRCLIB client from provider configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Validated provider settings (base URL override,
    ///   User-Agent, request timeout)
    ///
    /// # Errors
    ///
    /// Returns `LrclibError::Http` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(CONNECT_TIMEOUT)
            .pool_max_idle_per_host(10)
            .user_agent(&config.user_agent)
            .build()?;

        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or(LRCLIB_API_BASE)
            .trim_end_matches('/')
            .to_string();

        Ok(Self { client, base_url })
    }

    /// Build the search endpoint URL for a query
    fn search_url(&self, query: &str) -> String {
        format!("{}/search?q={}", self.base_url, urlencoding::encode(query))
    }

    /// Build the get endpoint URL for a track id
    fn get_url(&self, track_id: i64) -> String {
        format!("{}/get/{}", self.base_url, track_id)
    }

    /// Convert an LRCLIB track record to a library song
    ///
    /// Instrumental tracks carry no lyrics; the lyrics body is stored as an
    /// empty string in that case.
    fn convert_track(track: LrclibTrack) -> Song {
        let mut song = Song::new(
            track.id,
            track.track_name,
            track.artist_name,
            track.plain_lyrics.unwrap_or_default(),
        );
        song.album = track.album_name;
        song.synced_lyrics = track.synced_lyrics;
        song.instrumental = i64::from(track.instrumental);
        song.duration_ms = track.duration.map(|seconds| (seconds * 1000.0) as i64);
        song
    }
}

#[async_trait]
impl SongProvider for LrclibClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = self.search_url(query);
        info!(url = %url, "Searching LRCLIB");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "LRCLIB search failed");
            return Err(LrclibError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let tracks: Vec<LrclibTrack> = serde_json::from_slice(&body).map_err(|e| {
            LrclibError::ParseError(format!("Failed to parse search response: {}", e))
        })?;

        let results: Vec<SearchResult> = tracks
            .into_iter()
            .map(|track| SearchResult {
                id: track.id,
                title: track.track_name,
                artist: track.artist_name,
                album: track.album_name,
            })
            .collect();

        debug!(count = results.len(), "LRCLIB search completed");
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn fetch_lyrics(&self, track_id: i64) -> Result<Song> {
        let url = self.get_url(track_id);
        info!(url = %url, "Fetching lyrics from LRCLIB");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            warn!(track_id, "Track not found on LRCLIB");
            return Err(LrclibError::TrackNotFound { track_id });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "LRCLIB fetch failed");
            return Err(LrclibError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let track: LrclibTrack = serde_json::from_slice(&body).map_err(|e| {
            LrclibError::ParseError(format!("Failed to parse track response: {}", e))
        })?;

        debug!(track_id, "Lyrics fetched");
        Ok(Self::convert_track(track))
    }
}
