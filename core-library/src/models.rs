//! Domain models for the song library
//!
//! This module contains the persisted `Song` model with validation and
//! database mapping.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A song cached in the local library, keyed by the remote provider's id.
///
/// Songs are created when lyrics are first fetched and live until the user
/// deletes them. The plain `lyrics` body is always present (possibly empty
/// for instrumentals); `synced_lyrics` carries the LRC body when the provider
/// has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Song {
    /// Provider-assigned identifier
    pub id: i64,
    /// Song title
    pub title: String,
    /// Artist display string
    pub artists: String,
    /// Album name, when known
    pub album: Option<String>,
    /// Plain lyrics body
    pub lyrics: String,
    /// Synced lyrics in LRC format, when available
    pub synced_lyrics: Option<String>,
    /// Whether the track is instrumental - SQLite stores as 0 or 1
    pub instrumental: i64,
    /// Duration in milliseconds, when known
    pub duration_ms: Option<i64>,
    /// When the song was cached (unix seconds)
    pub date_added: i64,
}

impl Song {
    /// Create a new song with the current time as `date_added`
    pub fn new(id: i64, title: String, artists: String, lyrics: String) -> Self {
        Self {
            id,
            title,
            artists,
            album: None,
            lyrics,
            synced_lyrics: None,
            instrumental: 0,
            duration_ms: None,
            date_added: chrono::Utc::now().timestamp(),
        }
    }

    /// Validate song data
    pub fn validate(&self) -> Result<(), String> {
        if self.id <= 0 {
            return Err("Song id must be positive".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Song title cannot be empty".to_string());
        }

        if self.artists.trim().is_empty() {
            return Err("Song artists cannot be empty".to_string());
        }

        if let Some(duration_ms) = self.duration_ms {
            if duration_ms <= 0 {
                return Err("Song duration must be positive".to_string());
            }
        }

        Ok(())
    }

    /// Check if the song carries synced lyrics
    pub fn has_synced_lyrics(&self) -> bool {
        self.synced_lyrics
            .as_deref()
            .is_some_and(|body| !body.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_new() {
        let song = Song::new(
            42,
            "Test Song".to_string(),
            "Test Artist".to_string(),
            "la la la".to_string(),
        );
        assert_eq!(song.id, 42);
        assert_eq!(song.title, "Test Song");
        assert_eq!(song.artists, "Test Artist");
        assert_eq!(song.lyrics, "la la la");
        assert!(song.album.is_none());
        assert_eq!(song.instrumental, 0);
        assert!(song.date_added > 0);
    }

    #[test]
    fn test_song_validation() {
        let mut song = Song::new(
            1,
            "Valid".to_string(),
            "Artist".to_string(),
            "lyrics".to_string(),
        );
        assert!(song.validate().is_ok());

        // Non-positive id
        song.id = 0;
        assert!(song.validate().is_err());

        // Empty title
        song.id = 1;
        song.title = "   ".to_string();
        assert!(song.validate().is_err());

        // Empty artists
        song.title = "Valid".to_string();
        song.artists = "".to_string();
        assert!(song.validate().is_err());

        // Negative duration
        song.artists = "Artist".to_string();
        song.duration_ms = Some(-1);
        assert!(song.validate().is_err());

        song.duration_ms = Some(180_000);
        assert!(song.validate().is_ok());
    }

    #[test]
    fn test_has_synced_lyrics() {
        let mut song = Song::new(
            1,
            "Song".to_string(),
            "Artist".to_string(),
            "plain".to_string(),
        );
        assert!(!song.has_synced_lyrics());

        song.synced_lyrics = Some("   ".to_string());
        assert!(!song.has_synced_lyrics());

        song.synced_lyrics = Some("[00:12.00]Line 1".to_string());
        assert!(song.has_synced_lyrics());
    }
}
