//! LRCLIB API response types
//!
//! Data structures for deserializing LRCLIB API responses.

use serde::{Deserialize, Serialize};

/// LRCLIB track record
///
/// Returned by both the search and get endpoints. Lyrics fields are null for
/// instrumental tracks or tracks without a synced transcription.
///
/// See: https://lrclib.net/docs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LrclibTrack {
    /// Track id in the LRCLIB namespace
    pub id: i64,

    /// Track title
    pub track_name: String,

    /// Artist name
    pub artist_name: String,

    /// Album name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_name: Option<String>,

    /// Track duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Whether the track is instrumental
    #[serde(default)]
    pub instrumental: bool,

    /// Plain text lyrics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_lyrics: Option<String>,

    /// Synced lyrics in LRC format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synced_lyrics: Option<String>,
}

/// Lightweight search candidate shown to the user
///
/// Projection of a track record carrying only what a result list renders.
/// Never persisted; a full `Song` is built when lyrics are fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Track id in the provider's namespace
    pub id: i64,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name, if known
    pub album: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_track() {
        let json = r#"{
            "id": 3396226,
            "trackName": "Borrowed Time",
            "artistName": "Parcels",
            "albumName": "Day/Night",
            "duration": 233.0,
            "instrumental": false,
            "plainLyrics": "Some lyrics",
            "syncedLyrics": "[00:01.00] Some lyrics"
        }"#;

        let track: LrclibTrack = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, 3396226);
        assert_eq!(track.track_name, "Borrowed Time");
        assert_eq!(track.artist_name, "Parcels");
        assert_eq!(track.album_name, Some("Day/Night".to_string()));
        assert_eq!(track.duration, Some(233.0));
        assert!(!track.instrumental);
        assert_eq!(track.plain_lyrics, Some("Some lyrics".to_string()));
    }

    #[test]
    fn test_deserialize_instrumental_track_with_null_lyrics() {
        let json = r#"{
            "id": 7,
            "trackName": "Interlude",
            "artistName": "Nobody",
            "albumName": null,
            "duration": 61.5,
            "instrumental": true,
            "plainLyrics": null,
            "syncedLyrics": null
        }"#;

        let track: LrclibTrack = serde_json::from_str(json).unwrap();
        assert!(track.instrumental);
        assert!(track.plain_lyrics.is_none());
        assert!(track.synced_lyrics.is_none());
        assert!(track.album_name.is_none());
    }

    #[test]
    fn test_deserialize_search_response_array() {
        let json = r#"[
            {
                "id": 1,
                "trackName": "First",
                "artistName": "Artist A",
                "albumName": "Album",
                "duration": 180.0,
                "instrumental": false,
                "plainLyrics": "a",
                "syncedLyrics": null
            },
            {
                "id": 2,
                "trackName": "Second",
                "artistName": "Artist B",
                "duration": 200.0,
                "plainLyrics": "b"
            }
        ]"#;

        let tracks: Vec<LrclibTrack> = serde_json::from_str(json).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id, 1);
        assert_eq!(tracks[1].track_name, "Second");
        assert!(!tracks[1].instrumental, "Missing instrumental defaults to false");
    }
}
