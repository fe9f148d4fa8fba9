//! # Song Repository
//!
//! Data access for cached songs. The repository is the single write path to
//! the `songs` table; everything above it works with `Song` values.
//!
//! ## Features
//!
//! - **Trait-based design**: `SongRepository` trait allows mock implementations
//! - **Upsert semantics**: Inserting an already-cached id replaces the row
//! - **Newest-first listing**: `list_all` orders by date added, descending

use crate::models::Song;
use crate::{LibraryError, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use tracing::{debug, instrument};

/// Repository trait for song data access
///
/// Implementations must be thread-safe (`Send + Sync`) to allow sharing
/// across async tasks.
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// List all cached songs, newest additions first
    async fn list_all(&self) -> Result<Vec<Song>>;

    /// Find a song by its provider id
    ///
    /// # Returns
    ///
    /// `Ok(Some(song))` if cached, `Ok(None)` if not present.
    async fn find_by_id(&self, id: i64) -> Result<Option<Song>>;

    /// Insert a song, replacing any existing row with the same id
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidInput` if the song fails validation.
    async fn insert(&self, song: &Song) -> Result<()>;

    /// Delete a song by id
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a row was deleted, `Ok(false)` if the id was not cached.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Count cached songs
    async fn count(&self) -> Result<i64>;
}

/// SQLite implementation of the song repository
#[derive(Debug, Clone)]
pub struct SqliteSongRepository {
    pool: Pool<Sqlite>,
}

impl SqliteSongRepository {
    /// Create a new repository backed by the given connection pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongRepository for SqliteSongRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Song>> {
        debug!("Listing all cached songs");

        let songs = sqlx::query_as::<_, Song>(
            "SELECT * FROM songs ORDER BY date_added DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = songs.len(), "Listed cached songs");
        Ok(songs)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Song>> {
        debug!(song_id = id, "Finding song by id");

        let song = sqlx::query_as::<_, Song>("SELECT * FROM songs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        debug!(song_id = id, found = song.is_some(), "Find by id completed");
        Ok(song)
    }

    #[instrument(skip(self, song), fields(song_id = song.id))]
    async fn insert(&self, song: &Song) -> Result<()> {
        song.validate().map_err(|message| LibraryError::InvalidInput {
            field: "song".to_string(),
            message,
        })?;

        debug!(song_id = song.id, title = %song.title, "Inserting song");

        sqlx::query(
            "INSERT OR REPLACE INTO songs
             (id, title, artists, album, lyrics, synced_lyrics, instrumental, duration_ms, date_added)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(song.id)
        .bind(&song.title)
        .bind(&song.artists)
        .bind(&song.album)
        .bind(&song.lyrics)
        .bind(&song.synced_lyrics)
        .bind(song.instrumental)
        .bind(song.duration_ms)
        .bind(song.date_added)
        .execute(&self.pool)
        .await?;

        debug!(song_id = song.id, "Song inserted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool> {
        debug!(song_id = id, "Deleting song");

        let result = sqlx::query("DELETE FROM songs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        debug!(song_id = id, deleted, "Delete completed");
        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM songs")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;

    fn sample_song(id: i64) -> Song {
        Song::new(
            id,
            format!("Song {}", id),
            "Test Artist".to_string(),
            "Some lyrics".to_string(),
        )
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let pool = create_test_pool().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        let song = sample_song(1);
        repo.insert(&song).await.unwrap();

        let found = repo.find_by_id(1).await.unwrap();
        assert_eq!(found, Some(song));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let pool = create_test_pool().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        let found = repo.find_by_id(42).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_all_orders_newest_first() {
        let pool = create_test_pool().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        let mut older = sample_song(1);
        older.date_added = 100;
        let mut newer = sample_song(2);
        newer.date_added = 200;

        repo.insert(&older).await.unwrap();
        repo.insert(&newer).await.unwrap();

        let songs = repo.list_all().await.unwrap();
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].id, 2);
        assert_eq!(songs[1].id, 1);
    }

    #[tokio::test]
    async fn test_list_all_breaks_date_ties_by_id() {
        let pool = create_test_pool().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        let mut first = sample_song(1);
        first.date_added = 100;
        let mut second = sample_song(2);
        second.date_added = 100;

        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        let songs = repo.list_all().await.unwrap();
        assert_eq!(songs[0].id, 2);
        assert_eq!(songs[1].id, 1);
    }

    #[tokio::test]
    async fn test_insert_replaces_existing() {
        let pool = create_test_pool().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        let song = sample_song(1);
        repo.insert(&song).await.unwrap();

        let mut updated = song.clone();
        updated.lyrics = "Updated lyrics".to_string();
        repo.insert(&updated).await.unwrap();

        let count = repo.count().await.unwrap();
        assert_eq!(count, 1, "Re-inserting the same id should not duplicate");

        let found = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.lyrics, "Updated lyrics");
    }

    #[tokio::test]
    async fn test_delete_returns_true_then_false() {
        let pool = create_test_pool().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        repo.insert(&sample_song(1)).await.unwrap();

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap(), "Second delete finds no row");
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_rejects_invalid_song() {
        let pool = create_test_pool().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        let mut song = sample_song(1);
        song.title = "   ".to_string();

        let result = repo.insert(&song).await;
        assert!(matches!(
            result,
            Err(LibraryError::InvalidInput { .. })
        ));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_count_empty() {
        let pool = create_test_pool().await.unwrap();
        let repo = SqliteSongRepository::new(pool);

        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
