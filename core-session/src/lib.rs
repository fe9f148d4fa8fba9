//! Session facade and bootstrap helpers.
//!
//! This crate wires the local song store and the remote lyrics provider into
//! a [`SessionController`], the state holder a UI layer observes. Host
//! applications typically call [`bootstrap`] with a [`CoreConfig`] and keep
//! the returned controller for the lifetime of the session.

pub mod controller;
pub mod error;
pub mod state;

pub use controller::SessionController;
pub use error::{Result, SessionError};
pub use state::SessionState;

pub use core_library::Song;
pub use core_runtime::{CoreConfig, ProviderConfig};
pub use provider_lrclib::SearchResult;

use core_library::{create_pool, DatabaseConfig, SqliteSongRepository};
use provider_lrclib::LrclibClient;
use std::sync::Arc;

/// Build a session controller from configuration.
///
/// Opens the SQLite song store (running migrations as needed), constructs
/// the LRCLIB client, and starts the initial song list load.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the database cannot be
/// opened or migrated, or the HTTP client cannot be constructed.
///
/// ```
/// # async fn example() -> core_session::Result<()> {
/// use core_session::{bootstrap, CoreConfig};
///
/// let config = CoreConfig::builder()
///     .database_path("library.db")
///     .user_agent("my-player/2.1 (https://example.net)")
///     .build()?;
/// let session = bootstrap(config).await?;
/// let songs = session.songs();
/// # Ok(())
/// # }
/// ```
pub async fn bootstrap(config: CoreConfig) -> Result<SessionController> {
    config.validate()?;

    let pool = create_pool(DatabaseConfig::new(&config.database_path)).await?;
    let repository = Arc::new(SqliteSongRepository::new(pool));
    let provider = Arc::new(LrclibClient::new(&config.provider)?);

    Ok(SessionController::new(repository, provider))
}
