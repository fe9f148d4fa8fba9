//! Workspace facade crate.
//!
//! This crate re-exports the individual workspace crates so host applications
//! can depend on `stanza-workspace` alone and reach the whole session core
//! without wiring each crate individually.
//!
//! ```
//! # async fn example() -> core_session::Result<()> {
//! use stanza_workspace::session::{bootstrap, CoreConfig};
//!
//! let config = CoreConfig::builder()
//!     .database_path("library.db")
//!     .user_agent("my-player/2.1 (https://example.net)")
//!     .build()?;
//! let session = bootstrap(config).await?;
//! # Ok(())
//! # }
//! ```

pub use core_library as library;
pub use core_runtime as runtime;
pub use core_session as session;
pub use provider_lrclib as lrclib;

pub use core_session::{bootstrap, SessionController};
