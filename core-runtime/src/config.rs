//! # Core Configuration Module
//!
//! Provides configuration management for the lyrics session core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! instance that holds all settings the core needs at bootstrap time. It
//! enforces fail-fast validation so a misconfigured host errors out before any
//! task is spawned.
//!
//! ## Usage
//!
//! ### Basic Configuration
//!
//! ```
//! use core_runtime::config::CoreConfig;
//!
//! let config = CoreConfig::builder()
//!     .database_path("/path/to/library.db")
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ### Configuration with Provider Overrides
//!
//! ```
//! use core_runtime::config::CoreConfig;
//!
//! let config = CoreConfig::builder()
//!     .database_path("/path/to/library.db")
//!     .provider_base_url("https://lrclib.example.net")
//!     .user_agent("my-player/2.1 (https://example.net)")
//!     .request_timeout_secs(10)
//!     .build()
//!     .expect("Failed to build config");
//! ```

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Default request timeout applied to provider HTTP calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Core configuration for the lyrics session core.
///
/// This struct holds all settings required to initialize the core. Use
/// [`CoreConfigBuilder`] to construct instances.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Path to the SQLite database file
    pub database_path: PathBuf,

    /// Remote lyrics provider configuration
    pub provider: ProviderConfig,
}

/// Configuration for the remote lyrics provider.
///
/// The provider API is keyless, but it asks clients to identify themselves
/// with a descriptive User-Agent. The base URL is overridable for tests and
/// self-hosted instances.
///
/// # Example
///
/// ```
/// use core_runtime::config::ProviderConfig;
///
/// let config = ProviderConfig::new()
///     .with_user_agent("my-player/2.1 (https://example.net)")
///     .with_request_timeout_secs(10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Overrides the provider's default API base URL when set.
    pub base_url: Option<String>,

    /// User-Agent header sent with every provider request.
    ///
    /// Format: "AppName/Version (Contact or homepage)"
    pub user_agent: String,

    /// Timeout in seconds applied to each provider request.
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: format!("stanza/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ProviderConfig {
    /// Creates a new ProviderConfig with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL override
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the per-request timeout in seconds
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(Error::Config(
                    "Provider base URL must start with http:// or https://".to_string(),
                ));
            }
        }

        if self.user_agent.is_empty() {
            return Err(Error::Config("User-Agent cannot be empty".to_string()));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "Request timeout must be greater than 0 seconds".to_string(),
            ));
        }

        if self.request_timeout_secs > 300 {
            return Err(Error::Config(
                "Request timeout exceeds maximum of 300 seconds".to_string(),
            ));
        }

        Ok(())
    }
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Database path is not empty
    /// - Provider configuration is valid
    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(Error::Config("Database path cannot be empty".to_string()));
        }

        self.provider.validate()?;

        Ok(())
    }
}

/// Builder for constructing [`CoreConfig`] instances.
///
/// Use this builder to incrementally set configuration options and then call
/// [`build()`](CoreConfigBuilder::build) to create the final config. The
/// builder validates the result and provides actionable error messages.
#[derive(Default)]
pub struct CoreConfigBuilder {
    database_path: Option<PathBuf>,
    provider: ProviderConfig,
}

impl CoreConfigBuilder {
    /// Sets the database path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    pub fn database_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.database_path = Some(path.into());
        self
    }

    /// Sets the provider API base URL override.
    ///
    /// If not provided, the provider client's built-in default is used.
    pub fn provider_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.provider.base_url = Some(base_url.into());
        self
    }

    /// Sets the User-Agent sent with provider requests.
    ///
    /// Default: `stanza/<crate version>`
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.provider.user_agent = user_agent.into();
        self
    }

    /// Sets the per-request timeout for provider calls.
    ///
    /// Default: 30 seconds
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.provider.request_timeout_secs = secs;
        self
    }

    /// Replaces the whole provider configuration at once.
    pub fn provider_config(mut self, provider: ProviderConfig) -> Self {
        self.provider = provider;
        self
    }

    /// Builds the final `CoreConfig` instance.
    ///
    /// # Returns
    ///
    /// Returns `Ok(CoreConfig)` on success, or an error if:
    /// - The database path is missing
    /// - Configuration values are invalid
    pub fn build(self) -> Result<CoreConfig> {
        let database_path = self.database_path.ok_or_else(|| {
            Error::Config("Database path is required. Use .database_path() to set it.".to_string())
        })?;

        let config = CoreConfig {
            database_path,
            provider: self.provider,
        };

        config.validate()?;

        Ok(config)
    }
}
