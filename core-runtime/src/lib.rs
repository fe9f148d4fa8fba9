//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the lyrics session core:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the other workspace crates depend
//! on. It establishes the logging conventions and holds the configuration a
//! host passes in when embedding the core.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CoreConfig, CoreConfigBuilder, ProviderConfig};
pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
