//! # LRCLIB Provider
//!
//! Implements `SongProvider` trait for the LRCLIB lyrics API.
//!
//! ## Overview
//!
//! This module provides:
//! - Free-text lyrics search returning ranked candidates
//! - Full lyrics fetch by track id (plain and synced)
//! - Keyless access with the LRCLIB User-Agent convention
//! - Conversion of API records into library `Song` entities

pub mod client;
pub mod error;
pub mod types;

pub use client::{LrclibClient, SongProvider};
pub use error::{LrclibError, Result};
pub use types::SearchResult;
