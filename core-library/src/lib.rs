//! # Library Management Module
//!
//! Owns the canonical song library database and provides repository patterns
//! for data access.
//!
//! ## Overview
//!
//! This module manages:
//! - SQLite database schema and migrations
//! - The `Song` domain model
//! - The `SongRepository` trait and its SQLite implementation
//!
//! The library is an unbounded cache: songs enter when their lyrics are first
//! fetched and leave only through explicit deletion. Nothing here talks to the
//! network.

pub mod db;
pub mod error;
pub mod models;
pub mod repositories;

pub use db::{create_pool, create_test_pool, DatabaseConfig};
pub use error::{LibraryError, Result};
pub use models::Song;
pub use repositories::{SongRepository, SqliteSongRepository};
