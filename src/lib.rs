//! # Wordbank - Word List Ingestion
//!
//! Loads newline-delimited word lists into a local SQLite database.
//!
//! Wordbank provides:
//! - A three-part filter policy: length bounds, no spaces, no hyphens
//! - SQLite-backed storage with idempotent schema creation
//! - A single-pass loader that commits all inserts as one transaction
//! - TOML configuration for the source and database paths

pub mod config;
pub mod filter;
pub mod loader;
pub mod storage;
pub mod ui;
pub mod word;

// Re-exports for convenient access
pub use filter::FilterPolicy;
pub use loader::{LoadReport, load_words};
pub use storage::WordStore;
pub use word::Word;

/// Result type alias for wordbank operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for wordbank operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
