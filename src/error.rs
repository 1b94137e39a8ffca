//! Error types for the inventory builder.
//!
//! All fallible operations in this crate return [`Result<T>`], which uses
//! the [`Error`] enum for error variants.

use std::path::PathBuf;

/// Errors that can occur while building or rendering the inventory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The status file does not exist or could not be opened.
    #[error("Status file {} not found.", path.display())]
    StatusFileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The status file content is not valid JSON.
    #[error("Invalid JSON in status file {}.", path.display())]
    InvalidStatusJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The status file is valid JSON but its top level is not an array.
    #[error("Status file {} does not contain a JSON array of leases.", path.display())]
    NotAnArray { path: PathBuf },

    /// The status file is valid JSON but an entry does not look like a lease.
    ///
    /// No per-record schema validation is attempted beyond what is needed to
    /// read the five lease fields, so this surfaces the first bad entry only.
    #[error("Malformed lease record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error while rendering output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to standard output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for inventory operations.
pub type Result<T> = std::result::Result<T, Error>;
