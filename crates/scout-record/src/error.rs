//! Error types for loading record snapshots.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a snapshot of candidates and jobs.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Failed to read a snapshot file.
    #[error("failed to read snapshot {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The snapshot is not valid JSON for the expected schema.
    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Two candidates share an identifier.
    #[error("duplicate candidate id '{id}' in {path}")]
    DuplicateCandidate {
        /// The repeated identifier.
        id: String,
        /// Snapshot the duplicate was found in.
        path: PathBuf,
    },

    /// Two jobs share an identifier.
    #[error("duplicate job id '{id}' in {path}")]
    DuplicateJob {
        /// The repeated identifier.
        id: String,
        /// Snapshot the duplicate was found in.
        path: PathBuf,
    },
}
