//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`TalentDeckError`] which provides comprehensive error handling
//! for all talent-deck operations. It uses `thiserror` for ergonomic error definitions
//! and includes specialized error constructors for common failure scenarios.
//!
//! # Public API
//! - [`TalentDeckError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, TalentDeckError>`
//!
//! # Error Categories
//! - **Dataset**: Missing or malformed candidate/interview data files
//! - **Decision store**: Directory resolution, serialization, file system errors
//! - **Listing snapshot**: Missing or stale numbered-list state for `show`
//! - **Review session**: Missing access codes, unknown review commands

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for talent-deck
#[derive(Error, Debug)]
pub enum TalentDeckError {
    // Dataset errors
    #[error("Dataset file does not exist: {path}")]
    DatasetNotFound { path: PathBuf },

    #[error("Failed to read dataset file '{path}': {source}")]
    DatasetReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {what} dataset: {source}")]
    DatasetParseFailed {
        what: String,
        source: serde_json::Error,
    },

    #[error("No candidate or interview found with id '{id}'")]
    EntityNotFound { id: String },

    // Decision store errors
    #[error("Could not determine the talent-deck data directory")]
    StoreDirectoryNotFound,

    #[error("Failed to create store directory '{path}': {source}")]
    StoreDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize decision store: {source}")]
    StoreSerializationFailed { source: serde_json::Error },

    #[error("Failed to write decision store '{path}': {source}")]
    StoreWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read decision store '{path}': {source}")]
    StoreReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse decision store '{path}': {source}")]
    StoreParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Listing snapshot errors
    #[error("No listing found. Run 'candidates' or 'interviews' first to number the rows.")]
    SnapshotNotFound,

    #[error("Failed to read listing snapshot '{path}': {source}")]
    SnapshotReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse listing snapshot '{path}': {source}")]
    SnapshotParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Index must be positive (got 0)")]
    ZeroIndex,

    #[error("Index {index} is out of range (1-{max} available)")]
    IndexOutOfRange { index: usize, max: usize },

    // Review session errors
    #[error("This review context requires an access code. Pass one with --code.")]
    AccessCodeRequired,

    #[error("Unknown review command: '{input}'. Use right, left, maybe, undo or quit.")]
    UnknownReviewCommand { input: String },

    // Generic wrapped errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using TalentDeckError
pub type Result<T> = std::result::Result<T, TalentDeckError>;

impl TalentDeckError {
    /// Create a dataset read failed error
    pub fn dataset_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DatasetReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a dataset parse failed error
    pub fn dataset_parse_failed(what: impl Into<String>, source: serde_json::Error) -> Self {
        Self::DatasetParseFailed {
            what: what.into(),
            source,
        }
    }

    /// Create an entity not found error
    pub fn entity_not_found(id: impl Into<String>) -> Self {
        Self::EntityNotFound { id: id.into() }
    }

    /// Create a store directory creation failed error
    pub fn store_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::StoreDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a store serialization failed error
    pub fn store_serialization_failed(source: serde_json::Error) -> Self {
        Self::StoreSerializationFailed { source }
    }

    /// Create a store write failed error
    pub fn store_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a store read failed error
    pub fn store_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a store parse failed error
    pub fn store_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::StoreParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a snapshot read failed error
    pub fn snapshot_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SnapshotReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a snapshot parse failed error
    pub fn snapshot_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SnapshotParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { index, max }
    }

    /// Create an unknown review command error
    pub fn unknown_review_command(input: impl Into<String>) -> Self {
        Self::UnknownReviewCommand {
            input: input.into(),
        }
    }
}
