//! Error types for the LTPs core.
//!
//! Errors are split by layer, mirroring how they are handled:
//!
//! - [`GroceryError`]: contract violations on the in-memory store (bad name,
//!   full list). Surfaced synchronously to the caller, never retried.
//! - [`StoreError`]: failures reported by a [`crate::storage::KeyValueStore`]
//!   backend.
//! - [`StorageError`]: failures of [`crate::storage::GroceryPersistence`],
//!   classified into parse, quota and save failures.
//! - [`LtpsError`]: the crate-wide error with `#[from]` conversions, paired
//!   with the [`Result`] alias.
//!
//! All errors are implemented using the `thiserror` crate.

use std::fmt;

use thiserror::Error;

/// Errors returned by grocery list store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroceryError {
    /// The item name is empty after trimming or too long.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The list already holds the maximum number of items.
    #[error("Capacity error: cannot add more than {max} items")]
    Capacity {
        /// The item ceiling that was hit.
        max: usize,
    },
}

/// Failure reported by a key-value storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend has no room left for the value.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other backend-specific failure.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Errors returned by [`crate::storage::GroceryPersistence`].
///
/// Every variant keeps the underlying cause reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The stored value exists but is not a usable grocery list.
    #[error("Failed to parse grocery list data: {message}")]
    Parse {
        /// Description of what was wrong with the data.
        message: String,
        /// Deserialization failure, if the data was not valid JSON for a list.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The backend refused the write because it is full.
    #[error("Storage quota exceeded")]
    QuotaExceeded {
        #[source]
        source: StoreError,
    },

    /// Any other write or delete failure.
    #[error("{message}")]
    Save {
        /// Which operation failed.
        message: String,
        #[source]
        source: StoreError,
    },
}

/// Coarse classification of a storage failure, suitable for user messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    /// Writing or deleting the list failed.
    SaveFailed,
    /// The stored list could not be parsed.
    ParseFailed,
    /// The backend ran out of space.
    QuotaExceeded,
}

impl fmt::Display for StorageErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SaveFailed => "SAVE_FAILED",
            Self::ParseFailed => "PARSE_FAILED",
            Self::QuotaExceeded => "QUOTA_EXCEEDED",
        };
        f.write_str(label)
    }
}

impl StorageError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> StorageErrorKind {
        match self {
            Self::Parse { .. } => StorageErrorKind::ParseFailed,
            Self::QuotaExceeded { .. } => StorageErrorKind::QuotaExceeded,
            Self::Save { .. } => StorageErrorKind::SaveFailed,
        }
    }

    /// Builds the recorded, cloneable form of this error.
    #[must_use]
    pub fn to_failure(&self) -> StorageFailure {
        StorageFailure {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// A storage failure as recorded by the grocery session.
///
/// Unlike [`StorageError`] this is `Clone`, so views can hold on to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageFailure {
    /// Classification of the failure.
    pub kind: StorageErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for StorageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// The main error type for LTPs operations.
///
/// Consolidates the layer-specific errors so that the application layer and
/// crate entry points can use a single [`Result`] alias.
#[derive(Debug, Error)]
pub enum LtpsError {
    /// A grocery list store operation was rejected.
    #[error(transparent)]
    Grocery(#[from] GroceryError),

    /// A persistence operation failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A key-value backend failed outside of persistence (e.g. on open).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for LTPs operations.
pub type Result<T> = std::result::Result<T, LtpsError>;
