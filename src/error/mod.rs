//! # Error Module
//!
//! Error types for the duplicate image finder.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - every I/O failure carries the offending path
//! - **Abort on first failure** - nothing here is retried or skipped

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum DuplicateFinderError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Hashing error: {0}")]
    Hash(#[from] HashError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl DuplicateFinderError {
    /// Process exit code for this error.
    ///
    /// Every failure is terminal, so they all map to 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// True when the root directory does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DuplicateFinderError::Scan(ScanError::DirectoryNotFound { .. })
        )
    }
}

/// Errors that occur while walking the directory tree
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory does not exist: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while digesting file contents
#[derive(Error, Debug)]
pub enum HashError {
    #[error("Failed to hash file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, DuplicateFinderError>;
