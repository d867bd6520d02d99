//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted while looking for duplicates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Scan events
    Scan(ScanEvent),
}

/// Events emitted by a single scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanEvent {
    /// Scanning has started
    Started { root: PathBuf },
    /// Traversal descended into a directory
    DirectoryEntered { path: PathBuf },
    /// A qualifying file was digested
    FileHashed { path: PathBuf, digest: String },
    /// Scanning completed
    Completed { summary: ScanSummary },
}

/// Summary of a finished scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Qualifying files that were hashed
    pub files_hashed: usize,
    /// Number of duplicate groups found
    pub duplicate_groups: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}
