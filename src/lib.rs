//! # Duplicate Image Finder
//!
//! Finds image files with byte-identical content anywhere under a
//! directory tree.
//!
//! ## Architecture
//! - `core` - Traversal, hashing and grouping
//! - `events` - Channel-based progress reporting
//! - `error` - Error types shared by the library and CLI

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use crate::core::{scan, DuplicateFinder, DuplicateGroup, ScanReport};
pub use error::{DuplicateFinderError, Result};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the library
///
/// Log lines go to stderr so stdout carries only the report. `RUST_LOG`
/// wins over `default_directive` when set.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
