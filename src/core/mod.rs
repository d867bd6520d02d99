//! # Core Module
//!
//! The UI-agnostic duplicate detection engine.
//!
//! ## Modules
//! - `scanner` - Discovers candidate images under a root
//! - `hasher` - Computes content digests
//! - `comparator` - Groups files that share a digest
//! - `pipeline` - Runs walk, hash and group as one scan
//! - `reporter` - Renders groups as text

pub mod comparator;
pub mod hasher;
pub mod pipeline;
pub mod reporter;
pub mod scanner;

// Re-export commonly used types
pub use comparator::DuplicateGroup;
pub use hasher::{ContentDigest, ContentHasher};
pub use pipeline::{scan, DuplicateFinder, ScanReport};
pub use scanner::{ImageFile, ImageFormat, ScanConfig};
