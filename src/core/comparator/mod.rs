//! # Comparator Module
//!
//! Finds duplicates by grouping files on their content digest.
//!
//! ## How It Works
//! 1. Each hashed file is appended to the bucket for its digest
//! 2. Buckets with a single file are dropped
//! 3. Every remaining bucket becomes a [`DuplicateGroup`]
//!
//! Equal digests are the only criterion; names and locations are ignored.

mod grouper;

pub use grouper::DigestIndex;

use crate::core::hasher::ContentDigest;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Two or more files with identical content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Digest shared by every member
    pub digest: ContentDigest,
    /// Members, in traversal order
    pub paths: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Create a new duplicate group
    pub fn new(digest: ContentDigest, paths: Vec<PathBuf>) -> Self {
        Self { digest, paths }
    }

    /// Number of files in the group
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Always false for groups produced by a scan
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of redundant copies (members beyond the first)
    pub fn duplicate_count(&self) -> usize {
        self.paths.len().saturating_sub(1)
    }

    /// Whether `path` is a member of this group
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }
}
