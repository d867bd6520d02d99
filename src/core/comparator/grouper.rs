//! Groups file paths into buckets keyed by content digest.

use super::DuplicateGroup;
use crate::core::hasher::ContentDigest;
use std::collections::HashMap;
use std::path::PathBuf;

/// Digest-to-paths table built during a single scan.
///
/// Buckets keep their paths in insertion order, and buckets themselves
/// are kept in the order their digest was first seen.
#[derive(Debug, Default)]
pub struct DigestIndex {
    positions: HashMap<ContentDigest, usize>,
    buckets: Vec<(ContentDigest, Vec<PathBuf>)>,
}

impl DigestIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the bucket for `digest`
    pub fn insert(&mut self, digest: ContentDigest, path: PathBuf) {
        match self.positions.get(&digest) {
            Some(&index) => self.buckets[index].1.push(path),
            None => {
                self.positions.insert(digest.clone(), self.buckets.len());
                self.buckets.push((digest, vec![path]));
            }
        }
    }

    /// Number of files inserted so far
    pub fn file_count(&self) -> usize {
        self.buckets.iter().map(|(_, paths)| paths.len()).sum()
    }

    /// Number of distinct digests seen
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Consume the index, keeping only buckets with two or more paths
    pub fn into_groups(self) -> Vec<DuplicateGroup> {
        self.buckets
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(digest, paths)| DuplicateGroup::new(digest, paths))
            .collect()
    }
}
