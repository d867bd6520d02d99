//! Trait definitions for content hashing.

use crate::error::HashError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Hex-encoded digest of a file's full byte content.
///
/// Two files with equal digests are treated as byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Build a digest from raw hash output
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.iter().map(|b| format!("{:02x}", b)).collect())
    }

    /// The lowercase hex form
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Shortened form for display
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(12)]
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes content digests for files.
///
/// Implementations must read the whole file and release the handle
/// before returning, on success and on error.
pub trait ContentHasher {
    /// Digest the full content of the file at `path`
    fn hash_file(&self, path: &Path) -> Result<ContentDigest, HashError>;

    /// Name of the underlying algorithm
    fn algorithm(&self) -> &'static str;
}
