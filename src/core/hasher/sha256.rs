//! SHA-256 content hasher.

use super::traits::{ContentDigest, ContentHasher};
use crate::error::HashError;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Buffer size for streaming hash computation (64KB)
const HASH_BUFFER_SIZE: usize = 64 * 1024;

/// Streams files through SHA-256
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    pub fn new() -> Self {
        Self
    }

    /// Digest everything a reader yields
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> std::io::Result<ContentDigest> {
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; HASH_BUFFER_SIZE];

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        Ok(ContentDigest::from_bytes(&hasher.finalize()))
    }
}

impl ContentHasher for Sha256Hasher {
    fn hash_file(&self, path: &Path) -> Result<ContentDigest, HashError> {
        let io_error = |source| HashError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let reader = BufReader::with_capacity(HASH_BUFFER_SIZE, file);
        self.hash_reader(reader).map_err(io_error)
    }

    fn algorithm(&self) -> &'static str {
        "SHA-256"
    }
}
