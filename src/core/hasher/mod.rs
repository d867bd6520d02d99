//! # Hasher Module
//!
//! Computes content digests for candidate files.
//!
//! Files are streamed through SHA-256 in fixed-size chunks, so memory use
//! does not grow with file size. Equal digests mean byte-identical content;
//! nothing about the image itself is interpreted.
//!
//! ## Example
//! ```rust,ignore
//! use duplicate_image_finder::core::hasher::{ContentHasher, Sha256Hasher};
//!
//! let digest = Sha256Hasher::new().hash_file(&path)?;
//! println!("{}", digest);
//! ```

mod sha256;
mod traits;

pub use sha256::Sha256Hasher;
pub use traits::{ContentDigest, ContentHasher};
