//! # Scanner Module
//!
//! Discovers candidate image files under a root directory.
//!
//! ## Supported Formats
//! - JPEG (.jpg, .jpeg)
//! - PNG (.png)
//! - GIF (.gif)
//! - BMP (.bmp)
//!
//! Matching is on the file name only. Nothing is decoded, so a renamed
//! text file with a `.png` suffix is still a candidate.
//!
//! ## Example
//! ```rust,ignore
//! use duplicate_image_finder::core::scanner::{ScanConfig, WalkDirScanner};
//!
//! let scanner = WalkDirScanner::new(ScanConfig::default());
//! for file in scanner.walk(Path::new("/Users/photos"), &null_sender())? {
//!     println!("{}", file?.path.display());
//! }
//! ```

mod filter;
mod walker;

pub use filter::ImageFilter;
pub use walker::{ImageWalk, ScanConfig, WalkDirScanner};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A regular file whose extension marks it as an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFile {
    /// Path as produced by traversal (root-prefixed)
    pub path: PathBuf,
    /// Format implied by the extension
    pub format: ImageFormat,
}

/// Image formats recognised by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
}

impl ImageFormat {
    /// Detect format from a file extension, ignoring case.
    ///
    /// The extension is given without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    /// Extensions (lowercase, no dot) that map to a format
    pub const EXTENSIONS: &'static [&'static str] = &["jpg", "jpeg", "png", "gif", "bmp"];
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Jpeg => write!(f, "JPEG"),
            ImageFormat::Png => write!(f, "PNG"),
            ImageFormat::Gif => write!(f, "GIF"),
            ImageFormat::Bmp => write!(f, "BMP"),
        }
    }
}
