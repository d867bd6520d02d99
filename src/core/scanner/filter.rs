//! File filtering logic for the scanner.

use super::ImageFormat;
use std::collections::HashSet;
use std::path::Path;

/// Decides which file names count as images
#[derive(Debug, Clone)]
pub struct ImageFilter {
    /// Lowercase extensions to include, without the dot
    extensions: HashSet<String>,
}

impl ImageFilter {
    /// Create a filter over the supported image extensions
    pub fn new() -> Self {
        Self {
            extensions: ImageFormat::EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }

    /// Extension of a path: everything after the last '.' of the file name.
    ///
    /// Unlike [`Path::extension`], a leading dot counts, so `.jpg` has
    /// the extension `jpg`.
    pub fn extension_of(path: &Path) -> Option<String> {
        let name = path.file_name()?.to_string_lossy();
        name.rsplit_once('.').map(|(_, ext)| ext.to_string())
    }

    /// Check if a file should be included
    pub fn should_include(&self, path: &Path) -> bool {
        Self::extension_of(path)
            .map(|ext| self.extensions.contains(&ext.to_ascii_lowercase()))
            .unwrap_or(false)
    }

    /// Get the image format for a path, if it is included
    pub fn get_format(&self, path: &Path) -> Option<ImageFormat> {
        if !self.should_include(path) {
            return None;
        }
        Self::extension_of(path).and_then(|ext| ImageFormat::from_extension(&ext))
    }
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_includes_jpeg() {
        let filter = ImageFilter::new();
        assert!(filter.should_include(Path::new("/photos/image.jpg")));
        assert!(filter.should_include(Path::new("/photos/image.JPEG")));
    }

    #[test]
    fn filter_includes_all_supported_formats() {
        let filter = ImageFilter::new();
        for name in ["a.png", "b.GIF", "c.Bmp", "d.jpeg"] {
            assert!(filter.should_include(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn filter_excludes_non_images() {
        let filter = ImageFilter::new();
        assert!(!filter.should_include(Path::new("/photos/notes.txt")));
        assert!(!filter.should_include(Path::new("/photos/IMG_1234.heic")));
        assert!(!filter.should_include(Path::new("/photos/video.mp4")));
    }

    #[test]
    fn filter_uses_last_extension_only() {
        let filter = ImageFilter::new();
        assert!(filter.should_include(Path::new("/photos/archive.tar.png")));
        assert!(!filter.should_include(Path::new("/photos/photo.jpg.bak")));
    }

    #[test]
    fn filter_handles_no_extension() {
        let filter = ImageFilter::new();
        assert!(!filter.should_include(Path::new("/photos/no_extension")));
        assert!(!filter.should_include(Path::new("/photos/trailing.")));
    }

    #[test]
    fn dotfile_name_is_its_own_extension() {
        let filter = ImageFilter::new();
        assert_eq!(
            ImageFilter::extension_of(Path::new("/photos/.jpg")),
            Some("jpg".to_string())
        );
        assert!(filter.should_include(Path::new("/photos/.jpg")));
    }

    #[test]
    fn get_format_maps_extension() {
        let filter = ImageFilter::new();
        assert_eq!(
            filter.get_format(Path::new("x/y.JPG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(filter.get_format(Path::new("x/y.txt")), None);
    }
}
