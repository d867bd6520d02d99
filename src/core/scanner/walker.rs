//! Directory walking implementation using walkdir.

use super::{filter::ImageFilter, ImageFile};
use crate::error::ScanError;
use crate::events::{Event, EventSender, ScanEvent};
use std::fs;
use std::io;
use std::path::Path;
use tracing::trace;
use walkdir::WalkDir;

/// Configuration for the directory scanner
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Whether to follow symbolic links
    pub follow_symlinks: bool,
    /// Maximum directory depth (None = unlimited)
    pub max_depth: Option<usize>,
    /// Visit siblings in file-name order instead of directory order
    pub sort_entries: bool,
}

/// Scanner implementation using the walkdir crate
#[derive(Debug, Clone)]
pub struct WalkDirScanner {
    config: ScanConfig,
    filter: ImageFilter,
}

impl WalkDirScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            filter: ImageFilter::new(),
        }
    }

    /// Start a depth-first walk of `root`.
    ///
    /// The root is checked up front: it must exist and be a directory.
    /// The returned iterator yields each qualifying file once and stops
    /// being useful after its first `Err`.
    pub fn walk<'a>(
        &'a self,
        root: &Path,
        events: &EventSender,
    ) -> Result<ImageWalk<'a>, ScanError> {
        let metadata = fs::metadata(root).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ScanError::DirectoryNotFound {
                    path: root.to_path_buf(),
                }
            } else {
                ScanError::Walk {
                    path: root.to_path_buf(),
                    source: e,
                }
            }
        })?;

        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut walker = WalkDir::new(root).follow_links(self.config.follow_symlinks);

        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        if self.config.sort_entries {
            walker = walker.sort_by_file_name();
        }

        Ok(ImageWalk {
            entries: walker.into_iter(),
            filter: &self.filter,
            events: events.clone(),
        })
    }
}

/// Lazy sequence of candidate image files under a root.
///
/// Directories, symlinks that are not followed, and non-image files are
/// skipped silently. Traversal errors are yielded as they occur.
pub struct ImageWalk<'a> {
    entries: walkdir::IntoIter,
    filter: &'a ImageFilter,
    events: EventSender,
}

impl Iterator for ImageWalk<'_> {
    type Item = Result<ImageFile, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(walk_error(e))),
            };

            let file_type = entry.file_type();

            if file_type.is_dir() {
                trace!(path = %entry.path().display(), "entering directory");
                self.events.send(Event::Scan(ScanEvent::DirectoryEntered {
                    path: entry.path().to_path_buf(),
                }));
                continue;
            }

            if !file_type.is_file() {
                continue;
            }

            let Some(format) = self.filter.get_format(entry.path()) else {
                continue;
            };

            return Some(Ok(ImageFile {
                path: entry.into_path(),
                format,
            }));
        }
    }
}

fn walk_error(error: walkdir::Error) -> ScanError {
    let path = error.path().map(Path::to_path_buf).unwrap_or_default();
    ScanError::Walk {
        path,
        source: io::Error::from(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::ImageFormat;
    use crate::events::{null_sender, EventChannel};
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        path
    }

    fn collect(scanner: &WalkDirScanner, root: &Path) -> Vec<ImageFile> {
        scanner
            .walk(root, &null_sender())
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn walk_empty_directory_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = WalkDirScanner::new(ScanConfig::default());

        assert!(collect(&scanner, temp_dir.path()).is_empty());
    }

    #[test]
    fn walk_finds_single_image() {
        let temp_dir = TempDir::new().unwrap();
        create_test_image(temp_dir.path(), "photo.jpg");

        let scanner = WalkDirScanner::new(ScanConfig::default());
        let files = collect(&scanner, temp_dir.path());

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("photo.jpg"));
        assert_eq!(files[0].format, ImageFormat::Jpeg);
    }

    #[test]
    fn walk_excludes_non_image_files() {
        let temp_dir = TempDir::new().unwrap();
        create_test_image(temp_dir.path(), "photo.png");
        File::create(temp_dir.path().join("document.txt")).unwrap();
        File::create(temp_dir.path().join("photo.heic")).unwrap();

        let scanner = WalkDirScanner::new(ScanConfig::default());
        let files = collect(&scanner, temp_dir.path());

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("photo.png"));
    }

    #[test]
    fn walk_includes_hidden_files() {
        let temp_dir = TempDir::new().unwrap();
        create_test_image(temp_dir.path(), ".hidden.gif");

        let scanner = WalkDirScanner::new(ScanConfig::default());
        assert_eq!(collect(&scanner, temp_dir.path()).len(), 1);
    }

    #[test]
    fn walk_traverses_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        create_test_image(temp_dir.path(), "root.jpg");
        create_test_image(&nested, "deep.bmp");

        let scanner = WalkDirScanner::new(ScanConfig::default());
        assert_eq!(collect(&scanner, temp_dir.path()).len(), 2);
    }

    #[test]
    fn directory_named_like_an_image_is_not_a_candidate() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("album.jpg")).unwrap();

        let scanner = WalkDirScanner::new(ScanConfig::default());
        assert!(collect(&scanner, temp_dir.path()).is_empty());
    }

    #[test]
    fn max_depth_limits_descent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("sub");
        fs::create_dir(&nested).unwrap();
        create_test_image(temp_dir.path(), "top.jpg");
        create_test_image(&nested, "below.jpg");

        let config = ScanConfig {
            max_depth: Some(1),
            ..Default::default()
        };
        let scanner = WalkDirScanner::new(config);
        let files = collect(&scanner, temp_dir.path());

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("top.jpg"));
    }

    #[test]
    fn sorted_walk_visits_siblings_by_name() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["c.png", "a.png", "b.png"] {
            create_test_image(temp_dir.path(), name);
        }

        let config = ScanConfig {
            sort_entries: true,
            ..Default::default()
        };
        let scanner = WalkDirScanner::new(config);
        let names: Vec<_> = collect(&scanner, temp_dir.path())
            .into_iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn walk_reports_entered_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();

        let scanner = WalkDirScanner::new(ScanConfig::default());
        let (sender, receiver) = EventChannel::new();
        let _ = scanner.walk(temp_dir.path(), &sender).unwrap().count();
        drop(sender);

        let entered = receiver
            .iter()
            .filter(|e| matches!(e, Event::Scan(ScanEvent::DirectoryEntered { .. })))
            .count();
        assert_eq!(entered, 2);
    }

    #[test]
    fn walk_nonexistent_directory_returns_not_found() {
        let scanner = WalkDirScanner::new(ScanConfig::default());
        let result = scanner.walk(Path::new("/nonexistent/path/12345"), &null_sender());

        assert!(matches!(result, Err(ScanError::DirectoryNotFound { .. })));
    }

    #[test]
    fn walk_file_root_returns_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_image(temp_dir.path(), "photo.jpg");

        let scanner = WalkDirScanner::new(ScanConfig::default());
        let result = scanner.walk(&file, &null_sender());

        assert!(matches!(result, Err(ScanError::NotADirectory { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn unfollowed_symlinks_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let target = create_test_image(temp_dir.path(), "real.jpg");
        std::os::unix::fs::symlink(&target, temp_dir.path().join("link.jpg")).unwrap();

        let scanner = WalkDirScanner::new(ScanConfig::default());
        let files = collect(&scanner, temp_dir.path());

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("real.jpg"));
    }

    #[cfg(unix)]
    #[test]
    fn broken_symlink_aborts_when_following() {
        let temp_dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("gone.jpg"),
            temp_dir.path().join("dangling.jpg"),
        )
        .unwrap();

        let config = ScanConfig {
            follow_symlinks: true,
            ..Default::default()
        };
        let scanner = WalkDirScanner::new(config);
        let result: Result<Vec<_>, _> = scanner
            .walk(temp_dir.path(), &null_sender())
            .unwrap()
            .collect();

        match result {
            Err(ScanError::Walk { path, .. }) => assert!(path.ends_with("dangling.jpg")),
            other => panic!("expected walk error, got {other:?}"),
        }
    }
}
