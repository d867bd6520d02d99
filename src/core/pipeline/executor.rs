//! Scan execution: walk, hash, group.

use crate::core::comparator::{DigestIndex, DuplicateGroup};
use crate::core::hasher::{ContentHasher, Sha256Hasher};
use crate::core::scanner::{ScanConfig, WalkDirScanner};
use crate::error::DuplicateFinderError;
use crate::events::{null_sender, Event, EventSender, ScanEvent, ScanSummary};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Result of a completed scan
#[derive(Debug)]
pub struct ScanReport {
    /// Root that was scanned
    pub root: PathBuf,
    /// Duplicate groups, in order of first sighting
    pub groups: Vec<DuplicateGroup>,
    /// Qualifying files that were hashed
    pub files_hashed: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ScanReport {
    /// Total redundant copies across all groups
    pub fn duplicate_count(&self) -> usize {
        self.groups.iter().map(DuplicateGroup::duplicate_count).sum()
    }
}

/// Builder for [`DuplicateFinder`]
pub struct DuplicateFinderBuilder {
    config: ScanConfig,
    hasher: Option<Box<dyn ContentHasher>>,
}

impl DuplicateFinderBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
            hasher: None,
        }
    }

    /// Set scanner configuration
    pub fn scan_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Follow symbolic links while walking
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.config.follow_symlinks = follow;
        self
    }

    /// Limit traversal depth
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Visit siblings in file-name order
    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.config.sort_entries = sort;
        self
    }

    /// Replace the content hasher (defaults to SHA-256)
    pub fn hasher(mut self, hasher: Box<dyn ContentHasher>) -> Self {
        self.hasher = Some(hasher);
        self
    }

    /// Build the finder
    pub fn build(self) -> DuplicateFinder {
        DuplicateFinder {
            scanner: WalkDirScanner::new(self.config),
            hasher: self.hasher.unwrap_or_else(|| Box::new(Sha256Hasher::new())),
        }
    }
}

impl Default for DuplicateFinderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks a tree and groups byte-identical images
pub struct DuplicateFinder {
    scanner: WalkDirScanner,
    hasher: Box<dyn ContentHasher>,
}

impl DuplicateFinder {
    /// Create a new finder builder
    pub fn builder() -> DuplicateFinderBuilder {
        DuplicateFinderBuilder::new()
    }

    /// Run a scan without events
    pub fn run(&self, root: &Path) -> Result<ScanReport, DuplicateFinderError> {
        self.run_with_events(root, &null_sender())
    }

    /// Run a scan, reporting progress through `events`.
    ///
    /// The first traversal or read failure aborts the scan and no
    /// partial groups are returned.
    pub fn run_with_events(
        &self,
        root: &Path,
        events: &EventSender,
    ) -> Result<ScanReport, DuplicateFinderError> {
        let start = Instant::now();
        info!(root = %root.display(), algorithm = self.hasher.algorithm(), "scan started");

        let walk = self.scanner.walk(root, events)?;
        events.send(Event::Scan(ScanEvent::Started {
            root: root.to_path_buf(),
        }));

        let mut index = DigestIndex::new();
        for file in walk {
            let file = file?;
            let digest = self.hasher.hash_file(&file.path)?;
            debug!(path = %file.path.display(), format = %file.format, digest = digest.short(), "hashed");

            events.send(Event::Scan(ScanEvent::FileHashed {
                path: file.path.clone(),
                digest: digest.to_string(),
            }));
            index.insert(digest, file.path);
        }

        let files_hashed = index.file_count();
        let distinct = index.bucket_count();
        let groups = index.into_groups();
        let duration_ms = start.elapsed().as_millis() as u64;

        info!(
            files_hashed,
            distinct,
            groups = groups.len(),
            duration_ms,
            "scan completed"
        );
        events.send(Event::Scan(ScanEvent::Completed {
            summary: ScanSummary {
                files_hashed,
                duplicate_groups: groups.len(),
                duration_ms,
            },
        }));

        Ok(ScanReport {
            root: root.to_path_buf(),
            groups,
            files_hashed,
            duration_ms,
        })
    }
}

/// Scan `root` with default settings and return its duplicate groups
pub fn scan(root: impl AsRef<Path>) -> Result<Vec<DuplicateGroup>, DuplicateFinderError> {
    DuplicateFinder::builder()
        .build()
        .run(root.as_ref())
        .map(|report| report.groups)
}
