//! # Reporter Module
//!
//! Renders duplicate groups as human-readable text.
//!
//! ## Format
//! ```text
//! Found 2 groups of duplicate images:
//!
//! Duplicate group 1:
//! - photos/a.jpg
//! - backup/a.jpg
//!
//! Duplicate group 2:
//! - ...
//! ```
//!
//! When nothing is found a single `No duplicate images found` line is
//! written instead.

use crate::core::comparator::DuplicateGroup;
use std::io::{self, Write};

/// Line written when a scan finds no duplicates
pub const NO_DUPLICATES: &str = "No duplicate images found";

/// Write the report for `groups` to `out`.
///
/// Groups are numbered from 1 in the order given; member paths are
/// written one per line exactly as traversal produced them.
pub fn write_report<W: Write>(out: &mut W, groups: &[DuplicateGroup]) -> io::Result<()> {
    if groups.is_empty() {
        writeln!(out, "{}", NO_DUPLICATES)?;
        return Ok(());
    }

    writeln!(out, "Found {} groups of duplicate images:", groups.len())?;
    for (i, group) in groups.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "Duplicate group {}:", i + 1)?;
        for path in &group.paths {
            writeln!(out, "- {}", path.display())?;
        }
    }

    Ok(())
}

/// Render the report into a `String`
pub fn render_report(groups: &[DuplicateGroup]) -> String {
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail
    let _ = write_report(&mut buffer, groups);
    String::from_utf8_lossy(&buffer).into_owned()
}
