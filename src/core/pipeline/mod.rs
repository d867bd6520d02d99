//! # Pipeline Module
//!
//! Runs a full duplicate scan over one root directory.
//!
//! ## Stages
//! 1. **Walk** - Lazily discover candidate images under the root
//! 2. **Hash** - Digest each candidate as it is discovered
//! 3. **Group** - Bucket paths by digest, keep buckets of two or more
//!
//! Everything happens on the calling thread. Each file is opened, read
//! and closed before the next one is visited.

mod executor;

pub use executor::{scan, DuplicateFinder, DuplicateFinderBuilder, ScanReport};
