//! # image-dedup CLI
//!
//! Command-line interface for the duplicate image finder.
//!
//! ## Usage
//! ```bash
//! image-dedup -d ~/Pictures
//! image-dedup --dir ~/Pictures --sorted --verbose
//! ```

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run()
}
