//! # CLI Module
//!
//! Command-line interface for the duplicate image finder.
//!
//! ## Usage
//! ```bash
//! # Scan a directory for duplicates
//! image-dedup -d ~/Pictures
//!
//! # Deterministic sibling order
//! image-dedup -d ~/Pictures --sorted
//!
//! # Debug logging and a summary on stderr
//! image-dedup -d ~/Pictures --verbose
//! ```
//!
//! The report goes to stdout; everything else goes to stderr.

use clap::error::ErrorKind;
use clap::Parser;
use console::{style, Term};
use duplicate_image_finder::core::reporter::write_report;
use duplicate_image_finder::error::{DuplicateFinderError, Result};
use duplicate_image_finder::events::{Event, EventChannel, ScanEvent};
use duplicate_image_finder::{DuplicateFinder, ScanReport};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

/// Exit code for usage errors and failed scans
const FAILURE_EXIT_CODE: u8 = 1;

/// Image Dedup - find byte-identical images
#[derive(Parser, Debug)]
#[command(name = "image-dedup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory path to scan for duplicate images
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    dir: String,

    /// Visit directory entries in file-name order
    #[arg(long)]
    sorted: bool,

    /// Follow symbolic links
    #[arg(long)]
    follow_symlinks: bool,

    /// Maximum directory depth to descend
    #[arg(long, value_name = "DEPTH")]
    max_depth: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(FAILURE_EXIT_CODE),
            };
        }
    };

    let directive = if cli.verbose {
        "duplicate_image_finder=debug"
    } else {
        "warn"
    };
    duplicate_image_finder::init_tracing(directive);

    match run_scan(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            Term::stderr()
                .write_line(&format!("{} {}", style("error:").red().bold(), error))
                .ok();
            ExitCode::from(error.exit_code())
        }
    }
}

/// Turn the raw `--dir` value into a root path
fn root_from_arg(dir: &str) -> Result<PathBuf> {
    if dir.trim().is_empty() {
        return Err(DuplicateFinderError::Usage(
            "please provide a directory path using the -d flag".to_string(),
        ));
    }
    Ok(PathBuf::from(dir))
}

fn run_scan(cli: &Cli) -> Result<()> {
    let root = root_from_arg(&cli.dir)?;
    let term = Term::stderr();

    if term.is_term() {
        term.write_line(&format!(
            "{} {}",
            style("Image Dedup").bold().cyan(),
            style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
        ))
        .ok();
    }

    let finder = DuplicateFinder::builder()
        .follow_symlinks(cli.follow_symlinks)
        .max_depth(cli.max_depth)
        .sort_entries(cli.sorted)
        .build();

    let (sender, receiver) = EventChannel::new();

    let progress = ProgressBar::new_spinner();
    if let Ok(spinner) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        progress.set_style(spinner);
    }
    progress.enable_steady_tick(Duration::from_millis(100));

    let progress_clone = progress.clone();
    let event_thread = thread::spawn(move || {
        let mut hashed = 0usize;
        for event in receiver.iter() {
            match event {
                Event::Scan(ScanEvent::Started { root }) => {
                    progress_clone.set_message(format!("Scanning {}", root.display()));
                }
                Event::Scan(ScanEvent::FileHashed { path, .. }) => {
                    hashed += 1;
                    progress_clone.set_message(format!(
                        "{} images hashed ({})",
                        hashed,
                        path.file_name().unwrap_or_default().to_string_lossy()
                    ));
                }
                Event::Scan(ScanEvent::Completed { .. }) => {
                    progress_clone.finish_and_clear();
                }
                Event::Scan(ScanEvent::DirectoryEntered { .. }) => {}
            }
        }
    });

    let result = finder.run_with_events(&root, &sender);

    // Drop sender to signal event thread to finish
    drop(sender);
    event_thread.join().ok();
    progress.finish_and_clear();

    let report = result?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report.groups)?;
    out.flush()?;

    if cli.verbose {
        print_summary(&term, &report);
    }

    Ok(())
}

fn print_summary(term: &Term, report: &ScanReport) {
    term.write_line("").ok();
    term.write_line(&format!(
        "  {} images hashed in {:.1}s",
        style(report.files_hashed).cyan(),
        report.duration_ms as f64 / 1000.0
    ))
    .ok();
    term.write_line(&format!(
        "  {} duplicate groups, {} redundant copies",
        style(report.groups.len()).cyan(),
        style(report.duplicate_count()).cyan()
    ))
    .ok();

    for (i, group) in report.groups.iter().enumerate() {
        term.write_line(&format!(
            "  {} {}",
            style(format!("Group {}:", i + 1)).bold(),
            style(group.digest.as_hex()).dim()
        ))
        .ok();
    }
}
