//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use cache_extract_operations::ExtractSummary;
use colored::Colorize;

/// Print a header message.
pub fn print_header(message: &str) {
    println!("\n{} {}\n", "📦", message.bold());
}

/// Print source and destination directories.
pub fn print_paths(source: &Path, destination: &Path) {
    println!("Source:      {}", source.display().to_string().cyan());
    println!("Destination: {}", destination.display().to_string().cyan());
}

/// Print the planned work.
pub fn print_plan(entries: usize, chunks: usize, chunk_size: usize, threads: usize) {
    println!(
        "Copying {} file{} in {} chunk{} of up to {} ({} worker{}).\n",
        entries,
        if entries == 1 { "" } else { "s" },
        chunks,
        if chunks == 1 { "" } else { "s" },
        chunk_size,
        threads,
        if threads == 1 { "" } else { "s" }
    );
}

/// Print the totals of a finished run.
pub fn print_summary(summary: &ExtractSummary) {
    println!(
        "{} Extracted {} file{}.",
        "✅",
        summary.copied.to_string().green().bold(),
        if summary.copied == 1 { "" } else { "s" }
    );
    if let Some(last) = summary.last_name() {
        println!("  {} names {}..{}", "•".dimmed(), summary.first_name, last);
    }
    println!(
        "  {} {} unknown type skipped, {} bookkeeping skipped",
        "•".dimmed(),
        summary.skipped_unknown,
        summary.reserved_skipped
    );

    if summary.failed > 0 {
        print_warning(&format!(
            "{} file{} could not be extracted (see log output).",
            summary.failed,
            if summary.failed == 1 { "" } else { "s" }
        ));
    }
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Print a reminder of where to find usage help.
pub fn print_help_hint() {
    eprintln!("Run with {} to see usage.", "--help".bold());
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", "Warning:".yellow().bold(), message);
}
