//! Progress bar utilities for the CLI.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use cache_extract_operations::ExtractProgress;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for an extraction run.
pub struct ExtractBar {
    bar: ProgressBar,
}

impl ExtractBar {
    /// Create a bar over `total` entries.
    ///
    /// If progress is disabled, the bar is hidden.
    #[must_use]
    pub fn new(total: u64, enabled: bool) -> Self {
        if !enabled {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  Extracting [{bar:25.green/dim}] {pos}/{len} files, {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("━━─"),
        );
        Self { bar }
    }

    /// Reflect a progress snapshot.
    pub fn update(&self, progress: &ExtractProgress) {
        self.bar.set_position(progress.entries_done);
        self.bar.set_message(bar_message(progress));
    }

    /// Remove the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// `<copied> extracted`, followed by the entry just processed.
fn bar_message(progress: &ExtractProgress) -> String {
    match progress.current_file {
        Some(ref file) => format!("{} extracted {file}", progress.files_copied),
        None => format!("{} extracted", progress.files_copied),
    }
}
