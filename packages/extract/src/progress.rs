//! Progress tracking for extraction runs.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::atomic::{AtomicU64, Ordering};

/// Progress information for an extraction run.
#[derive(Debug, Clone)]
pub struct ExtractProgress {
    /// Total number of entries queued for workers.
    pub entries_total: u64,
    /// Entries processed so far, whatever their outcome.
    pub entries_done: u64,
    /// Files copied so far.
    pub files_copied: u64,
    /// Name of the entry just processed (if any).
    pub current_file: Option<String>,
}

/// Thread-safe progress tracker using atomics.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    entries_total: AtomicU64,
    entries_done: AtomicU64,
    files_copied: AtomicU64,
}

impl ProgressTracker {
    /// Create a tracker for `entries_total` entries.
    #[must_use]
    pub const fn new(entries_total: u64) -> Self {
        Self {
            entries_total: AtomicU64::new(entries_total),
            entries_done: AtomicU64::new(0),
            files_copied: AtomicU64::new(0),
        }
    }

    /// Record one processed entry.
    pub fn record(&self, copied: bool) {
        if copied {
            self.files_copied.fetch_add(1, Ordering::SeqCst);
        }
        self.entries_done.fetch_add(1, Ordering::SeqCst);
    }

    /// Get a progress snapshot.
    #[must_use]
    pub fn snapshot(&self, current_file: Option<String>) -> ExtractProgress {
        ExtractProgress {
            entries_total: self.entries_total.load(Ordering::SeqCst),
            entries_done: self.entries_done.load(Ordering::SeqCst),
            files_copied: self.files_copied.load(Ordering::SeqCst),
            current_file,
        }
    }
}
