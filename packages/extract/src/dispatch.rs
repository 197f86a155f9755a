//! Planning and parallel execution of an extraction run.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::chunk::{Chunk, partition};
use crate::error::ExtractError;
use crate::listing::{FileEntry, ReservedNames, list_entries};
use crate::naming::NameAllocator;
use crate::progress::{ExtractProgress, ProgressTracker};
use crate::worker::{ChunkReport, EntryOutcome, WorkerContext, process_chunk};

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory to scan (not recursed).
    pub source: PathBuf,
    /// Directory to write extracted files to. Created if missing.
    pub destination: PathBuf,
    /// Entries per chunk.
    pub chunk_size: usize,
    /// Size of the worker pool.
    pub threads: usize,
    /// Copy files whose type could not be determined.
    pub keep_unknown: bool,
    /// Entries whose names contain these are never copied.
    pub reserved: ReservedNames,
    /// First output file number.
    pub start_at: u64,
}

/// The filtered, partitioned listing of a source directory.
#[derive(Debug, Clone)]
pub struct ExtractPlan {
    /// The scanned directory.
    pub source: PathBuf,
    /// Chunks in listing order.
    pub chunks: Vec<Chunk>,
    /// Entries across all chunks.
    pub entries_total: usize,
    /// Entries dropped by the reserved-name filter.
    pub reserved_skipped: usize,
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Chunks processed.
    pub chunks: usize,
    /// Entries handed to workers.
    pub entries: usize,
    /// Entries dropped by the reserved-name filter.
    pub reserved_skipped: usize,
    /// Files copied.
    pub copied: u64,
    /// Files skipped because their type was unknown.
    pub skipped_unknown: u64,
    /// Files that were not regular or failed to open, sniff or copy.
    pub failed: u64,
    /// First output number of the run.
    pub first_name: u64,
    /// Output number a following run could start at.
    pub next_name: u64,
}

impl ExtractSummary {
    /// Last output number used, if anything was copied.
    #[must_use]
    pub const fn last_name(&self) -> Option<u64> {
        if self.copied == 0 {
            return None;
        }
        self.next_name.checked_sub(1)
    }
}

/// List, filter and partition a source directory.
///
/// # Arguments
///
/// * `source` - Directory to scan
/// * `reserved` - Reserved-name filter
/// * `chunk_size` - Entries per chunk
///
/// # Errors
///
/// * If the source directory cannot be listed
pub fn plan_extraction(
    source: &Path,
    reserved: &ReservedNames,
    chunk_size: usize,
) -> Result<ExtractPlan, ExtractError> {
    let (kept, reserved_skipped) = reserved.apply(list_entries(source)?);
    let entries_total = kept.len();
    let chunks = partition(kept, chunk_size);

    log::info!(
        "Planned {} entries in {} chunks ({} reserved entries skipped)",
        entries_total,
        chunks.len(),
        reserved_skipped
    );

    Ok(ExtractPlan {
        source: source.to_path_buf(),
        chunks,
        entries_total,
        reserved_skipped,
    })
}

/// Run every chunk of a plan on a bounded worker pool and wait for all of them.
///
/// # Arguments
///
/// * `plan` - Plan from [`plan_extraction`]
/// * `options` - Run settings (`source`, `chunk_size` and `reserved` are
///   already baked into the plan)
/// * `on_progress` - Called after every processed entry
///
/// # Errors
///
/// * If the destination directory cannot be created
/// * If the worker pool cannot be started
pub fn run_plan<F>(
    plan: &ExtractPlan,
    options: &ExtractOptions,
    on_progress: F,
) -> Result<ExtractSummary, ExtractError>
where
    F: Fn(&ExtractProgress) + Sync,
{
    fs::create_dir_all(&options.destination).map_err(|e| ExtractError::CreateDirError {
        path: options.destination.clone(),
        source: e,
    })?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads.max(1))
        .thread_name(|i| format!("extract-worker-{i}"))
        .build()?;

    let names = NameAllocator::new(options.start_at);
    let ctx = WorkerContext {
        destination: &options.destination,
        keep_unknown: options.keep_unknown,
        names: &names,
    };

    let tracker = ProgressTracker::new(plan.entries_total as u64);
    on_progress(&tracker.snapshot(None));

    let on_entry = |entry: &FileEntry, outcome: &EntryOutcome| {
        tracker.record(matches!(outcome, EntryOutcome::Copied { .. }));
        on_progress(&tracker.snapshot(Some(entry.name.clone())));
    };

    log::debug!(
        "Dispatching {} chunks to {} workers",
        plan.chunks.len(),
        pool.current_num_threads()
    );

    let reports: Vec<ChunkReport> = pool.install(|| {
        plan.chunks
            .par_iter()
            .map(|chunk| process_chunk(chunk, &ctx, &on_entry))
            .collect()
    });

    on_progress(&tracker.snapshot(None));

    let mut summary = ExtractSummary {
        chunks: reports.len(),
        entries: plan.entries_total,
        reserved_skipped: plan.reserved_skipped,
        first_name: names.first(),
        next_name: names.peek(),
        ..ExtractSummary::default()
    };

    for report in &reports {
        summary.copied += report.copied;
        summary.skipped_unknown += report.skipped_unknown;
        summary.failed += report.failed;
    }

    log::info!(
        "Extraction finished: {} copied, {} unknown skipped, {} failed",
        summary.copied,
        summary.skipped_unknown,
        summary.failed
    );

    Ok(summary)
}

/// Plan and run an extraction in one step.
///
/// # Errors
///
/// * If the source directory cannot be listed
/// * If the destination directory cannot be created
/// * If the worker pool cannot be started
pub fn extract<F>(options: &ExtractOptions, on_progress: F) -> Result<ExtractSummary, ExtractError>
where
    F: Fn(&ExtractProgress) + Sync,
{
    let plan = plan_extraction(&options.source, &options.reserved, options.chunk_size)?;
    run_plan(&plan, options, on_progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tempfile::TempDir;

    const PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
        0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
        0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
        0x42, 0x60, 0x82,
    ];
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00];
    const UNKNOWN: &[u8] = &[0x13, 0x37, 0x00, 0x42, 0x00, 0x99, 0x01];

    fn options(source: &Path, destination: &Path, chunk_size: usize) -> ExtractOptions {
        ExtractOptions {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            chunk_size,
            threads: 4,
            keep_unknown: false,
            reserved: ReservedNames::default(),
            start_at: 0,
        }
    }

    fn dir_names(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_extract_skips_reserved_and_unreadable() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::write(source.path().join("index"), PNG).unwrap();
        fs::write(source.path().join("abc123"), PNG).unwrap();
        fs::write(source.path().join("def456"), "").unwrap();

        let summary = extract(&options(source.path(), dest.path(), 10), |_| {}).unwrap();

        assert_eq!(dir_names(dest.path()), BTreeSet::from(["0.png".to_string()]));
        assert_eq!(fs::read(dest.path().join("0.png")).unwrap(), PNG);
        assert_eq!(summary.chunks, 1);
        assert_eq!(summary.entries, 2);
        assert_eq!(summary.reserved_skipped, 1);
        assert_eq!(summary.copied, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_plan_start_indices() {
        let source = TempDir::new().unwrap();
        for i in 0..25 {
            fs::write(source.path().join(format!("f_{i:04}")), PNG).unwrap();
        }
        fs::write(source.path().join("data_0"), PNG).unwrap();
        fs::write(source.path().join("data_1"), PNG).unwrap();

        let plan = plan_extraction(source.path(), &ReservedNames::default(), 10).unwrap();

        assert_eq!(plan.entries_total, 25);
        assert_eq!(plan.reserved_skipped, 2);
        assert_eq!(
            plan.chunks.iter().map(|c| c.start_index).collect::<Vec<_>>(),
            vec![0, 10, 20]
        );
        assert_eq!(plan.chunks[2].len(), 5);
    }

    #[test]
    fn test_extract_names_are_unique_across_chunks() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        for i in 0..25 {
            fs::write(source.path().join(format!("f_{i:04}")), PNG).unwrap();
        }

        let summary = extract(&options(source.path(), dest.path(), 10), |_| {}).unwrap();

        let expected: BTreeSet<String> = (0..25).map(|i| format!("{i}.png")).collect();
        assert_eq!(dir_names(dest.path()), expected);
        assert_eq!(summary.chunks, 3);
        assert_eq!(summary.copied, 25);
        assert_eq!(summary.first_name, 0);
        assert_eq!(summary.next_name, 25);
    }

    #[test]
    fn test_extract_unknown_types() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::write(source.path().join("blob"), UNKNOWN).unwrap();

        let skipped = extract(&options(source.path(), dest.path(), 10), |_| {}).unwrap();

        assert_eq!(skipped.skipped_unknown, 1);
        assert!(dir_names(dest.path()).is_empty());

        let mut keep = options(source.path(), dest.path(), 10);
        keep.keep_unknown = true;
        let kept = extract(&keep, |_| {}).unwrap();

        assert_eq!(kept.copied, 1);
        assert_eq!(
            dir_names(dest.path()),
            BTreeSet::from(["0.octet-stream".to_string()])
        );
    }

    #[test]
    fn test_extract_mixed_types_and_start_offset() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::write(source.path().join("f_1"), PNG).unwrap();
        fs::write(source.path().join("f_2"), JPEG).unwrap();
        fs::write(source.path().join("f_3"), "plain words\n").unwrap();

        let mut opts = options(source.path(), dest.path(), 1);
        opts.start_at = 100;
        let summary = extract(&opts, |_| {}).unwrap();

        assert_eq!(summary.chunks, 3);
        assert_eq!(summary.copied, 3);
        assert_eq!(summary.next_name, 103);

        let extensions: BTreeSet<String> = dir_names(dest.path())
            .into_iter()
            .map(|name| {
                let (number, ext) = name.split_once('.').unwrap();
                let number: u64 = number.parse().unwrap();
                assert!((100..103).contains(&number));
                ext.to_string()
            })
            .collect();
        assert_eq!(
            extensions,
            BTreeSet::from(["jpeg".to_string(), "plain".to_string(), "png".to_string()])
        );
    }

    #[test]
    fn test_extract_creates_destination() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let nested = dest.path().join("a/b");
        fs::write(source.path().join("f_1"), PNG).unwrap();

        extract(&options(source.path(), &nested, 10), |_| {}).unwrap();

        assert!(nested.join("0.png").exists());
    }

    #[test]
    fn test_extract_reports_progress() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        for i in 0..7 {
            fs::write(source.path().join(format!("f_{i}")), PNG).unwrap();
        }

        let calls = AtomicU64::new(0);
        let last_done = AtomicU64::new(0);
        extract(&options(source.path(), dest.path(), 3), |p| {
            calls.fetch_add(1, Ordering::SeqCst);
            last_done.fetch_max(p.entries_done, Ordering::SeqCst);
            assert_eq!(p.entries_total, 7);
        })
        .unwrap();

        // Initial and final snapshots plus one per entry.
        assert_eq!(calls.load(Ordering::SeqCst), 9);
        assert_eq!(last_done.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_extract_empty_source() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        let summary = extract(&options(source.path(), dest.path(), 10), |_| {}).unwrap();

        assert_eq!(summary.chunks, 0);
        assert_eq!(summary.copied, 0);
    }

    #[test]
    fn test_extract_unreadable_source_is_fatal() {
        let dest = TempDir::new().unwrap();
        let missing = dest.path().join("missing");

        let result = extract(&options(&missing, dest.path(), 10), |_| {});

        assert!(matches!(result, Err(ExtractError::ReadDirError { .. })));
    }

    #[test]
    fn test_extract_start_at_end_of_range() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::write(source.path().join("f_1"), PNG).unwrap();
        fs::write(source.path().join("f_2"), PNG).unwrap();

        let mut opts = options(source.path(), dest.path(), 10);
        opts.start_at = u64::MAX - 1;
        let summary = extract(&opts, |_| {}).unwrap();

        assert_eq!(summary.copied, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.next_name, u64::MAX);
        assert_eq!(summary.last_name(), Some(u64::MAX - 1));
        assert_eq!(dir_names(dest.path()).len(), 1);
    }

    #[test]
    fn test_summary_last_name() {
        let empty = ExtractSummary::default();
        assert_eq!(empty.last_name(), None);

        let summary = ExtractSummary {
            copied: 3,
            first_name: 100,
            next_name: 103,
            ..ExtractSummary::default()
        };
        assert_eq!(summary.last_name(), Some(102));
    }
}
