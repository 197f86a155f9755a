//! Per-chunk worker: sniff, decide, copy, name.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use cache_extract_copy::copy_file;
use cache_extract_sniff::sniff_content_type;

use crate::chunk::Chunk;
use crate::listing::FileEntry;
use crate::naming::{NameAllocator, output_name};

/// Read-only state shared by every worker of a run.
#[derive(Debug)]
pub struct WorkerContext<'a> {
    /// Directory extracted files are written to.
    pub destination: &'a Path,
    /// Copy files sniffed as `application/octet-stream`.
    pub keep_unknown: bool,
    /// Run-wide output numbering.
    pub names: &'a NameAllocator,
}

/// What happened to a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Copied to `output`.
    Copied {
        /// Final path of the extracted file.
        output: PathBuf,
    },
    /// Type could not be determined and unknown types are not kept.
    SkippedUnknown,
    /// Not a regular file, or open, sniff, copy or naming failed; the error
    /// was logged.
    Failed,
}

/// Outcome counts for one chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkReport {
    /// Index of the chunk this report belongs to.
    pub chunk_index: usize,
    /// Files copied.
    pub copied: u64,
    /// Files skipped because their type was unknown.
    pub skipped_unknown: u64,
    /// Files that were not regular or failed to open, sniff or copy.
    pub failed: u64,
}

/// Process every entry of a chunk in listing order.
///
/// Never fails: per-entry errors are logged and counted. `on_entry` is called
/// once per entry after it has been handled.
pub fn process_chunk<F>(chunk: &Chunk, ctx: &WorkerContext<'_>, on_entry: F) -> ChunkReport
where
    F: Fn(&FileEntry, &EntryOutcome),
{
    log::debug!(
        "Worker started on chunk {} ({} entries, start index {})",
        chunk.index,
        chunk.len(),
        chunk.start_index
    );

    let mut report = ChunkReport {
        chunk_index: chunk.index,
        ..ChunkReport::default()
    };

    for (position, entry) in chunk.entries.iter().enumerate() {
        let staging = ctx
            .destination
            .join(format!(".extract-{}-{position}.partial", chunk.index));

        let outcome = process_entry(entry, &staging, ctx);

        match &outcome {
            EntryOutcome::Copied { .. } => report.copied += 1,
            EntryOutcome::SkippedUnknown => report.skipped_unknown += 1,
            EntryOutcome::Failed => report.failed += 1,
        }

        on_entry(entry, &outcome);
    }

    log::debug!(
        "Worker finished chunk {}: {} copied, {} unknown, {} failed",
        chunk.index,
        report.copied,
        report.skipped_unknown,
        report.failed
    );

    report
}

/// Handle one entry, staging the copy at `staging` before naming it.
fn process_entry(entry: &FileEntry, staging: &Path, ctx: &WorkerContext<'_>) -> EntryOutcome {
    // Opening a FIFO or device for reading can block, so only regular files
    // (or symlinks to them) are opened.
    if !entry.is_file {
        match fs::metadata(&entry.path) {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => {
                log::warn!("Skipping {}: not a regular file", entry.name);
                return EntryOutcome::Failed;
            }
            Err(e) => {
                log::warn!("Can not stat file {}: {e}", entry.name);
                return EntryOutcome::Failed;
            }
        }
    }

    let content_type = {
        let mut file = match File::open(&entry.path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Can not open file {}: {e}", entry.name);
                return EntryOutcome::Failed;
            }
        };

        match sniff_content_type(&mut file) {
            Ok(content_type) => content_type,
            Err(e) => {
                log::warn!("Unable to get file type of {}: {e}", entry.name);
                return EntryOutcome::Failed;
            }
        }
    };

    if content_type.is_unknown() && !ctx.keep_unknown {
        log::debug!("Skipping {} with unknown file type", entry.name);
        return EntryOutcome::SkippedUnknown;
    }

    if let Err(e) = copy_file(&entry.path, staging) {
        log::warn!("Unable to copy {}: {e}", entry.name);
        discard(staging);
        return EntryOutcome::Failed;
    }

    let Some(number) = ctx.names.allocate() else {
        log::warn!("Unable to name {}: output numbers exhausted", entry.name);
        discard(staging);
        return EntryOutcome::Failed;
    };

    let output = ctx.destination.join(output_name(number, &content_type));

    if let Err(e) = fs::rename(staging, &output) {
        log::warn!(
            "Unable to move {} into place at {}: {e}",
            entry.name,
            output.display()
        );
        discard(staging);
        return EntryOutcome::Failed;
    }

    log::trace!("{} ({content_type}) -> {}", entry.name, output.display());

    EntryOutcome::Copied { output }
}

fn discard(staging: &Path) {
    match fs::remove_file(staging) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
            log::warn!("Unable to remove {}: {e}", staging.display());
        }
        _ => {}
    }
}
