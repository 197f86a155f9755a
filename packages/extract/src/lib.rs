//! Chunked, parallel extraction of cache files by content type.
//!
//! A run goes through two phases:
//!
//! * Planning: list the source directory (no recursion), drop entries whose
//!   names contain a reserved fragment, split the rest into fixed-size chunks
//! * Execution: a `rayon` pool of bounded size works through the chunks; for
//!   each entry a worker sniffs the content type, skips unknown types unless
//!   asked to keep them, and copies the file to `<number>.<subtype>`
//!
//! Output numbers come from one run-wide counter, so names never collide
//! between chunks. Per-file failures are logged and counted, never fatal.
//!
//! # Example
//!
//! ```rust,ignore
//! use cache_extract_operations::{ExtractOptions, ReservedNames, extract};
//!
//! let summary = extract(&options, |progress| {
//!     println!("{}/{} entries", progress.entries_done, progress.entries_total);
//! })?;
//! println!("{} files extracted", summary.copied);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod chunk;
mod dispatch;
mod error;
mod listing;
mod naming;
mod progress;
mod worker;

pub use chunk::{Chunk, partition};
pub use dispatch::{
    ExtractOptions, ExtractPlan, ExtractSummary, extract, plan_extraction, run_plan,
};
pub use error::ExtractError;
pub use listing::{FileEntry, ReservedNames, list_entries};
pub use naming::{NameAllocator, output_name};
pub use progress::{ExtractProgress, ProgressTracker};
pub use worker::{ChunkReport, EntryOutcome, WorkerContext, process_chunk};
