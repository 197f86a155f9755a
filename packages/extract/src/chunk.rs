//! Partitioning of the filtered listing into fixed-size chunks.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use crate::listing::FileEntry;

/// A contiguous slice of the filtered listing, handled by one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position of this chunk among all chunks.
    pub index: usize,
    /// Position of the chunk's first entry in the filtered listing.
    pub start_index: usize,
    /// Entries in listing order.
    pub entries: Vec<FileEntry>,
}

impl Chunk {
    /// Number of entries in the chunk.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the chunk has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split entries into chunks of `chunk_size`, the last one possibly shorter.
///
/// Yields `ceil(entries.len() / chunk_size)` chunks; chunk `i` starts at
/// `i * chunk_size`. A `chunk_size` of zero is treated as one.
#[must_use]
pub fn partition(entries: Vec<FileEntry>, chunk_size: usize) -> Vec<Chunk> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::with_capacity(entries.len().div_ceil(chunk_size));
    let mut iter = entries.into_iter().peekable();

    while iter.peek().is_some() {
        let index = chunks.len();
        chunks.push(Chunk {
            index,
            start_index: index * chunk_size,
            entries: iter.by_ref().take(chunk_size).collect(),
        });
    }

    chunks
}
