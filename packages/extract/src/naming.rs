//! Run-wide output file numbering.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::atomic::{AtomicU64, Ordering};

use cache_extract_sniff::ContentType;

/// Hands out output numbers shared by every worker of a run.
///
/// Each call to [`NameAllocator::allocate`] returns a number no other call
/// in the run has returned.
#[derive(Debug)]
pub struct NameAllocator {
    first: u64,
    next: AtomicU64,
}

impl NameAllocator {
    /// Create an allocator whose first number is `first`.
    #[must_use]
    pub const fn new(first: u64) -> Self {
        Self {
            first,
            next: AtomicU64::new(first),
        }
    }

    /// Take the next number.
    ///
    /// Returns `None` once the counter would pass `u64::MAX`; numbers never
    /// wrap around to ones already handed out.
    pub fn allocate(&self) -> Option<u64> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .ok()
    }

    /// The first number this allocator hands out.
    #[must_use]
    pub const fn first(&self) -> u64 {
        self.first
    }

    /// The number the next allocation would return.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }

    /// How many numbers have been handed out.
    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.peek().saturating_sub(self.first)
    }
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Build an output file name: `<number>.<subtype>`.
#[must_use]
pub fn output_name(number: u64, content_type: &ContentType) -> String {
    format!("{number}.{}", content_type.subtype())
}
