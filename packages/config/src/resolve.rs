//! Resolution of numeric settings with logged fallbacks.
//!
//! Bad numeric input never aborts a run: it is reported with `warn!` and a
//! safe value is used instead.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Chunk size used when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Chunk size used when the configured value is unusable.
pub const FALLBACK_CHUNK_SIZE: usize = 5;

/// Parse a strictly positive count.
fn parse_positive(raw: &str) -> Result<usize, String> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("'{raw}' is not a number ({e})"))?;

    if value < 1 {
        return Err(format!("{value} is less than 1"));
    }

    usize::try_from(value).map_err(|_| format!("{value} is too large"))
}

/// Resolve the chunk size.
///
/// Unset means [`DEFAULT_CHUNK_SIZE`]; anything that is not a positive integer
/// means [`FALLBACK_CHUNK_SIZE`].
#[must_use]
pub fn resolve_chunk_size(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_CHUNK_SIZE;
    };

    match parse_positive(raw) {
        Ok(size) => size,
        Err(reason) => {
            log::warn!("Invalid chunk size: {reason}. Set chunk size to {FALLBACK_CHUNK_SIZE}.");
            FALLBACK_CHUNK_SIZE
        }
    }
}

/// Resolve the worker thread count.
///
/// Unset or invalid values mean one worker per logical CPU.
#[must_use]
pub fn resolve_threads(raw: Option<&str>) -> usize {
    let default = num_cpus::get().max(1);

    let Some(raw) = raw else {
        return default;
    };

    match parse_positive(raw) {
        Ok(threads) => threads,
        Err(reason) => {
            log::warn!("Invalid thread count: {reason}. Thread count was not set, using {default}.");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_size_default() {
        assert_eq!(resolve_chunk_size(None), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_chunk_size_valid() {
        assert_eq!(resolve_chunk_size(Some("1")), 1);
        assert_eq!(resolve_chunk_size(Some(" 42 ")), 42);
    }

    #[test]
    fn test_chunk_size_fallback() {
        assert_eq!(resolve_chunk_size(Some("0")), FALLBACK_CHUNK_SIZE);
        assert_eq!(resolve_chunk_size(Some("-3")), FALLBACK_CHUNK_SIZE);
        assert_eq!(resolve_chunk_size(Some("ten")), FALLBACK_CHUNK_SIZE);
        assert_eq!(resolve_chunk_size(Some("")), FALLBACK_CHUNK_SIZE);
    }

    #[test]
    fn test_threads() {
        let default = num_cpus::get().max(1);

        assert_eq!(resolve_threads(None), default);
        assert_eq!(resolve_threads(Some("3")), 3);
        assert_eq!(resolve_threads(Some("0")), default);
        assert_eq!(resolve_threads(Some("many")), default);
    }
}
