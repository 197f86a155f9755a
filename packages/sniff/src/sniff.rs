//! Leading-byte content detection.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::Read;

use crate::content_type::ContentType;
use crate::error::SniffError;

/// Maximum number of leading bytes inspected.
pub const SNIFF_LEN: usize = 512;

/// Sniff the content type of a readable source positioned at its start.
///
/// Reads at most [`SNIFF_LEN`] bytes. Short sources are fine as long as at
/// least one byte is available.
///
/// # Arguments
///
/// * `reader` - Source to read the leading bytes from
///
/// # Errors
///
/// * If reading fails
/// * If the source is empty
pub fn sniff_content_type<R: Read>(reader: &mut R) -> Result<ContentType, SniffError> {
    let mut window = Vec::with_capacity(SNIFF_LEN);

    reader
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut window)
        .map_err(|e| SniffError::ReadError { source: e })?;

    if window.is_empty() {
        return Err(SniffError::Empty);
    }

    log::trace!("Sniffing {} leading bytes", window.len());

    Ok(detect_content_type(&window))
}

/// Detect the content type of a byte window.
///
/// Never fails: content nothing recognizes is labelled
/// `application/octet-stream`.
#[must_use]
pub fn detect_content_type(window: &[u8]) -> ContentType {
    let window = &window[..window.len().min(SNIFF_LEN)];

    if let Some(content_type) = infer::get(window).and_then(|kind| kind.mime_type().parse().ok()) {
        return content_type;
    }

    if !window.is_empty() && !window.iter().copied().any(is_binary_byte) {
        return ContentType::text_plain();
    }

    ContentType::octet_stream()
}

/// Control bytes that never appear in text (tab, newlines, form feed and
/// escape are allowed).
const fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}
