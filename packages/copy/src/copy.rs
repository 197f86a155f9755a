//! Single-file copy implementation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::CopyError;

/// Copy a regular file, creating or truncating the target.
///
/// The source is stat'ed following symlinks, so a symlink to a regular file
/// is copied while a symlink to anything else is rejected. Permissions and
/// timestamps are not carried over.
///
/// # Arguments
///
/// * `source` - Source file path
/// * `target` - Target file path
///
/// # Returns
///
/// The number of bytes written.
///
/// # Errors
///
/// * If the source cannot be stat'ed
/// * If the source is not a regular file
/// * If the source cannot be opened
/// * If the target cannot be created
/// * If streaming the bytes fails
pub fn copy_file(source: &Path, target: &Path) -> Result<u64, CopyError> {
    log::debug!("Copying file: {} -> {}", source.display(), target.display());

    let metadata = fs::metadata(source).map_err(|e| CopyError::MetadataError {
        path: source.to_path_buf(),
        io_error: e,
    })?;

    if !metadata.is_file() {
        return Err(CopyError::NotARegularFile {
            path: source.to_path_buf(),
        });
    }

    let mut reader = File::open(source).map_err(|e| CopyError::OpenError {
        path: source.to_path_buf(),
        io_error: e,
    })?;

    let mut writer = File::create(target).map_err(|e| CopyError::CreateError {
        path: target.to_path_buf(),
        io_error: e,
    })?;

    let bytes = io::copy(&mut reader, &mut writer).map_err(|e| CopyError::StreamError {
        source_path: source.to_path_buf(),
        target_path: target.to_path_buf(),
        io_error: e,
    })?;

    log::trace!(
        "Copied {} bytes {} -> {}",
        bytes,
        source.display(),
        target.display()
    );

    Ok(bytes)
}
