//! Error types for copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

/// Errors that can occur while copying a single file.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Failed to stat the source.
    #[error("Failed to get metadata for {}: {io_error}", path.display())]
    MetadataError {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Source exists but is a directory, socket, device, or similar.
    #[error("{} is not a regular file", path.display())]
    NotARegularFile {
        /// The offending path.
        path: PathBuf,
    },

    /// Failed to open the source for reading.
    #[error("Failed to open {}: {io_error}", path.display())]
    OpenError {
        /// The source path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to create or truncate the target.
    #[error("Failed to create {}: {io_error}", path.display())]
    CreateError {
        /// The target path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Streaming bytes from source to target failed part way.
    #[error("Failed to copy {} to {}: {io_error}", source_path.display(), target_path.display())]
    StreamError {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },
}
