//! Error types for content sniffing.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error;

/// Errors that can occur while sniffing a content type.
#[derive(Debug, Error)]
pub enum SniffError {
    /// Reading the leading bytes failed.
    #[error("Failed to read leading bytes: {source}")]
    ReadError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The source produced no bytes at all.
    #[error("Source is empty, nothing to sniff")]
    Empty,

    /// A MIME label did not have the `category/subtype` shape.
    #[error("Malformed content type label: {0}")]
    MalformedLabel(String),
}
