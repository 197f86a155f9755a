//! Regular-file copying for discord-cache-extract.
//!
//! A single operation: check that a source path names a regular file, then
//! stream its bytes into a freshly created (or truncated) target.
//!
//! # Example
//!
//! ```rust,ignore
//! use cache_extract_copy::copy_file;
//!
//! let bytes = copy_file(source, target)?;
//! println!("{bytes} bytes copied");
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;

pub use copy::copy_file;
pub use error::CopyError;
