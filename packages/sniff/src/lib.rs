//! Content-type sniffing for discord-cache-extract.
//!
//! Cache entries carry no extension, so the only way to name an extracted file
//! is to look at its leading bytes. This crate reads at most [`SNIFF_LEN`]
//! bytes and maps them to a MIME label:
//!
//! * Binary signatures (images, video, audio, archives, ...) via `infer`
//! * `text/plain` when the window holds no binary control bytes
//! * `application/octet-stream` otherwise
//!
//! # Example
//!
//! ```rust,ignore
//! use cache_extract_sniff::sniff_content_type;
//!
//! let mut file = std::fs::File::open(path)?;
//! let content_type = sniff_content_type(&mut file)?;
//! println!("{} -> .{}", content_type, content_type.subtype());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod content_type;
mod error;
mod sniff;

pub use content_type::ContentType;
pub use error::SniffError;
pub use sniff::{SNIFF_LEN, detect_content_type, sniff_content_type};
