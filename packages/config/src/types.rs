//! Configuration types for discord-cache-extract.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Name fragments that mark cache bookkeeping files.
pub const DEFAULT_RESERVED_NAMES: &[&str] = &["data", "index"];

fn default_reserved_names() -> Vec<String> {
    DEFAULT_RESERVED_NAMES
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// File-level configuration. Every value can be overridden on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Where extracted files are written.
    #[serde(default)]
    pub destination: Option<PathBuf>,

    /// Entries per chunk. Kept signed so bad values reach the fallback logic
    /// instead of failing the parse.
    #[serde(default)]
    pub chunk_size: Option<i64>,

    /// Worker thread count.
    #[serde(default)]
    pub threads: Option<i64>,

    /// Copy files whose type could not be determined.
    #[serde(default)]
    pub keep_unknown: bool,

    /// Entries whose name contains any of these are never copied.
    #[serde(default = "default_reserved_names")]
    pub reserved_names: Vec<String>,

    /// First output file number.
    #[serde(default)]
    pub start_at: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            destination: None,
            chunk_size: None,
            threads: None,
            keep_unknown: false,
            reserved_names: default_reserved_names(),
            start_at: 0,
        }
    }
}

/// A configuration together with where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// The parsed configuration.
    pub config: Config,
    /// Path of the file it was read from, `None` for built-in defaults.
    pub config_path: Option<PathBuf>,
}
