//! Configuration loading for discord-cache-extract.
//!
//! Settings come from three layers, highest priority first:
//!
//! * Command-line arguments (handled by the binary)
//! * A TOML file (`--config PATH`, or `discord-cache-extract/config.toml` in
//!   the platform config directory)
//! * Built-in defaults
//!
//! # Example
//!
//! ```rust,ignore
//! use cache_extract_config::{load_config, resolve_chunk_size};
//!
//! let loaded = load_config(None)?;
//! let chunk_size = resolve_chunk_size(Some("25"));
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod discovery;
mod error;
mod resolve;
mod toml_loader;
mod types;

pub use discovery::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, default_config_path, discover_config};
pub use error::ConfigError;
pub use resolve::{DEFAULT_CHUNK_SIZE, FALLBACK_CHUNK_SIZE, resolve_chunk_size, resolve_threads};
pub use toml_loader::load_toml_config;
pub use types::{Config, DEFAULT_RESERVED_NAMES, LoadedConfig};

use std::path::Path;

/// Load the configuration, falling back to defaults when no file is found.
///
/// # Arguments
///
/// * `explicit` - Config path given on the command line, if any
///
/// # Errors
///
/// * If an explicit path does not exist
/// * If the file cannot be read or parsed
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let Some(path) = discover_config(explicit)? else {
        return Ok(LoadedConfig::default());
    };

    let config = load_toml_config(&path)?;

    Ok(LoadedConfig {
        config,
        config_path: Some(path),
    })
}
