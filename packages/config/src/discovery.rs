//! Configuration file discovery.
//!
//! An explicit path always wins. Without one, the per-user config directory
//! is checked for `discord-cache-extract/config.toml`.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "discord-cache-extract";

/// File name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Location of the per-user configuration file, whether or not it exists.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Find the configuration file to load.
///
/// # Arguments
///
/// * `explicit` - Path given on the command line, if any
///
/// # Returns
///
/// `None` when no explicit path was given and no per-user file exists.
///
/// # Errors
///
/// * If an explicit path was given but does not name a file
pub fn discover_config(explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    discover_config_in(explicit, default_config_path())
}

fn discover_config_in(
    explicit: Option<&Path>,
    fallback: Option<PathBuf>,
) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        log::debug!("Using explicit config {}", path.display());
        return Ok(Some(path.to_path_buf()));
    }

    match fallback {
        Some(path) if path.is_file() => {
            log::debug!("Using per-user config {}", path.display());
            Ok(Some(path))
        }
        _ => {
            log::debug!("No config file found, using defaults");
            Ok(None)
        }
    }
}
