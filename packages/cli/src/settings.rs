//! Merging of command-line arguments over the config file.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use cache_extract_config::{Config, resolve_chunk_size, resolve_threads};
use cache_extract_operations::{ExtractOptions, ReservedNames};

use crate::args::Args;

/// Build run options. Arguments win over the config file, which wins over
/// defaults.
///
/// # Arguments
///
/// * `args` - Parsed command line
/// * `config` - Loaded (or default) config file
/// * `cwd` - Directory used when no destination is configured
///
/// # Errors
///
/// * If no source directory was given
pub fn resolve_options(args: &Args, config: &Config, cwd: &Path) -> Result<ExtractOptions, String> {
    let source = args
        .source()
        .ok_or_else(|| "Missing source directory. Pass it as SOURCE or --src.".to_string())?
        .to_path_buf();

    let destination: PathBuf = args
        .dst
        .clone()
        .or_else(|| config.destination.clone())
        .unwrap_or_else(|| cwd.to_path_buf());

    let file_chunk_size = config.chunk_size.map(|n| n.to_string());
    let chunk_size = resolve_chunk_size(args.chunk_size.as_deref().or(file_chunk_size.as_deref()));

    let file_threads = config.threads.map(|n| n.to_string());
    let threads = resolve_threads(args.threads.as_deref().or(file_threads.as_deref()));

    Ok(ExtractOptions {
        source,
        destination,
        chunk_size,
        threads,
        keep_unknown: args.keep_unknown || config.keep_unknown,
        reserved: ReservedNames::new(config.reserved_names.iter().cloned()),
        start_at: args.start_at.unwrap_or(config.start_at),
    })
}
