//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use clap::Parser;

/// CLI arguments for discord-cache-extract.
#[derive(Debug, Parser)]
#[command(
    name = "discord-cache-extract",
    about = "Extract files from a Discord cache directory, named by their content type",
    version
)]
pub struct Args {
    /// Cache directory to extract from (same as --src).
    #[arg(index = 1, value_name = "SOURCE")]
    pub source_path: Option<PathBuf>,

    /// Cache directory to extract from.
    #[arg(long = "src", value_name = "PATH")]
    pub src: Option<PathBuf>,

    /// Directory to save extracted files to [default: current directory].
    #[arg(long = "dst", short = 'd', value_name = "PATH")]
    pub dst: Option<PathBuf>,

    /// How many files each worker takes at a time [default: 10].
    #[arg(
        long = "chunk-size",
        visible_alias = "cs",
        value_name = "NUM",
        allow_hyphen_values = true
    )]
    pub chunk_size: Option<String>,

    /// How many workers run at once [default: number of CPUs].
    #[arg(
        long = "threads",
        visible_alias = "tc",
        short = 't',
        value_name = "NUM",
        allow_hyphen_values = true
    )]
    pub threads: Option<String>,

    /// Keep files with unknown file type.
    #[arg(long = "keep-unknown", short = 'k')]
    pub keep_unknown: bool,

    /// First number used for output file names [default: 0].
    #[arg(long = "start-at", value_name = "NUM")]
    pub start_at: Option<u64>,

    /// Config file to use instead of the per-user one.
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable the progress bar (useful for CI environments).
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// The source directory, `--src` taking precedence over the positional form.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.src.as_deref().or(self.source_path.as_deref())
    }

    /// Determine if we should show the progress bar.
    #[must_use]
    pub const fn should_show_progress(&self) -> bool {
        !self.no_progress
    }
}
