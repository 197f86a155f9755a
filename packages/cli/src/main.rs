//! discord-cache-extract CLI entry point.
//!
//! Copies the payload files of a Discord cache directory into a destination
//! directory, naming them by number and by the content type sniffed from
//! their leading bytes.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;
mod progress;
mod settings;

use std::env;
use std::error::Error;

use clap::Parser;

use args::Args;
use cache_extract_config::load_config;
use cache_extract_operations::{ExtractError, plan_extraction, run_plan};
use progress::ExtractBar;

fn main() {
    let args = Args::parse();

    // Set up logging. Per-file failures are warnings, so show those by default.
    if args.verbose || env::var_os("RUST_LOG").is_none() {
        let level = if args.verbose { "debug" } else { "warn" };
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", level);
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        output::print_help_hint();
        std::process::exit(exit_code(e.as_ref()));
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let loaded = load_config(args.config.as_deref())?;
    if let Some(ref path) = loaded.config_path {
        log::info!("Using config {}", path.display());
    }

    let cwd = env::current_dir()?;
    let options = settings::resolve_options(args, &loaded.config, &cwd)?;

    output::print_header("Discord Cache Extract");
    output::print_paths(&options.source, &options.destination);

    let plan = plan_extraction(&options.source, &options.reserved, options.chunk_size)?;
    output::print_plan(
        plan.entries_total,
        plan.chunks.len(),
        options.chunk_size,
        options.threads,
    );

    let bar = ExtractBar::new(plan.entries_total as u64, args.should_show_progress());
    let summary = run_plan(&plan, &options, |progress| bar.update(progress));
    bar.finish();

    output::print_summary(&summary?);
    Ok(())
}

/// Exit status for a fatal error: `2` when the source cannot be listed,
/// `1` for everything else.
fn exit_code(error: &(dyn Error + 'static)) -> i32 {
    match error.downcast_ref::<ExtractError>() {
        Some(ExtractError::ReadDirError { .. }) => 2,
        _ => 1,
    }
}
