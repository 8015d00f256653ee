//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface for PRIME render-offload selection.
#[derive(Parser)]
#[command(name = "prime-offload")]
#[command(about = "Choose the GPU an application renders on and print its environment")]
#[command(version)]
pub struct Cli {
    /// DRM class directory to probe
    #[arg(
        long = "drm-root",
        env = "PRIME_DRM_ROOT",
        default_value = prime_runtime::DRM_CLASS_PATH,
        global = true
    )]
    pub drm_root: PathBuf,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
