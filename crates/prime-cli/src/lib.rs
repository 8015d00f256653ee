//! CLI adapter for prime-offload.
//!
//! `list` shows what the probe sees and what the offload policy thinks of
//! it; `env` resolves a forced-GPU directive and prints the environment a
//! launcher should apply before starting the application.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod env;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::{Commands, EnvArgs, ListArgs, OutputFormat, RendererArgs};
pub use error::CliError;
pub use parser::Cli;
