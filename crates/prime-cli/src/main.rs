//! CLI entry point - the composition root.
//!
//! Wires the sysfs probe and the tracing event sink into the handlers.
//! Offload errors map to sysexits-style exit codes.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prime_cli::env::SystemEnv;
use prime_cli::{Cli, CliError, Commands, handlers};
use prime_core::TracingEventSink;
use prime_runtime::SysfsProbe;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let probe = SysfsProbe::with_root(&cli.drm_root);

    let output = match cli.command {
        Commands::List(args) => handlers::list::execute(&probe, &args)?,
        Commands::Env(args) => {
            handlers::env::execute(&probe, &TracingEventSink::new(), &args, &SystemEnv)?
        }
    };
    Ok(output)
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
