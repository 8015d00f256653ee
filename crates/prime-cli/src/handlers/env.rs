//! `env` command: resolve the forced GPU and print the environment.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use prime_core::ports::{DeviceProbePort, OffloadEventSink};
use prime_core::{LaunchConfig, resolve_offload};

use crate::commands::{EnvArgs, OutputFormat};
use crate::env::{ProcessEnv, inherited_vars};
use crate::error::CliError;

/// Resolve offload for the given arguments and render the resulting environment.
pub fn execute(
    probe: &dyn DeviceProbePort,
    events: &dyn OffloadEventSink,
    args: &EnvArgs,
    process_env: &dyn ProcessEnv,
) -> Result<String, CliError> {
    let config = build_config(args, process_env)?;
    let resolved = resolve_offload(config, probe, events)?;
    render(&resolved.env, args.format)
}

/// Seed a launch configuration from arguments and, optionally, the process environment.
///
/// Explicit `--env` pairs win over inherited values.
fn build_config(args: &EnvArgs, process_env: &dyn ProcessEnv) -> Result<LaunchConfig, CliError> {
    let mut config = LaunchConfig::new(args.forced_gpu.clone().unwrap_or_default())
        .with_renderer(args.renderer.renderer)
        .with_dxvk(args.renderer.dxvk);

    if args.inherit_env {
        config.env.extend(inherited_vars(process_env)?);
    }

    for (key, value) in &args.env {
        config.env.insert(key.clone(), value.clone());
    }

    Ok(config)
}

fn render(env: &BTreeMap<String, String>, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(env)?)),
        OutputFormat::Shell => {
            let mut out = String::new();
            for (key, value) in env {
                let _ = writeln!(out, "export {key}={}", shell_quote(value));
            }
            Ok(out)
        }
    }
}

/// Single-quote a value for POSIX shells.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
