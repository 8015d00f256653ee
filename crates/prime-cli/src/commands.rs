//! Subcommands and their arguments.

use clap::{Args, Subcommand, ValueEnum};

use prime_core::Renderer;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List probed GPUs and the offload policy verdict
    List(ListArgs),

    /// Resolve a forced GPU and print the environment to apply
    Env(EnvArgs),
}

/// Rendering settings the offload policy depends on.
#[derive(Args, Debug, Clone)]
pub struct RendererArgs {
    /// Renderer the application will use (OpenGL, D3D11, D3D11FL10, Vulkan)
    #[arg(long, env = "PRIME_RENDERER", default_value = "D3D11")]
    pub renderer: Renderer,

    /// DXVK translation layer is enabled
    #[arg(long, env = "PRIME_DXVK")]
    pub dxvk: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub renderer: RendererArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EnvArgs {
    /// integrated, prime-discrete, a vendor:device id, or a device index
    #[arg(long, env = "PRIME_FORCED_GPU")]
    pub forced_gpu: Option<String>,

    #[command(flatten)]
    pub renderer: RendererArgs,

    /// Variable already set for the application (repeatable)
    #[arg(long = "env", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub env: Vec<(String, String)>,

    /// Treat managed variables already in this process's environment as set
    #[arg(long)]
    pub inherit_env: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Shell)]
    pub format: OutputFormat,
}

/// How resolved environments are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `export KEY='value'` lines
    Shell,
    /// A JSON object
    Json,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty variable name in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
