//! Launch configuration contract.
//!
//! The launcher owns its configuration type. This module defines the
//! narrow view offload resolution needs ([`OffloadConfig`]) plus a ready
//! made implementation ([`LaunchConfig`]) for callers without their own.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Rendering backend the launched application is configured to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Renderer {
    OpenGL,
    #[default]
    D3D11,
    D3D11FL10,
    Vulkan,
}

impl Renderer {
    /// Vulkan picks the right device by itself on multi-GPU hosts.
    pub const fn is_vulkan(self) -> bool {
        matches!(self, Self::Vulkan)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenGL => "OpenGL",
            Self::D3D11 => "D3D11",
            Self::D3D11FL10 => "D3D11FL10",
            Self::Vulkan => "Vulkan",
        }
    }
}

impl fmt::Display for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Renderer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "opengl" => Ok(Self::OpenGL),
            "d3d11" => Ok(Self::D3D11),
            "d3d11fl10" => Ok(Self::D3D11FL10),
            "vulkan" => Ok(Self::Vulkan),
            other => Err(format!(
                "unknown renderer '{other}' (expected OpenGL, D3D11, D3D11FL10 or Vulkan)"
            )),
        }
    }
}

/// What offload resolution reads from, and writes to, a launch configuration.
///
/// Only the environment mapping is ever mutated. Services take the
/// configuration by value and hand it back, so the caller observes every
/// change through the returned value.
pub trait OffloadConfig {
    /// Environment variables the launcher will set for the application.
    fn env(&self) -> &BTreeMap<String, String>;

    /// Mutable access to the environment mapping.
    fn env_mut(&mut self) -> &mut BTreeMap<String, String>;

    /// Configured rendering backend.
    fn renderer(&self) -> Renderer;

    /// A graphics API translation layer (DXVK) is active.
    fn translation_layer(&self) -> bool;

    /// Raw forced-GPU directive; empty disables offload selection.
    fn forced_gpu(&self) -> &str;
}

/// Default launch configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Environment for the launched application.
    pub env: BTreeMap<String, String>,
    /// Rendering backend.
    pub renderer: Renderer,
    /// DXVK translation layer enabled.
    pub dxvk: bool,
    /// `integrated`, `prime-discrete`, a `vendor:device` id, a device index, or empty.
    pub forced_gpu: String,
}

impl LaunchConfig {
    pub fn new(forced_gpu: impl Into<String>) -> Self {
        Self {
            forced_gpu: forced_gpu.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    #[must_use]
    pub const fn with_dxvk(mut self, dxvk: bool) -> Self {
        self.dxvk = dxvk;
        self
    }

    /// Pre-set an environment variable.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}

impl OffloadConfig for LaunchConfig {
    fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    fn env_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.env
    }

    fn renderer(&self) -> Renderer {
        self.renderer
    }

    fn translation_layer(&self) -> bool {
        self.dxvk
    }

    fn forced_gpu(&self) -> &str {
        &self.forced_gpu
    }
}
