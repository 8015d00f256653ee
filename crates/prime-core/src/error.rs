//! Fatal outcomes of offload resolution.
//!
//! None of these terminate the process. The caller decides how to present
//! them and which exit code to use; the application must not be launched
//! when one is returned.

use crate::domain::Renderer;
use thiserror::Error;

/// Errors that stop a launch attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OffloadError {
    /// Three or more GPUs and a renderer that cannot pick between them.
    #[error(
        "System has {device_count} GPUs and the {renderer} renderer cannot choose the right one. \
         Use the Vulkan renderer, enable DXVK, or set the forced GPU to a device id or index."
    )]
    AmbiguousTopology {
        device_count: usize,
        renderer: Renderer,
    },

    /// An explicit `vendor:device` directive matched no probed device.
    #[error("No GPU with the vendor:device id \"{id}\"")]
    UnknownDeviceId { id: String },

    /// An index directive points past the end of the device list.
    #[error("GPU index {index} does not exist (found {device_count} GPUs)")]
    IndexOutOfRange { index: usize, device_count: usize },

    /// The directive is neither a role, an id, nor a decimal index.
    #[error(
        "Invalid forced GPU \"{value}\" (expected integrated, prime-discrete, vendor:device or an index)"
    )]
    MalformedDirective { value: String },
}

/// Failure category of an [`OffloadError`], for exit codes and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffloadErrorKind {
    AmbiguousTopology,
    UnknownDeviceId,
    IndexOutOfRange,
    MalformedDirective,
}

impl OffloadError {
    pub const fn kind(&self) -> OffloadErrorKind {
        match self {
            Self::AmbiguousTopology { .. } => OffloadErrorKind::AmbiguousTopology,
            Self::UnknownDeviceId { .. } => OffloadErrorKind::UnknownDeviceId,
            Self::IndexOutOfRange { .. } => OffloadErrorKind::IndexOutOfRange,
            Self::MalformedDirective { .. } => OffloadErrorKind::MalformedDirective,
        }
    }

    /// The user's forced-GPU setting is at fault, not the hardware.
    pub const fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::AmbiguousTopology { .. })
    }
}

/// Result type for offload resolution.
pub type OffloadResult<T> = Result<T, OffloadError>;
