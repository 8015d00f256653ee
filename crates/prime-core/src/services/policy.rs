//! Offload policy.
//!
//! Decides whether role directives (`integrated`, `prime-discrete`) can be
//! honored. Only the canonical laptop layout qualifies: exactly two GPUs
//! with card 0 driving the internal panel.

use crate::domain::{DeviceTable, OffloadConfig};
use crate::error::{OffloadError, OffloadResult};
use crate::events::SkipReason;

/// Outcome of a policy evaluation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyVerdict {
    /// Two GPUs, device 0 on the internal panel.
    Allowed,
    /// Zero or one GPU.
    TooFewDevices { count: usize },
    /// Three or more GPUs; the renderer picks.
    DeferToRenderer { count: usize },
    /// Two GPUs but device 0 has no eDP output.
    NoInternalPanel,
}

impl PolicyVerdict {
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Reason to report when the verdict is not [`PolicyVerdict::Allowed`].
    pub const fn skip_reason(self) -> Option<SkipReason> {
        match self {
            Self::Allowed => None,
            Self::TooFewDevices { .. } => Some(SkipReason::TooFewDevices),
            Self::DeferToRenderer { .. } => Some(SkipReason::DeferToRenderer),
            Self::NoInternalPanel => Some(SkipReason::NoInternalPanel),
        }
    }
}

/// Evaluate the policy for a probed host.
///
/// Three or more GPUs without Vulkan or a translation layer is fatal: GL
/// cannot pick the right device and the default would silently be wrong.
pub fn evaluate<C: OffloadConfig + ?Sized>(
    devices: &DeviceTable,
    config: &C,
) -> OffloadResult<PolicyVerdict> {
    let count = devices.len();

    if count <= 1 {
        return Ok(PolicyVerdict::TooFewDevices { count });
    }

    if count > 2 {
        if !config.translation_layer() && !config.renderer().is_vulkan() {
            return Err(OffloadError::AmbiguousTopology {
                device_count: count,
                renderer: config.renderer(),
            });
        }
        return Ok(PolicyVerdict::DeferToRenderer { count });
    }

    // card0 is the integrated GPU when one exists; no eDP means no laptop.
    if !devices.get(0).is_some_and(|device| device.internal_panel) {
        return Ok(PolicyVerdict::NoInternalPanel);
    }

    Ok(PolicyVerdict::Allowed)
}

/// Boolean view of [`evaluate`].
pub fn is_offload_safe<C: OffloadConfig + ?Sized>(
    devices: &DeviceTable,
    config: &C,
) -> OffloadResult<bool> {
    evaluate(devices, config).map(PolicyVerdict::is_allowed)
}
