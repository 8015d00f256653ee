//! GPU device records and the table built by a probe.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// One GPU exposed by the kernel DRM subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuDevice {
    /// Kernel card number (`N` in `cardN`).
    pub card: u32,
    /// Root of the device's sysfs exposure (e.g. `/sys/class/drm/card0`).
    pub path: PathBuf,
    /// The device drives the built-in laptop panel (an eDP connector exists).
    pub internal_panel: bool,
    /// Lowercase `vendor:device` PCI identifier without `0x` prefixes.
    pub id: String,
}

impl GpuDevice {
    /// Create a device record.
    pub fn new(card: u32, path: impl Into<PathBuf>, id: impl Into<String>) -> Self {
        Self {
            card,
            path: path.into(),
            internal_panel: false,
            id: id.into(),
        }
    }

    /// Mark this device as driving the internal panel.
    #[must_use]
    pub const fn with_internal_panel(mut self, internal_panel: bool) -> Self {
        self.internal_panel = internal_panel;
        self
    }

    /// Vendor half of the identifier.
    pub fn vendor_id(&self) -> &str {
        self.id.split_once(':').map_or(self.id.as_str(), |(v, _)| v)
    }
}

/// Ordered device list plus an index by `vendor:device` identifier.
///
/// Devices are ordered by card number. Identifiers are not unique per
/// physical card: when two cards share one, the index keeps the last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceTable {
    devices: Vec<GpuDevice>,
    by_id: HashMap<String, usize>,
}

impl DeviceTable {
    /// Build a table from devices already in enumeration order.
    pub fn from_devices(devices: Vec<GpuDevice>) -> Self {
        let by_id = devices
            .iter()
            .enumerate()
            .map(|(position, device)| (device.id.clone(), position))
            .collect();
        Self { devices, by_id }
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Device at an enumeration position.
    pub fn get(&self, index: usize) -> Option<&GpuDevice> {
        self.devices.get(index)
    }

    /// Device carrying `id`, the last one enumerated if several share it.
    pub fn find_by_id(&self, id: &str) -> Option<&GpuDevice> {
        self.position_of(id).and_then(|position| self.devices.get(position))
    }

    /// Enumeration position of the device carrying `id`.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GpuDevice> {
        self.devices.iter()
    }

    pub fn devices(&self) -> &[GpuDevice] {
        &self.devices
    }
}

/// GL vendor library selected for a device, from its bound kernel driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlVendor {
    /// Proprietary NVIDIA driver.
    Nvidia,
    /// Everything else goes through Mesa.
    Mesa,
}

impl GlVendor {
    /// Pick the vendor from the resolved `device/driver` link target.
    ///
    /// Only an exact `nvidia` final component selects the proprietary
    /// stack; `nouveau`, an unbound device or an unresolvable link all
    /// fall back to Mesa.
    pub fn from_driver_path(driver: Option<&Path>) -> Self {
        let is_nvidia = driver
            .and_then(Path::file_name)
            .is_some_and(|name| name == "nvidia");
        if is_nvidia { Self::Nvidia } else { Self::Mesa }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nvidia => "nvidia",
            Self::Mesa => "mesa",
        }
    }
}

impl fmt::Display for GlVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
