//! Device probing over the kernel DRM class directory.
//!
//! sysfs lives entirely in memory and does not produce I/O errors in
//! practice, so every failed read here is treated as absent data: a
//! missing attribute becomes an empty id component, an unreadable
//! directory yields no devices, an unresolvable driver link yields `None`.
//! Anomalies are only visible at `debug`/`trace` level.

mod entry;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use prime_core::ports::DeviceProbePort;
use prime_core::{DeviceTable, GpuDevice};

pub use entry::{DrmEntry, classify_entry};

/// Default DRM class directory.
pub const DRM_CLASS_PATH: &str = "/sys/class/drm";

/// `DeviceProbePort` implementation backed by sysfs.
///
/// # Example
///
/// ```no_run
/// use prime_runtime::SysfsProbe;
/// use prime_core::ports::DeviceProbePort;
///
/// let probe = SysfsProbe::new();
/// for device in probe.probe().iter() {
///     println!("card{} {}", device.card, device.id);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SysfsProbe {
    root: PathBuf,
}

impl SysfsProbe {
    /// Probe the system DRM class directory.
    pub fn new() -> Self {
        Self::with_root(DRM_CLASS_PATH)
    }

    /// Probe a directory laid out like `/sys/class/drm`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self) -> DeviceTable {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(root = %self.root.display(), error = %e, "Cannot read DRM class directory");
                return DeviceTable::default();
            }
        };

        let mut cards = BTreeMap::new();
        let mut panels = Vec::new();

        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };

            match classify_entry(name) {
                Some(DrmEntry::Card(card)) => {
                    let path = self.root.join(name);
                    let id = read_device_id(&path);
                    tracing::trace!(card, %id, "Found GPU");
                    cards.insert(card, GpuDevice::new(card, path, id));
                }
                Some(DrmEntry::InternalPanel(card)) => panels.push(card),
                None => {}
            }
        }

        // Connectors can be listed before their card.
        for card in panels {
            match cards.get_mut(&card) {
                Some(device) => device.internal_panel = true,
                None => tracing::debug!(card, "eDP connector for a card that does not exist"),
            }
        }

        DeviceTable::from_devices(cards.into_values().collect())
    }
}

impl Default for SysfsProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceProbePort for SysfsProbe {
    fn probe(&self) -> DeviceTable {
        let table = self.scan();
        tracing::debug!(root = %self.root.display(), count = table.len(), "Probed DRM devices");
        table
    }

    fn driver_path(&self, device: &GpuDevice) -> Option<PathBuf> {
        let link = device.path.join("device/driver");
        fs::canonicalize(&link)
            .inspect_err(|e| {
                tracing::debug!(link = %link.display(), error = %e, "Cannot resolve driver binding");
            })
            .ok()
    }
}

/// Build the `vendor:device` identifier of a card directory.
fn read_device_id(card_path: &Path) -> String {
    let vendor = read_attribute(&card_path.join("device/vendor"));
    let device = read_attribute(&card_path.join("device/device"));
    format!("{}:{}", normalize_hex(&vendor), normalize_hex(&device))
}

fn read_attribute(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        tracing::trace!(path = %path.display(), error = %e, "Unreadable sysfs attribute");
        String::new()
    })
}

/// `"0x10DE\n"` -> `"10de"`.
fn normalize_hex(raw: &str) -> String {
    let value = raw.trim();
    value.strip_prefix("0x").unwrap_or(value).to_ascii_lowercase()
}
