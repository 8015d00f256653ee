//! OS-level adapters for prime-offload.
//!
//! Provides [`SysfsProbe`], the `DeviceProbePort` implementation that
//! reads the kernel DRM class directory.

#![deny(unsafe_code)]

pub mod sysfs;

// Re-export the probe implementation
pub use sysfs::{DRM_CLASS_PATH, DrmEntry, SysfsProbe, classify_entry};
