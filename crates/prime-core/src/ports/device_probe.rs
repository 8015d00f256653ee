//! Device probe port for GPU enumeration.
//!
//! This port abstracts reading the kernel DRM topology from the core domain.
//! The sysfs implementation lives in `prime-runtime`.
//!
//! # Design Notes
//!
//! - Core owns the trait (pure)
//! - Runtime owns the implementation (directory scans, attribute reads)
//! - There is no error type: sysfs is an in-memory kernel view, so a failed
//!   read is reported as absent data. An implementation backed by a source
//!   without that guarantee should surface failures before this boundary.

use std::path::PathBuf;

use crate::domain::{DeviceTable, GpuDevice};

/// Port for enumerating GPUs and inspecting their driver binding.
///
/// # Example
///
/// ```ignore
/// use prime_core::ports::DeviceProbePort;
///
/// fn count_gpus(probe: &dyn DeviceProbePort) -> usize {
///     probe.probe().len()
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait DeviceProbePort: Send + Sync {
    /// Enumerate GPUs, ordered by card number, with the identifier index.
    ///
    /// Called once per resolution; the result is never cached.
    fn probe(&self) -> DeviceTable;

    /// Resolve the device's `device/driver` link to its real target.
    ///
    /// Returns `None` when the device is unbound or the link is unreadable.
    fn driver_path(&self, device: &GpuDevice) -> Option<PathBuf>;
}
