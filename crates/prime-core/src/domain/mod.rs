//! Domain types for GPU offload selection.
//!
//! These are pure data types with no infrastructure dependencies.
//! Device records are built fresh by a probe on every resolution and
//! discarded once the decision is made.

mod config;
mod device;
mod directive;

pub use config::{LaunchConfig, OffloadConfig, Renderer};
pub use device::{DeviceTable, GlVendor, GpuDevice};
pub use directive::GpuDirective;

/// Environment variables managed by the device selector.
pub mod env_keys {
    /// Stops Mesa's Vulkan device-select layer from picking another device.
    pub const FORCE_DEFAULT_DEVICE: &str = "MESA_VK_DEVICE_SELECT_FORCE_DEFAULT_DEVICE";
    /// Offload target, as a `vendor:device` identifier.
    pub const DRI_PRIME: &str = "DRI_PRIME";
    /// GLVND vendor library (`nvidia` or `mesa`).
    pub const GLX_VENDOR_LIBRARY_NAME: &str = "__GLX_VENDOR_LIBRARY_NAME";

    /// All managed keys, in the order the selector applies them.
    pub const ALL: [&str; 3] = [FORCE_DEFAULT_DEVICE, DRI_PRIME, GLX_VENDOR_LIBRARY_NAME];
}
