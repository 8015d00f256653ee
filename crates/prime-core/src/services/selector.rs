//! Device selector.
//!
//! Computes the environment that binds an application to one GPU. Values
//! the caller already set always win; a clash is recorded, never fatal.

use std::path::Path;

use crate::domain::{GlVendor, GpuDevice, OffloadConfig, env_keys};

/// A managed variable the caller had already defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConflict {
    pub key: String,
    /// Value kept.
    pub existing: String,
    /// Value the selector would have set.
    pub proposed: String,
}

/// Result of selecting a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<C> {
    /// The configuration with its environment updated.
    pub config: C,
    /// Vendor library chosen from the driver binding.
    pub gl_vendor: GlVendor,
    /// `(key, value)` pairs that were inserted, in application order.
    pub applied: Vec<(String, String)>,
    /// Keys left untouched because the caller set them.
    pub conflicts: Vec<EnvConflict>,
}

/// Apply the offload environment for `device` to `config`.
///
/// `driver` is the resolved target of the device's `device/driver` link.
/// Only the environment mapping of `config` is modified.
pub fn select_device<C: OffloadConfig>(
    mut config: C,
    device: &GpuDevice,
    driver: Option<&Path>,
) -> Selection<C> {
    let gl_vendor = GlVendor::from_driver_path(driver);
    let wanted = [
        (env_keys::FORCE_DEFAULT_DEVICE, "1"),
        (env_keys::DRI_PRIME, device.id.as_str()),
        (env_keys::GLX_VENDOR_LIBRARY_NAME, gl_vendor.as_str()),
    ];

    let mut applied = Vec::with_capacity(wanted.len());
    let mut conflicts = Vec::new();
    let env = config.env_mut();

    for (key, value) in wanted {
        if let Some(existing) = env.get(key) {
            conflicts.push(EnvConflict {
                key: key.to_string(),
                existing: existing.clone(),
                proposed: value.to_string(),
            });
        } else {
            env.insert(key.to_string(), value.to_string());
            applied.push((key.to_string(), value.to_string()));
        }
    }

    Selection {
        config,
        gl_vendor,
        applied,
        conflicts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LaunchConfig;

    fn nvidia_card() -> GpuDevice {
        GpuDevice::new(1, "/sys/class/drm/card1", "10de:25a2")
    }

    #[test]
    fn test_sets_all_three_variables() {
        let driver = Path::new("/sys/bus/pci/drivers/nvidia");
        let selection = select_device(LaunchConfig::new("1"), &nvidia_card(), Some(driver));

        let env = &selection.config.env;
        assert_eq!(env[env_keys::FORCE_DEFAULT_DEVICE], "1");
        assert_eq!(env[env_keys::DRI_PRIME], "10de:25a2");
        assert_eq!(env[env_keys::GLX_VENDOR_LIBRARY_NAME], "nvidia");
        assert_eq!(selection.gl_vendor, GlVendor::Nvidia);
        assert_eq!(selection.applied.len(), 3);
        assert!(selection.conflicts.is_empty());
    }

    #[test]
    fn test_open_source_driver_selects_mesa() {
        let driver = Path::new("/sys/bus/pci/drivers/amdgpu");
        let device = GpuDevice::new(0, "/sys/class/drm/card0", "1002:73bf");
        let selection = select_device(LaunchConfig::new("0"), &device, Some(driver));

        assert_eq!(selection.config.env[env_keys::GLX_VENDOR_LIBRARY_NAME], "mesa");
    }

    #[test]
    fn test_unbound_device_selects_mesa() {
        let selection = select_device(LaunchConfig::new("0"), &nvidia_card(), None);
        assert_eq!(selection.gl_vendor, GlVendor::Mesa);
    }

    #[test]
    fn test_never_overwrites_existing_keys() {
        let config = LaunchConfig::new("1").with_env(env_keys::DRI_PRIME, "custom");
        let selection = select_device(config, &nvidia_card(), None);

        assert_eq!(selection.config.env[env_keys::DRI_PRIME], "custom");
        assert_eq!(
            selection.conflicts,
            vec![EnvConflict {
                key: env_keys::DRI_PRIME.to_string(),
                existing: "custom".to_string(),
                proposed: "10de:25a2".to_string(),
            }]
        );
        assert_eq!(selection.applied.len(), 2);
    }

    #[test]
    fn test_other_fields_untouched() {
        let config = LaunchConfig::new("prime-discrete")
            .with_dxvk(true)
            .with_env("WINEDEBUG", "-all");
        let selection = select_device(config.clone(), &nvidia_card(), None);

        assert_eq!(selection.config.forced_gpu, config.forced_gpu);
        assert_eq!(selection.config.renderer, config.renderer);
        assert!(selection.config.dxvk);
        assert_eq!(selection.config.env["WINEDEBUG"], "-all");
    }
}
