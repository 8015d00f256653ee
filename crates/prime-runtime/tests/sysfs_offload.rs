//! Offload resolution against fake DRM trees on disk.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;

use prime_core::{
    LaunchConfig, NoopEventSink, OffloadErrorKind, Renderer, env_keys, resolve_offload,
};
use prime_runtime::SysfsProbe;
use tempfile::TempDir;

fn add_card(base: &Path, card: u32, vendor: &str, device: &str, driver: &str) {
    let device_dir = base.join(format!("drm/card{card}/device"));
    fs::create_dir_all(&device_dir).unwrap();
    fs::write(device_dir.join("vendor"), format!("{vendor}\n")).unwrap();
    fs::write(device_dir.join("device"), format!("{device}\n")).unwrap();

    let target = base.join("bus/pci/drivers").join(driver);
    fs::create_dir_all(&target).unwrap();
    symlink(&target, device_dir.join("driver")).unwrap();
}

fn add_entry(base: &Path, name: &str) {
    fs::create_dir_all(base.join("drm").join(name)).unwrap();
}

fn hybrid_laptop() -> TempDir {
    let dir = TempDir::new().unwrap();
    add_card(dir.path(), 0, "0x1002", "0x1638", "amdgpu");
    add_card(dir.path(), 1, "0x10DE", "0x2520", "nvidia");
    add_entry(dir.path(), "card0-eDP-1");
    add_entry(dir.path(), "card1-DP-1");
    dir
}

#[test]
fn test_prime_discrete_on_hybrid_laptop() {
    let dir = hybrid_laptop();
    let probe = SysfsProbe::with_root(dir.path().join("drm"));

    let resolved =
        resolve_offload(LaunchConfig::new("prime-discrete"), &probe, &NoopEventSink).unwrap();

    assert_eq!(resolved.env[env_keys::DRI_PRIME], "10de:2520");
    assert_eq!(resolved.env[env_keys::GLX_VENDOR_LIBRARY_NAME], "nvidia");
    assert_eq!(resolved.env[env_keys::FORCE_DEFAULT_DEVICE], "1");
}

#[test]
fn test_integrated_on_hybrid_laptop() {
    let dir = hybrid_laptop();
    let probe = SysfsProbe::with_root(dir.path().join("drm"));

    let resolved =
        resolve_offload(LaunchConfig::new("integrated"), &probe, &NoopEventSink).unwrap();

    assert_eq!(resolved.env[env_keys::DRI_PRIME], "1002:1638");
    assert_eq!(resolved.env[env_keys::GLX_VENDOR_LIBRARY_NAME], "mesa");
}

#[test]
fn test_three_gpu_desktop() {
    let dir = TempDir::new().unwrap();
    add_card(dir.path(), 0, "0x8086", "0x4680", "i915");
    add_card(dir.path(), 1, "0x1002", "0x744c", "amdgpu");
    add_card(dir.path(), 2, "0x1000", "0x7340", "amdgpu");
    let probe = SysfsProbe::with_root(dir.path().join("drm"));

    let opengl = LaunchConfig::new("integrated").with_renderer(Renderer::OpenGL);
    let err = resolve_offload(opengl, &probe, &NoopEventSink).unwrap_err();
    assert_eq!(err.kind(), OffloadErrorKind::AmbiguousTopology);

    let vulkan = LaunchConfig::new("integrated").with_renderer(Renderer::Vulkan);
    let untouched = resolve_offload(vulkan.clone(), &probe, &NoopEventSink).unwrap();
    assert_eq!(untouched, vulkan);

    let explicit = resolve_offload(LaunchConfig::new("1000:7340"), &probe, &NoopEventSink).unwrap();
    assert_eq!(explicit.env[env_keys::DRI_PRIME], "1000:7340");
}
