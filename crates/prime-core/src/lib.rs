//! Core domain for PRIME render-offload selection.
//!
//! Decides which GPU an application should be bound to on a multi-GPU Linux
//! host and produces the environment variables that enforce the choice.
//!
//! # Layout
//!
//! - `domain` - device records, the launch configuration contract, directives
//! - `ports` - traits implemented by adapters (device probing, event sinks)
//! - `services` - offload policy, device selector and the orchestrator
//! - `events` - structured events emitted while resolving a directive
//! - `error` - typed fatal outcomes
//!
//! Nothing in this crate touches the filesystem. Probing lives in
//! `prime-runtime`, which implements [`DeviceProbePort`].

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod events;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    DeviceTable, GlVendor, GpuDevice, GpuDirective, LaunchConfig, OffloadConfig, Renderer,
    env_keys,
};
pub use error::{OffloadError, OffloadErrorKind, OffloadResult};
pub use events::{OffloadEvent, SkipReason};
pub use ports::{DeviceProbePort, NoopEventSink, OffloadEventSink, TracingEventSink};
pub use services::{
    EnvConflict, PolicyVerdict, Selection, evaluate, is_offload_safe, resolve_offload,
    select_device,
};

