//! Port definitions (trait abstractions) for external systems.
//!
//! Adapters implement these traits; services depend only on them.
//!
//! # Design Rules
//!
//! - No filesystem types beyond plain paths in signatures
//! - Traits are object-safe so services can take `&dyn`
//! - Probing never fails outward; see [`DeviceProbePort`]

mod device_probe;
mod event_sink;

pub use device_probe::DeviceProbePort;
pub use event_sink::{NoopEventSink, OffloadEventSink, TracingEventSink};

#[cfg(test)]
pub use device_probe::MockDeviceProbePort;
