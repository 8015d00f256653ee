//! Event sink trait for offload resolution diagnostics.
//!
//! Implementations decide how events are rendered (log lines, JSON, UI).

use crate::events::{OffloadEvent, SkipReason};

/// Trait for receiving offload events.
///
/// # Implementations
///
/// - `NoopEventSink` - discards everything
/// - `TracingEventSink` - forwards to `tracing` at a level matching the event
pub trait OffloadEventSink: Send + Sync {
    /// Receive one event. Must not block.
    fn emit(&self, event: OffloadEvent);
}

/// A sink that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl NoopEventSink {
    pub const fn new() -> Self {
        Self
    }
}

impl OffloadEventSink for NoopEventSink {
    fn emit(&self, _event: OffloadEvent) {
        // Intentionally do nothing
    }
}

/// A sink that turns events into `tracing` records.
///
/// Conflicts are warnings, skips and selections are info, the rest debug.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl TracingEventSink {
    pub const fn new() -> Self {
        Self
    }
}

impl OffloadEventSink for TracingEventSink {
    fn emit(&self, event: OffloadEvent) {
        match event {
            OffloadEvent::Disabled => {
                tracing::info!("Forced GPU option is empty, skipping PRIME offload");
            }
            OffloadEvent::DevicesProbed { count } => {
                tracing::debug!(count, "Probed GPUs");
            }
            OffloadEvent::OffloadSkipped {
                reason,
                device_count,
            } => match reason {
                SkipReason::TooFewDevices => {
                    tracing::info!(device_count, "One GPU or fewer, skipping PRIME offload");
                }
                SkipReason::DeferToRenderer => {
                    tracing::info!(
                        device_count,
                        "Multiple GPUs, leaving device selection to the renderer"
                    );
                }
                SkipReason::NoInternalPanel => {
                    tracing::info!("card0 has no eDP output, not a laptop, skipping PRIME offload");
                }
            },
            OffloadEvent::EnvApplied { key, value } => {
                tracing::debug!(%key, %value, "Set environment variable");
            }
            OffloadEvent::EnvConflict {
                key,
                existing,
                proposed,
            } => {
                tracing::warn!(
                    %key,
                    %existing,
                    %proposed,
                    "Environment variable already defined, keeping existing value"
                );
            }
            OffloadEvent::DeviceSelected {
                index,
                card,
                path,
                id,
                gl_vendor,
            } => {
                tracing::info!(
                    index,
                    card,
                    path = %path.display(),
                    %id,
                    %gl_vendor,
                    "Chose GPU"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_noop_sink() {
        let sink = NoopEventSink::new();
        // Should not panic
        sink.emit(OffloadEvent::Disabled);
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        let sink: Arc<dyn OffloadEventSink> = Arc::new(TracingEventSink::new());
        sink.emit(OffloadEvent::EnvConflict {
            key: "DRI_PRIME".to_string(),
            existing: "custom".to_string(),
            proposed: "10de:25a2".to_string(),
        });
        sink.emit(OffloadEvent::OffloadSkipped {
            reason: SkipReason::DeferToRenderer,
            device_count: 3,
        });
    }
}
