//! Structured events emitted while resolving a forced-GPU directive.
//!
//! Decision functions stay silent; the orchestrator reports what happened
//! through an [`OffloadEventSink`](crate::ports::OffloadEventSink) and the
//! caller decides how to render it.
//!
//! # Wire Format
//!
//! ```json
//! { "type": "device_selected", "index": 1, "card": 1, "id": "10de:25a2", "glVendor": "nvidia" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::GlVendor;

/// Why offload selection was skipped without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Zero or one GPU: nothing to choose between.
    TooFewDevices,
    /// Three or more GPUs and a renderer trusted to pick correctly.
    DeferToRenderer,
    /// Device 0 has no eDP output, so this is not a laptop PRIME layout.
    NoInternalPanel,
}

/// Events produced during offload resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OffloadEvent {
    /// The forced-GPU directive is empty; nothing was probed.
    Disabled,

    /// Devices were enumerated.
    DevicesProbed {
        /// Number of GPUs found.
        count: usize,
    },

    /// The policy declined a role directive.
    OffloadSkipped {
        reason: SkipReason,
        /// Number of GPUs found.
        #[serde(rename = "deviceCount")]
        device_count: usize,
    },

    /// An environment variable was set.
    EnvApplied { key: String, value: String },

    /// The caller already set a variable; their value was kept.
    EnvConflict {
        key: String,
        existing: String,
        proposed: String,
    },

    /// A device was chosen and its environment applied.
    DeviceSelected {
        /// Position in the probed device list.
        index: usize,
        card: u32,
        path: PathBuf,
        id: String,
        #[serde(rename = "glVendor")]
        gl_vendor: GlVendor,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_format() {
        let event = OffloadEvent::DeviceSelected {
            index: 1,
            card: 1,
            path: PathBuf::from("/sys/class/drm/card1"),
            id: "10de:25a2".to_string(),
            gl_vendor: GlVendor::Nvidia,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "device_selected");
        assert_eq!(json["glVendor"], "nvidia");
        assert_eq!(json["id"], "10de:25a2");
    }

    #[test]
    fn test_skip_event_wire_format() {
        let event = OffloadEvent::OffloadSkipped {
            reason: SkipReason::NoInternalPanel,
            device_count: 2,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"offload_skipped","reason":"no_internal_panel","deviceCount":2}"#
        );
        let back: OffloadEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
