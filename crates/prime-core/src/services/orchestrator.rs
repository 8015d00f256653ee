//! Forced-GPU directive resolution.
//!
//! Terminal outcomes:
//! - unchanged configuration (directive empty, or the policy declined a role)
//! - configuration with the offload environment applied
//! - [`OffloadError::AmbiguousTopology`] from the policy
//! - a directive error (unknown id, index out of range, malformed value)

use crate::domain::{DeviceTable, GpuDirective, OffloadConfig};
use crate::error::{OffloadError, OffloadResult};
use crate::events::OffloadEvent;
use crate::ports::{DeviceProbePort, OffloadEventSink};

use super::policy;
use super::selector::select_device;

/// Resolve the configuration's forced-GPU directive and apply the result.
///
/// Devices are probed only when the directive is non-empty. Role
/// directives go through the offload policy; an explicit id or index is
/// honored on any topology.
pub fn resolve_offload<C: OffloadConfig>(
    config: C,
    probe: &dyn DeviceProbePort,
    events: &dyn OffloadEventSink,
) -> OffloadResult<C> {
    let directive = GpuDirective::parse(config.forced_gpu())?;
    if directive == GpuDirective::Disabled {
        events.emit(OffloadEvent::Disabled);
        return Ok(config);
    }

    let devices = probe.probe();
    events.emit(OffloadEvent::DevicesProbed {
        count: devices.len(),
    });

    let index = match &directive {
        GpuDirective::Integrated | GpuDirective::PrimeDiscrete => {
            let verdict = policy::evaluate(&devices, &config)?;
            if let Some(reason) = verdict.skip_reason() {
                events.emit(OffloadEvent::OffloadSkipped {
                    reason,
                    device_count: devices.len(),
                });
                return Ok(config);
            }
            usize::from(directive == GpuDirective::PrimeDiscrete)
        }
        GpuDirective::DeviceId(id) => devices
            .position_of(id)
            .ok_or_else(|| OffloadError::UnknownDeviceId { id: id.clone() })?,
        GpuDirective::Index(index) => *index,
        GpuDirective::Disabled => return Ok(config),
    };

    apply(config, &devices, index, probe, events)
}

fn apply<C: OffloadConfig>(
    config: C,
    devices: &DeviceTable,
    index: usize,
    probe: &dyn DeviceProbePort,
    events: &dyn OffloadEventSink,
) -> OffloadResult<C> {
    let device = devices.get(index).ok_or(OffloadError::IndexOutOfRange {
        index,
        device_count: devices.len(),
    })?;

    let driver = probe.driver_path(device);
    let selection = select_device(config, device, driver.as_deref());

    for (key, value) in selection.applied {
        events.emit(OffloadEvent::EnvApplied { key, value });
    }
    for conflict in selection.conflicts {
        events.emit(OffloadEvent::EnvConflict {
            key: conflict.key,
            existing: conflict.existing,
            proposed: conflict.proposed,
        });
    }
    events.emit(OffloadEvent::DeviceSelected {
        index,
        card: device.card,
        path: device.path.clone(),
        id: device.id.clone(),
        gl_vendor: selection.gl_vendor,
    });

    Ok(selection.config)
}
