//! Offload decision services.
//!
//! - `policy` - is offload selection safe and unambiguous on this host
//! - `selector` - environment for a chosen device
//! - `orchestrator` - directive resolution end to end

mod orchestrator;
mod policy;
mod selector;

pub use orchestrator::resolve_offload;
pub use policy::{PolicyVerdict, evaluate, is_offload_safe};
pub use selector::{EnvConflict, Selection, select_device};
