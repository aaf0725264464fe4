//! Port traits — the boundary between the bridge core and its collaborators.
//!
//! ```text
//!   SensorSource ──▶ SensorsProcessor ──▶ Transport
//!                         │
//!                         └──▶ DiagnosticSink
//! ```
//!
//! The sensor value source is owned and mutated elsewhere; the processor
//! only reads it. The diagnostic sink decouples unrecognized-command
//! reporting from any process-wide logging singleton.

use crate::sensors::{SensorKind, SensorValue};

/// Read-side port: current values per channel plus the permanently-disabled
/// set.
///
/// Reads happen once per channel per broadcast tick, concurrently with
/// whatever writes the values, so implementations must be internally
/// synchronized. No consistency is required across channels within a tick.
pub trait SensorSource: Send + Sync {
    /// Current value of one channel.
    fn read(&self, kind: SensorKind) -> SensorValue;

    /// Bitmask of channels permanently removed from the advertised set.
    fn disabled_mask(&self) -> u32;
}

/// Sink for protocol diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// An inbound line matched no recognized command form.
    fn unknown_command(&self, raw: &str);
}
