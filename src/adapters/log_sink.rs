//! Log-based diagnostic sink adapter.
//!
//! Implements [`DiagnosticSink`] by writing protocol diagnostics through
//! the `log` facade. A session that wants structured capture (metrics,
//! ring buffer) implements the same trait instead.

use log::warn;

use crate::bridge::ports::DiagnosticSink;

/// Adapter that logs every protocol diagnostic.
pub struct LogDiagnosticSink;

impl LogDiagnosticSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogDiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for LogDiagnosticSink {
    fn unknown_command(&self, raw: &str) {
        warn!("unknown command: {raw:?}");
    }
}
