//! Bridge configuration parameters
//!
//! Tunables fixed at processor construction. Values can be overridden by
//! the owning session, e.g. from a JSON blob shipped with the emulated
//! device profile.

use serde::{Deserialize, Serialize};

/// Core bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Initial broadcast interval (milliseconds). The consumer adjusts it
    /// at runtime via `set-delay:<ms>`.
    pub broadcast_interval_ms: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            broadcast_interval_ms: 200, // 5 Hz
        }
    }
}

impl BridgeConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialise the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
