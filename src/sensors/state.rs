//! Live sensor state — the shared holder the broadcast loop reads.
//!
//! The producing subsystem (whatever simulates or forwards host sensor
//! data) writes current values through [`SensorState::update`]; the bridge
//! core only ever reads, one channel at a time. Reads taken within the same
//! broadcast tick may therefore observe different update instants — values
//! change slowly relative to the tick interval, so no cross-channel
//! snapshot is taken.
//!
//! A separately-maintained disabled mask permanently removes channels from
//! ever being reported as available by `list-sensors`.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU32, Ordering};

use super::{SensorKind, SensorValue};
use crate::bridge::ports::SensorSource;

/// Current readings for every channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReadings {
    pub acceleration: (f64, f64, f64),
    pub magnetic_field: (f64, f64, f64),
    pub orientation: (f64, f64, f64),
    pub temperature: f64,
    pub proximity: f64,
    pub light: f64,
    pub pressure: f64,
    pub humidity: f64,
}

impl Default for SensorReadings {
    fn default() -> Self {
        Self {
            acceleration: (0.0, 0.0, 0.0),
            magnetic_field: (0.0, 0.0, 0.0),
            orientation: (0.0, 0.0, 0.0),
            temperature: 0.0,
            proximity: 0.0,
            light: 0.0,
            pressure: 0.0,
            humidity: 0.0,
        }
    }
}

impl SensorReadings {
    /// Current value of one channel.
    pub fn value(&self, kind: SensorKind) -> SensorValue {
        match kind {
            SensorKind::Acceleration => {
                let (x, y, z) = self.acceleration;
                SensorValue::Triple(x, y, z)
            }
            SensorKind::MagneticField => {
                let (x, y, z) = self.magnetic_field;
                SensorValue::Triple(x, y, z)
            }
            SensorKind::Orientation => {
                let (x, y, z) = self.orientation;
                SensorValue::Triple(x, y, z)
            }
            SensorKind::Temperature => SensorValue::Scalar(self.temperature),
            SensorKind::Proximity => SensorValue::Scalar(self.proximity),
            SensorKind::Light => SensorValue::Scalar(self.light),
            SensorKind::Pressure => SensorValue::Scalar(self.pressure),
            SensorKind::Humidity => SensorValue::Scalar(self.humidity),
        }
    }
}

/// Shared live holder: producer writes, bridge reads.
pub struct SensorState {
    readings: RwLock<SensorReadings>,
    disabled: AtomicU32,
}

impl SensorState {
    pub fn new() -> Self {
        Self {
            readings: RwLock::new(SensorReadings::default()),
            disabled: AtomicU32::new(0),
        }
    }

    /// Mutate the current readings in place (producer side).
    pub fn update<F: FnOnce(&mut SensorReadings)>(&self, f: F) {
        let mut guard = self
            .readings
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut guard);
    }

    /// Copy of the current readings.
    pub fn readings(&self) -> SensorReadings {
        *self
            .readings
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Permanently remove a channel from the advertised set.
    pub fn disable(&self, kind: SensorKind) {
        self.disabled.fetch_or(kind.mask(), Ordering::Release);
    }
}

impl Default for SensorState {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorSource for SensorState {
    fn read(&self, kind: SensorKind) -> SensorValue {
        self.readings().value(kind)
    }

    fn disabled_mask(&self) -> u32 {
        self.disabled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_zeroed_readings() {
        let state = SensorState::new();
        assert_eq!(
            state.read(SensorKind::Acceleration),
            SensorValue::Triple(0.0, 0.0, 0.0)
        );
        assert_eq!(state.read(SensorKind::Humidity), SensorValue::Scalar(0.0));
        assert_eq!(state.disabled_mask(), 0);
    }

    #[test]
    fn update_is_visible_to_reads() {
        let state = SensorState::new();
        state.update(|r| {
            r.temperature = 21.5;
            r.acceleration = (0.0, 9.81, 0.0);
        });
        assert_eq!(state.read(SensorKind::Temperature), SensorValue::Scalar(21.5));
        assert_eq!(
            state.read(SensorKind::Acceleration),
            SensorValue::Triple(0.0, 9.81, 0.0)
        );
    }

    #[test]
    fn disable_accumulates_bits() {
        let state = SensorState::new();
        state.disable(SensorKind::Humidity);
        state.disable(SensorKind::Pressure);
        assert_eq!(
            state.disabled_mask(),
            SensorKind::Humidity.mask() | SensorKind::Pressure.mask()
        );
    }

    #[test]
    fn every_kind_is_readable() {
        let state = SensorState::new();
        for kind in SensorKind::ALL {
            match state.read(kind) {
                SensorValue::Triple(..) => assert!(kind.is_triple()),
                SensorValue::Scalar(_) => assert!(!kind.is_triple()),
            }
        }
    }
}
