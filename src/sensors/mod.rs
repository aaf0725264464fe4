//! Sensor model — channel kinds, their bitmask identities, and the value
//! type carried on the wire.
//!
//! Every kind occupies a distinct bit in a 32-bit mask so that the enabled
//! set, the permanently-disabled set, and the `list-sensors` response are
//! all plain masks over the same bits. Broadcast iteration follows the
//! declaration order of [`SensorKind::ALL`].

pub mod state;

use core::fmt;

/// One named category of virtual sensor data.
///
/// Discriminants are the bitmask values; they are mutually exclusive and
/// stable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SensorKind {
    Acceleration = 1 << 0,
    MagneticField = 1 << 1,
    Orientation = 1 << 2,
    Temperature = 1 << 3,
    Proximity = 1 << 4,
    Light = 1 << 5,
    Pressure = 1 << 6,
    Humidity = 1 << 7,
}

impl SensorKind {
    /// Every kind, in broadcast order.
    pub const ALL: [SensorKind; 8] = [
        SensorKind::Acceleration,
        SensorKind::MagneticField,
        SensorKind::Orientation,
        SensorKind::Temperature,
        SensorKind::Proximity,
        SensorKind::Light,
        SensorKind::Pressure,
        SensorKind::Humidity,
    ];

    /// Return the bitmask for this kind.
    pub const fn mask(self) -> u32 {
        self as u32
    }

    /// Bitmask with every known kind set.
    pub const fn full_mask() -> u32 {
        let mut mask = 0;
        let mut i = 0;
        while i < Self::ALL.len() {
            mask |= Self::ALL[i] as u32;
            i += 1;
        }
        mask
    }

    /// Name under which readings for this kind are reported.
    pub const fn report_name(self) -> &'static str {
        match self {
            Self::Acceleration => "acceleration",
            Self::MagneticField => "magnetic",
            Self::Orientation => "orientation",
            Self::Temperature => "temperature",
            Self::Proximity => "proximity",
            Self::Light => "light",
            Self::Pressure => "pressure",
            Self::Humidity => "humidity",
        }
    }

    /// Resolve a symbolic name from the command protocol.
    ///
    /// Accepts the report names plus `magnetic-field`, the spelling the
    /// consumer driver uses on the command side for the magnetic channel.
    pub fn from_protocol_name(name: &str) -> Option<SensorKind> {
        match name {
            "acceleration" => Some(Self::Acceleration),
            "magnetic" | "magnetic-field" => Some(Self::MagneticField),
            "orientation" => Some(Self::Orientation),
            "temperature" => Some(Self::Temperature),
            "proximity" => Some(Self::Proximity),
            "light" => Some(Self::Light),
            "pressure" => Some(Self::Pressure),
            "humidity" => Some(Self::Humidity),
            _ => None,
        }
    }

    /// Whether this kind carries a 3-axis reading.
    pub const fn is_triple(self) -> bool {
        matches!(
            self,
            Self::Acceleration | Self::MagneticField | Self::Orientation
        )
    }
}

/// A current reading for one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorValue {
    /// Single scalar channel (temperature, proximity, light, pressure,
    /// humidity).
    Scalar(f64),
    /// 3-axis channel (acceleration, magnetic field, orientation).
    Triple(f64, f64, f64),
}

impl fmt::Display for SensorValue {
    /// Fixed-point decimal, six places; triples as `x:y:z`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Scalar(v) => write!(f, "{v:.6}"),
            Self::Triple(x, y, z) => write!(f, "{x:.6}:{y:.6}:{z:.6}"),
        }
    }
}
