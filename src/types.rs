//! Core constants and control types for the Earth–Sun orbit model.

/// Semi-major axis of the orbit ellipse, in scene units (along x).
pub const ORBIT_RX: f64 = 250.0;

/// Semi-minor axis of the orbit ellipse, in scene units (along y).
pub const ORBIT_RY: f64 = 180.0;

/// Length of one orbit in simulated days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Axial rotation per simulated day, in degrees.
pub const DEGREES_PER_DAY: f64 = 360.0;

/// Milliseconds per real-world second (frame timestamps are in ms).
pub const MILLIS_PER_SECOND: f64 = 1000.0;

/// Errors raised by the simulation clock controls.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    /// A speed level index outside the fixed set was requested.
    #[error("speed level index {index} out of range (expected 0..{count})")]
    SpeedLevelOutOfRange { index: usize, count: usize },
}

/// Selectable simulation speed, in simulated days per real second.
///
/// The set is closed: indices 0–3 map to one day, one week, one month
/// and one year per second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpeedLevel {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl SpeedLevel {
    /// All speed levels in index order.
    pub const ALL: [SpeedLevel; 4] = [
        SpeedLevel::Day,
        SpeedLevel::Week,
        SpeedLevel::Month,
        SpeedLevel::Year,
    ];

    /// Look up a speed level by its slider/shortcut index.
    pub fn from_index(index: usize) -> Result<Self, ClockError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ClockError::SpeedLevelOutOfRange {
                index,
                count: Self::ALL.len(),
            })
    }

    /// Position of this level in [`SpeedLevel::ALL`].
    pub fn index(self) -> usize {
        match self {
            SpeedLevel::Day => 0,
            SpeedLevel::Week => 1,
            SpeedLevel::Month => 2,
            SpeedLevel::Year => 3,
        }
    }

    /// Simulated days advanced per real second.
    pub fn days_per_second(self) -> f64 {
        match self {
            SpeedLevel::Day => 1.0,
            SpeedLevel::Week => 7.0,
            SpeedLevel::Month => 30.4,
            SpeedLevel::Year => DAYS_PER_YEAR,
        }
    }

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            SpeedLevel::Day => "1 day/s",
            SpeedLevel::Week => "1 week/s",
            SpeedLevel::Month => "1 month/s",
            SpeedLevel::Year => "1 year/s",
        }
    }
}
