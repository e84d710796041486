//! Common test utilities for integration tests.

use earth_orbit::time::SimulationClock;
use earth_orbit::types::SpeedLevel;

/// Frame timestamps (ms) at 60 Hz covering `seconds`, starting at zero.
pub fn frames_at_60hz(seconds: f64) -> Vec<f64> {
    let count = (seconds * 60.0).round() as usize;
    (0..=count).map(|i| i as f64 * 1000.0 / 60.0).collect()
}

/// A clock advanced to exactly `days` simulated days.
pub fn clock_at_days(days: f64) -> SimulationClock {
    let mut clock = SimulationClock::default();
    clock.set_speed_level(SpeedLevel::Day);
    clock.tick(0.0);
    clock.tick(days * 1000.0);
    clock
}
