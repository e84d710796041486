//! Test utilities for the orbit model and simulation clock.
//!
//! Provides fixtures for clocks in known states and assertions for geometric
//! invariants of the orbit ellipse.

use crate::time::SimulationClock;
use crate::types::SpeedLevel;

/// Fixtures for creating clocks in known states.
pub mod fixtures {
    use super::*;

    /// A running clock that has already received its reference frame at `t = 0`.
    pub fn primed_clock(speed: SpeedLevel) -> SimulationClock {
        let mut clock = SimulationClock::default();
        clock.set_speed_level(speed);
        clock.tick(0.0);
        clock
    }

    /// A clock advanced to exactly `days` simulated days.
    ///
    /// Uses the one-day-per-second level so that `days` seconds of frames
    /// land on the requested value.
    pub fn clock_at_days(days: f64) -> SimulationClock {
        let mut clock = primed_clock(SpeedLevel::Day);
        clock.tick(days * 1000.0);
        clock
    }

    /// Feed a sequence of frame timestamps (ms) into a clock.
    pub fn replay(clock: &mut SimulationClock, frames: &[f64]) {
        for &now in frames {
            clock.tick(now);
        }
    }
}

/// Assertions for geometric invariants.
pub mod assertions {
    use bevy::math::DVec2;

    use crate::types::{ORBIT_RX, ORBIT_RY};

    /// `(x/RX)² + (y/RY)² - 1`; zero on the ellipse.
    pub fn ellipse_residual(pos: DVec2) -> f64 {
        (pos.x / ORBIT_RX).powi(2) + (pos.y / ORBIT_RY).powi(2) - 1.0
    }

    /// Assert that a point lies on the orbit ellipse.
    ///
    /// # Panics
    /// Panics if the residual exceeds `tolerance`.
    pub fn assert_on_ellipse(pos: DVec2, tolerance: f64) {
        let residual = ellipse_residual(pos);
        assert!(
            residual.abs() <= tolerance,
            "Point off ellipse: pos=({:.6}, {:.6}), residual={residual:.3e}, tolerance={tolerance:.3e}",
            pos.x,
            pos.y
        );
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bevy::math::DVec2;

    #[test]
    fn test_clock_at_days_lands_exactly() {
        let clock = fixtures::clock_at_days(182.0);
        assert_relative_eq!(clock.elapsed_days(), 182.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ellipse_residual_on_axes() {
        assert_relative_eq!(assertions::ellipse_residual(DVec2::new(250.0, 0.0)), 0.0);
        assert_relative_eq!(assertions::ellipse_residual(DVec2::new(0.0, -180.0)), 0.0);
        assert!(assertions::ellipse_residual(DVec2::ZERO) < 0.0);
    }

    #[test]
    #[should_panic(expected = "Point off ellipse")]
    fn test_assert_on_ellipse_rejects_center() {
        assertions::assert_on_ellipse(DVec2::ZERO, 1e-9);
    }

    #[test]
    fn test_headless_app_updates() {
        let mut app = bevy_test::headless_app();
        app.update();
    }
}
