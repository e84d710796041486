//! Kinematics of the simplified Earth orbit.
//!
//! Earth moves along an axis-aligned ellipse centered on the Sun at constant
//! angular speed (one revolution per 365.25 simulated days) and spins once per
//! simulated day. This is deliberately not Keplerian: there is no equal-areas
//! sweep.
//!
//! Every function here is pure. [`OrbitalState::at`] bundles all derived
//! quantities for one instant.

mod phase;
#[cfg(test)]
mod proptest_orbit;

pub use phase::SeasonalPhase;

use std::f64::consts::{FRAC_PI_2, TAU};

use bevy::math::DVec2;
use chrono::NaiveDate;

use crate::calendar;
use crate::types::{DAYS_PER_YEAR, DEGREES_PER_DAY, ORBIT_RX, ORBIT_RY};

/// Reduce `value` into `[0, period)`.
///
/// `rem_euclid` may round up to `period` for tiny negative inputs.
fn wrap(value: f64, period: f64) -> f64 {
    let wrapped = value.rem_euclid(period);
    if wrapped >= period { 0.0 } else { wrapped }
}

/// Fractional day within the current orbit, in `[0, 365.25)`.
pub fn day_of_year(elapsed_days: f64) -> f64 {
    wrap(elapsed_days, DAYS_PER_YEAR)
}

/// Orbital angle in radians, in `[0, 2π)`. Zero is the vernal equinox.
pub fn orbital_angle(day_of_year: f64) -> f64 {
    wrap(TAU * day_of_year / DAYS_PER_YEAR, TAU)
}

/// Position on the orbit ellipse for an orbital angle, Sun at the origin.
pub fn position(angle: f64) -> DVec2 {
    DVec2::new(ORBIT_RX * angle.cos(), ORBIT_RY * angle.sin())
}

/// Axial rotation in degrees, in `[0, 360)`. One full turn per simulated day.
pub fn rotation_angle(elapsed_days: f64, rotation_enabled: bool) -> f64 {
    if !rotation_enabled {
        return 0.0;
    }
    wrap(elapsed_days * DEGREES_PER_DAY, DEGREES_PER_DAY)
}

/// Distance from the Sun in AU, where the semi-major axis is 1 AU.
///
/// Uses the polar radius of the ellipse at `angle`.
pub fn distance_from_sun(angle: f64) -> f64 {
    let (sin, cos) = angle.sin_cos();
    let denom = ((ORBIT_RY * cos).powi(2) + (ORBIT_RX * sin).powi(2)).sqrt();
    (ORBIT_RX * ORBIT_RY) / denom / ORBIT_RX
}

/// Eccentricity of the orbit ellipse.
pub fn eccentricity() -> f64 {
    (1.0 - (ORBIT_RY / ORBIT_RX).powi(2)).sqrt()
}

/// Closest approach in AU (on the minor axis).
pub fn perihelion_au() -> f64 {
    distance_from_sun(FRAC_PI_2)
}

/// Farthest distance in AU (on the major axis).
pub fn aphelion_au() -> f64 {
    distance_from_sun(0.0)
}

/// Calendar date for an elapsed simulated time.
pub fn calendar_date(elapsed_days: f64) -> NaiveDate {
    calendar::date_at(elapsed_days)
}

/// Number of full orbits completed.
pub fn completed_orbits(elapsed_days: f64) -> u64 {
    if elapsed_days.is_finite() && elapsed_days > 0.0 {
        (elapsed_days / DAYS_PER_YEAR).floor() as u64
    } else {
        0
    }
}

/// Fraction of the current orbit completed, in `[0, 1)`.
pub fn year_progress(day_of_year: f64) -> f64 {
    day_of_year / DAYS_PER_YEAR
}

/// Every derived quantity of the model at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalState {
    /// Simulated days since the epoch.
    pub elapsed_days: f64,
    /// Fractional day within the current orbit.
    pub day_of_year: f64,
    /// Orbital angle in radians.
    pub orbital_angle: f64,
    /// Position on the ellipse in scene units.
    pub position: DVec2,
    /// Axial rotation in degrees.
    pub rotation_degrees: f64,
    /// Named seasonal phase.
    pub phase: SeasonalPhase,
    /// Distance from the Sun in AU.
    pub distance_au: f64,
    /// Whole days since [`calendar::START_DATE`].
    pub day_offset: i64,
    /// Calendar date.
    pub date: NaiveDate,
}

impl OrbitalState {
    /// Evaluate the model.
    pub fn at(elapsed_days: f64, rotation_enabled: bool) -> Self {
        let day_of_year = day_of_year(elapsed_days);
        let orbital_angle = orbital_angle(day_of_year);
        Self {
            elapsed_days,
            day_of_year,
            orbital_angle,
            position: position(orbital_angle),
            rotation_degrees: rotation_angle(elapsed_days, rotation_enabled),
            phase: SeasonalPhase::from_day_of_year(day_of_year),
            distance_au: distance_from_sun(orbital_angle),
            day_offset: calendar::day_offset(elapsed_days),
            date: calendar::date_at(elapsed_days),
        }
    }

    /// Full orbits completed so far.
    pub fn completed_orbits(&self) -> u64 {
        completed_orbits(self.elapsed_days)
    }

    /// Fraction of the current orbit completed.
    pub fn year_progress(&self) -> f64 {
        year_progress(self.day_of_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assertions::assert_on_ellipse;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_day_of_year_wraps() {
        assert_eq!(day_of_year(0.0), 0.0);
        assert_eq!(day_of_year(100.5), 100.5);
        assert_relative_eq!(day_of_year(365.25), 0.0);
        assert_relative_eq!(day_of_year(400.0), 34.75, epsilon = 1e-9);
        assert!(day_of_year(-1e-20) < DAYS_PER_YEAR);
    }

    #[test]
    fn test_orbital_angle_quarters() {
        assert_eq!(orbital_angle(0.0), 0.0);
        assert_relative_eq!(orbital_angle(DAYS_PER_YEAR / 4.0), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(orbital_angle(DAYS_PER_YEAR / 2.0), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_position_at_cardinal_angles() {
        let p0 = position(0.0);
        assert_relative_eq!(p0.x, 250.0, epsilon = 1e-12);
        assert_relative_eq!(p0.y, 0.0, epsilon = 1e-12);

        let p1 = position(FRAC_PI_2);
        assert_relative_eq!(p1.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p1.y, 180.0, epsilon = 1e-12);

        let p2 = position(PI);
        assert_relative_eq!(p2.x, -250.0, epsilon = 1e-12);
        assert_on_ellipse(p2, 1e-9);
    }

    #[test]
    fn test_rotation_angle() {
        assert_eq!(rotation_angle(0.5, true), 180.0);
        assert_eq!(rotation_angle(1.0, true), 0.0);
        assert_relative_eq!(rotation_angle(2.25, true), 90.0, epsilon = 1e-9);
        assert_eq!(rotation_angle(0.5, false), 0.0);
        assert_eq!(rotation_angle(1234.567, false), 0.0);
    }

    #[test]
    fn test_distance_from_sun() {
        assert_relative_eq!(distance_from_sun(0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(distance_from_sun(PI), 1.0, epsilon = 1e-12);
        assert_relative_eq!(distance_from_sun(FRAC_PI_2), 0.72, epsilon = 1e-12);
        assert_relative_eq!(perihelion_au(), 0.72, epsilon = 1e-12);
        assert_relative_eq!(aphelion_au(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eccentricity() {
        // sqrt(1 - 0.72^2)
        assert_relative_eq!(eccentricity(), 0.4816_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(eccentricity(), 0.6940, epsilon = 1e-4);
    }

    #[test]
    fn test_completed_orbits_and_progress() {
        assert_eq!(completed_orbits(0.0), 0);
        assert_eq!(completed_orbits(365.0), 0);
        assert_eq!(completed_orbits(365.25), 1);
        assert_eq!(completed_orbits(1000.0), 2);
        assert_eq!(completed_orbits(-5.0), 0);
        assert_relative_eq!(year_progress(DAYS_PER_YEAR / 2.0), 0.5);
    }

    #[test]
    fn test_state_at_epoch() {
        let state = OrbitalState::at(0.0, true);
        assert_eq!(state.day_of_year, 0.0);
        assert_eq!(state.phase, SeasonalPhase::VernalEquinox);
        assert_eq!(state.date, calendar::START_DATE);
        assert_eq!(state.day_offset, 0);
        assert_relative_eq!(state.position.x, 250.0, epsilon = 1e-12);
        assert_relative_eq!(state.position.y, 0.0, epsilon = 1e-12);
        assert_eq!(state.rotation_degrees, 0.0);
    }

    #[test]
    fn test_state_is_pure() {
        let a = OrbitalState::at(123.456, true);
        let b = OrbitalState::at(123.456, true);
        assert_eq!(a, b);
    }
}
