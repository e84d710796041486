//! Property-based tests for the orbit kinematics using proptest.
//!
//! These tests verify the model's invariants across the whole range of
//! simulated time a session can reach.

use proptest::prelude::*;

use super::*;
use crate::test_utils::assertions;
use crate::types::DAYS_PER_YEAR;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Day of year always lands in [0, 365.25).
    #[test]
    fn prop_day_of_year_in_range(elapsed in 0.0f64..1.0e7) {
        let day = day_of_year(elapsed);
        prop_assert!((0.0..DAYS_PER_YEAR).contains(&day), "day_of_year({elapsed}) = {day}");
    }

    /// Orbital angle always lands in [0, 2π).
    #[test]
    fn prop_orbital_angle_in_range(elapsed in 0.0f64..1.0e7) {
        let angle = orbital_angle(day_of_year(elapsed));
        prop_assert!((0.0..TAU).contains(&angle), "angle = {angle}");
    }

    /// Position always lies on the ellipse.
    #[test]
    fn prop_position_on_ellipse(elapsed in 0.0f64..1.0e6) {
        let state = OrbitalState::at(elapsed, true);
        prop_assert!(
            assertions::ellipse_residual(state.position).abs() < 1e-9,
            "residual {} at {elapsed} days",
            assertions::ellipse_residual(state.position)
        );
    }

    /// Seasonal phase repeats every orbit.
    #[test]
    fn prop_phase_periodic(elapsed in 0.0f64..1.0e5) {
        // Skip values within rounding distance of a day boundary, where adding
        // a year can change the floor.
        let next = elapsed + DAYS_PER_YEAR;
        let frac = day_of_year(elapsed).fract();
        prop_assume!(frac > 1e-6 && frac < 1.0 - 1e-6);
        prop_assert_eq!(
            SeasonalPhase::from_day_of_year(day_of_year(elapsed)),
            SeasonalPhase::from_day_of_year(day_of_year(next))
        );
    }

    /// Position repeats every orbit.
    #[test]
    fn prop_position_periodic(elapsed in 0.0f64..1.0e5) {
        let a = position(orbital_angle(day_of_year(elapsed)));
        let b = position(orbital_angle(day_of_year(elapsed + DAYS_PER_YEAR)));
        prop_assert!((a - b).length() < 1e-6, "{a:?} vs {b:?}");
    }

    /// Rotation stays in [0, 360) when enabled and is pinned to 0 otherwise.
    #[test]
    fn prop_rotation_range(elapsed in 0.0f64..1.0e6) {
        let enabled = rotation_angle(elapsed, true);
        prop_assert!((0.0..360.0).contains(&enabled));
        prop_assert_eq!(rotation_angle(elapsed, false), 0.0);
    }

    /// Distance stays between perihelion and aphelion.
    #[test]
    fn prop_distance_bounded(angle in 0.0f64..TAU) {
        let d = distance_from_sun(angle);
        prop_assert!(d >= perihelion_au() - 1e-12 && d <= aphelion_au() + 1e-12, "d = {d}");
    }

    /// Evaluating twice yields identical output.
    #[test]
    fn prop_state_idempotent(elapsed in 0.0f64..1.0e7, rotation in any::<bool>()) {
        prop_assert_eq!(OrbitalState::at(elapsed, rotation), OrbitalState::at(elapsed, rotation));
    }

    /// The calendar date advances by exactly the whole-day offset.
    #[test]
    fn prop_date_matches_offset(elapsed in 0.0f64..1.0e5) {
        let state = OrbitalState::at(elapsed, false);
        let days = (state.date - calendar::START_DATE).num_days();
        prop_assert_eq!(days, state.day_offset);
        prop_assert_eq!(days, elapsed.floor() as i64);
    }
}
