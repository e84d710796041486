//! Orbit path rendering using Bevy Gizmos.
//!
//! Draws the orbit ellipse as a dashed closed polyline, markers at the
//! equinox and solstice points, and a radius line from the Sun to Earth.

use bevy::math::{DVec2, Isometry2d};
use bevy::prelude::*;

use crate::orbit::{self, SeasonalPhase};
use crate::time::SimulationClock;
use crate::types::DAYS_PER_YEAR;

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show the orbit path.
    pub visible: bool,
    /// Number of segments for drawing the ellipse (higher = smoother).
    pub segments: u32,
    /// Alpha value for the orbit path color.
    pub alpha: f32,
    /// Dash pattern: draw N segments, then skip M segments, repeating.
    ///
    /// Set to (1, 0) for a solid line.
    pub dash_on: u32,
    pub dash_off: u32,
    /// Whether to mark the equinox and solstice points.
    pub show_markers: bool,
    /// Whether to draw the Sun–Earth radius line.
    pub show_radius: bool,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 256,
            alpha: 0.45,
            dash_on: 2,
            dash_off: 2,
            show_markers: true,
            show_radius: true,
        }
    }
}

/// Equinox and solstice points at quarter-year intervals, with their phase.
pub fn season_markers() -> [(SeasonalPhase, DVec2); 4] {
    [0.0, 0.25, 0.5, 0.75].map(|fraction| {
        let day = fraction * DAYS_PER_YEAR;
        let pos = orbit::position(orbit::orbital_angle(day));
        (SeasonalPhase::from_day_of_year(day), pos)
    })
}

/// Sample `segments + 1` points around the ellipse; the last repeats the first.
pub fn ellipse_points(segments: u32) -> Vec<Vec2> {
    (0..=segments)
        .map(|i| {
            let angle = i as f64 / segments as f64 * std::f64::consts::TAU;
            orbit::position(angle).as_vec2()
        })
        .collect()
}

/// Whether segment `i` is drawn under an on/off dash pattern.
///
/// Based on the segment index so the pattern stays fixed as Earth moves.
pub fn dash_visible(i: u32, on: u32, off: u32) -> bool {
    let on = on.max(1);
    i % (on + off) < on
}

/// Draw the orbit ellipse.
pub fn draw_orbit_path(mut gizmos: Gizmos, settings: Res<OrbitPathSettings>) {
    if !settings.visible {
        return;
    }

    let color = Color::srgba(0.6, 0.7, 0.9, settings.alpha);
    let points = ellipse_points(settings.segments.max(64));

    for (i, pair) in points.windows(2).enumerate() {
        if dash_visible(i as u32, settings.dash_on, settings.dash_off) {
            gizmos.line_2d(pair[0], pair[1], color);
        }
    }
}

/// Draw season markers and the Sun–Earth radius line.
pub fn draw_season_markers(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    clock: Res<SimulationClock>,
) {
    let state = clock.orbital_state();

    if settings.show_markers {
        for (phase, pos) in season_markers() {
            // Highlight the marker of the phase Earth is currently in.
            let (radius, color) = if phase == state.phase {
                (7.0, Color::srgb(1.0, 0.85, 0.3))
            } else {
                (4.0, Color::srgba(0.8, 0.8, 0.9, 0.7))
            };
            gizmos.circle_2d(Isometry2d::from_translation(pos.as_vec2()), radius, color);
        }
    }

    if settings.show_radius {
        gizmos.line_2d(
            Vec2::ZERO,
            state.position.as_vec2(),
            Color::srgba(1.0, 0.85, 0.3, 0.25),
        );
    }
}
