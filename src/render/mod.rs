//! Rendering systems for the orbit view.
//!
//! This module provides the visual representation of the Sun and Earth,
//! the orbit path with its season markers, and on-canvas labels.

pub mod bodies;
mod labels;
pub mod orbits;
mod sync;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use self::bodies::CelestialBodyPlugin;
use self::labels::{LabelSettings, draw_body_labels};
use self::orbits::{OrbitPathSettings, draw_orbit_path, draw_season_markers};
use self::sync::sync_earth_transform;

// Re-export for use in other modules
pub use self::bodies::{Earth, Sun};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CelestialBodyPlugin)
            .init_resource::<OrbitPathSettings>()
            .init_resource::<LabelSettings>()
            // Earth must be placed before the radius line is drawn to it
            .add_systems(
                Update,
                (sync_earth_transform, (draw_orbit_path, draw_season_markers)).chain(),
            )
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}

/// Convert a scene position (f64) into a render-space point.
pub fn to_render(pos: bevy::math::DVec2, z: f32) -> Vec3 {
    Vec3::new(pos.x as f32, pos.y as f32, z)
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Orbit path and markers.
    pub const ORBIT: f32 = 0.0;
    /// The Sun.
    pub const SUN: f32 = 1.0;
    /// Earth.
    pub const EARTH: f32 = 2.0;
    /// Details drawn on top of Earth (rotation marker), relative to Earth.
    pub const EARTH_DETAIL: f32 = 0.1;
}
