//! Position synchronization between the orbit model and rendering.
//!
//! Updates Earth's Transform from the clock's current orbital state.

use bevy::prelude::*;

use crate::render::bodies::Earth;
use crate::render::{to_render, z_layers};
use crate::time::SimulationClock;

/// Sync Earth's render position and spin from the orbit model.
pub fn sync_earth_transform(
    mut query: Query<&mut Transform, With<Earth>>,
    clock: Res<SimulationClock>,
) {
    let state = clock.orbital_state();

    for mut transform in query.iter_mut() {
        transform.translation = to_render(state.position, z_layers::EARTH);
        // Counter-clockwise spin seen from above the north pole
        transform.rotation = Quat::from_rotation_z(state.rotation_degrees.to_radians() as f32);
    }
}
