//! Input handling for keyboard shortcuts.
//!
//! Provides keyboard controls for the simulation clock and camera zoom.

use bevy::prelude::*;

use crate::camera::{CameraState, ZOOM_SPEED};
use crate::time::SimulationClock;
use crate::types::SpeedLevel;

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// Speed level selected by a number key, if any was just pressed.
pub fn speed_for_key(keys: &ButtonInput<KeyCode>) -> Option<SpeedLevel> {
    [
        (KeyCode::Digit1, SpeedLevel::Day),
        (KeyCode::Digit2, SpeedLevel::Week),
        (KeyCode::Digit3, SpeedLevel::Month),
        (KeyCode::Digit4, SpeedLevel::Year),
    ]
    .into_iter()
    .find(|(key, _)| keys.just_pressed(*key))
    .map(|(_, level)| level)
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimulationClock>,
    mut camera_state: ResMut<CameraState>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.toggle_paused();
    }

    // 1-4: speed levels
    if let Some(level) = speed_for_key(&keys) {
        clock.set_speed_level(level);
    }

    // R: toggle Earth rotation
    if keys.just_pressed(KeyCode::KeyR) {
        clock.toggle_rotation();
    }

    // Backspace: back to the epoch
    if keys.just_pressed(KeyCode::Backspace) {
        clock.reset();
    }

    // Plus/Equal: zoom in (reduce scale)
    if keys.pressed(KeyCode::Equal) || keys.pressed(KeyCode::NumpadAdd) {
        camera_state.zoom_by(1.0 - ZOOM_SPEED);
    }

    // Minus: zoom out (increase scale)
    if keys.pressed(KeyCode::Minus) || keys.pressed(KeyCode::NumpadSubtract) {
        camera_state.zoom_by(1.0 + ZOOM_SPEED);
    }
}
