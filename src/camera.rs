//! Camera for the orbit view.
//!
//! A 2D orthographic camera centered on the Sun. The projection scale is
//! recomputed every frame so the whole orbit fits the window (or browser
//! canvas), multiplied by a user zoom factor from the scroll wheel.

use bevy::{input::mouse::AccumulatedMouseScroll, prelude::*, window::PrimaryWindow};

use crate::types::{ORBIT_RX, ORBIT_RY};

/// Minimum user zoom factor (closest zoom).
pub const MIN_ZOOM: f32 = 0.25;

/// Maximum user zoom factor (furthest zoom).
pub const MAX_ZOOM: f32 = 4.0;

/// Zoom speed multiplier for scroll wheel and keys.
pub const ZOOM_SPEED: f32 = 0.1;

/// Empty space kept around the orbit, in scene units.
pub const FIT_MARGIN: f32 = 60.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource tracking camera state.
#[derive(Resource)]
pub struct CameraState {
    /// User zoom factor on top of the fit-to-window scale (1.0 = fit).
    pub zoom: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl CameraState {
    /// Multiply the zoom factor, keeping it within limits.
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraState>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_zoom, fit_orbit_to_window).chain());
    }
}

/// Orthographic scale that fits the orbit plus margin into a viewport of
/// `width` × `height` logical pixels.
pub fn fit_scale(width: f32, height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    let needed_w = 2.0 * ORBIT_RX as f32 + 2.0 * FIT_MARGIN;
    let needed_h = 2.0 * ORBIT_RY as f32 + 2.0 * FIT_MARGIN;
    (needed_w / width).max(needed_h / height)
}

/// Spawn the main camera with orthographic projection.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection::default_2d()),
        Transform::from_xyz(0.0, 0.0, 1000.0),
        MainCamera,
    ));
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(mouse_scroll: Res<AccumulatedMouseScroll>, mut camera_state: ResMut<CameraState>) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    // Logarithmic zoom: scroll up zooms in
    camera_state.zoom_by(1.0 - mouse_scroll.delta.y * ZOOM_SPEED);
}

/// Keep the whole orbit visible at the current window size.
fn fit_orbit_to_window(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
    camera_state: Res<CameraState>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };

    let Projection::Orthographic(ortho) = &mut *projection else {
        return;
    };

    let scale = fit_scale(window.width(), window.height()) * camera_state.zoom;
    if (ortho.scale - scale).abs() > f32::EPSILON {
        ortho.scale = scale;
    }
}
