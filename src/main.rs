//! Earth Orbit - interactive animation of Earth's orbit and seasons.
//!
//! Runs as a desktop window or, on wasm32, inside the `#orbit-canvas`
//! element of the hosting page.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use earth_orbit::camera::CameraPlugin;
use earth_orbit::input::InputPlugin;
use earth_orbit::render::RenderPlugin;
use earth_orbit::time::{ClockPlugin, SimulationClock};
use earth_orbit::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Earth Orbit & Seasons".into(),
                        canvas: Some("#orbit-canvas".into()),
                        fit_canvas_to_parent: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "wgpu=error,naga=warn,earth_orbit=info".into(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.06)))
        .insert_resource(SimulationClock::default())
        .add_plugins((ClockPlugin, CameraPlugin, RenderPlugin, InputPlugin, UiPlugin))
        .run();
}
