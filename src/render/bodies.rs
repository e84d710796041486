//! Sun and Earth rendering and spawning.

use bevy::prelude::*;

use crate::render::{to_render, z_layers};
use crate::time::SimulationClock;

/// Marker for the Sun entity.
#[derive(Component)]
pub struct Sun;

/// Marker for the Earth entity; its transform follows the orbit model.
#[derive(Component)]
pub struct Earth;

/// Marker for the meridian stripe that makes Earth's spin visible.
#[derive(Component)]
pub struct Meridian;

/// Render radius of the Sun, in scene units.
pub const SUN_RADIUS: f32 = 30.0;

/// Render radius of Earth, in scene units.
pub const EARTH_RADIUS: f32 = 14.0;

/// Plugin providing body spawning.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies);
    }
}

/// Sun color.
pub fn sun_color() -> Color {
    Color::srgb(1.0, 0.85, 0.3)
}

/// Earth color.
pub fn earth_color() -> Color {
    Color::srgb(0.2, 0.5, 0.8)
}

/// Spawn the Sun at the origin and Earth at its current orbital position.
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    clock: Res<SimulationClock>,
) {
    // Corona behind the Sun
    commands.spawn((
        Mesh2d(meshes.add(Circle::new(SUN_RADIUS * 1.4))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::srgba(1.0, 0.7, 0.2, 0.25)))),
        Transform::from_xyz(0.0, 0.0, z_layers::SUN - 0.5),
    ));

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(SUN_RADIUS))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(sun_color()))),
        Transform::from_xyz(0.0, 0.0, z_layers::SUN),
        Sun,
    ));

    let state = clock.orbital_state();
    let meridian_mesh = meshes.add(Rectangle::new(EARTH_RADIUS * 0.25, EARTH_RADIUS));
    let meridian_material = materials.add(ColorMaterial::from_color(Color::srgb(0.3, 0.75, 0.35)));

    commands
        .spawn((
            Mesh2d(meshes.add(Circle::new(EARTH_RADIUS))),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(earth_color()))),
            Transform::from_translation(to_render(state.position, z_layers::EARTH)),
            Earth,
        ))
        .with_children(|parent| {
            // Stripe from the center to the rim; turns with the parent transform.
            parent.spawn((
                Mesh2d(meridian_mesh),
                MeshMaterial2d(meridian_material),
                Transform::from_xyz(0.0, EARTH_RADIUS * 0.5, z_layers::EARTH_DETAIL),
                Meridian,
            ));
        });

    info!("Spawned Sun and Earth");
}
