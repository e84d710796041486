//! On-canvas labels using egui for text rendering.
//!
//! Renders the season marker names and body names next to their positions.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::MainCamera;
use crate::render::bodies::{EARTH_RADIUS, Earth, SUN_RADIUS};
use crate::render::orbits::season_markers;

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    /// Offset from the anchor in screen pixels.
    pub offset: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            offset: 10.0,
        }
    }
}

/// Draw text with a drop shadow for readability.
fn shadowed_text(painter: &egui::Painter, pos: egui::Pos2, anchor: egui::Align2, text: &str) {
    let font = egui::FontId::proportional(13.0);
    painter.text(
        pos + egui::vec2(1.0, 1.0),
        anchor,
        text,
        font.clone(),
        egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
    );
    painter.text(
        pos,
        anchor,
        text,
        font,
        egui::Color32::from_rgba_unmultiplied(220, 220, 230, 230),
    );
}

/// Draw labels for the season markers, the Sun and Earth.
pub fn draw_body_labels(
    mut contexts: EguiContexts,
    earth: Query<&GlobalTransform, With<Earth>>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // Project a world position to screen, then nudge by a pixel offset.
    let to_screen = |world: Vec3| -> Option<egui::Pos2> {
        camera
            .world_to_viewport(camera_transform, world)
            .ok()
            .map(|p| egui::pos2(p.x, p.y))
    };

    let offset = settings.offset;

    egui::Area::new(egui::Id::new("orbit_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .interactable(false)
        .show(ctx, |ui| {
            let painter = ui.painter();

            for (phase, pos) in season_markers() {
                let world = pos.as_vec2();
                let Some(screen) = to_screen(world.extend(0.0)) else {
                    continue;
                };
                // Push the label away from the Sun so it sits outside the ellipse.
                let outward = world.normalize_or_zero();
                let anchor = egui::Align2([
                    if outward.x > 0.5 {
                        egui::Align::Min
                    } else if outward.x < -0.5 {
                        egui::Align::Max
                    } else {
                        egui::Align::Center
                    },
                    if outward.y > 0.5 {
                        egui::Align::Max
                    } else if outward.y < -0.5 {
                        egui::Align::Min
                    } else {
                        egui::Align::Center
                    },
                ]);
                let nudge = egui::vec2(outward.x * offset, -outward.y * offset);
                shadowed_text(painter, screen + nudge, anchor, phase.label());
            }

            if let Some(screen) = to_screen(Vec3::new(0.0, -SUN_RADIUS, 0.0)) {
                shadowed_text(
                    painter,
                    screen + egui::vec2(0.0, offset),
                    egui::Align2::CENTER_TOP,
                    "Sun",
                );
            }

            if let Ok(transform) = earth.single() {
                let below = transform.translation() - Vec3::new(0.0, EARTH_RADIUS, 0.0);
                if let Some(screen) = to_screen(below) {
                    shadowed_text(
                        painter,
                        screen + egui::vec2(0.0, offset * 0.5),
                        egui::Align2::CENTER_TOP,
                        "Earth",
                    );
                }
            }
        });
}
