//! Info panel with readout cards for the current orbital state.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use crate::calendar;
use crate::orbit::{self, OrbitalState};
use crate::time::SimulationClock;

/// Resource tracking whether the panel is expanded.
#[derive(Resource)]
pub struct InfoPanelState {
    pub open: bool,
}

impl Default for InfoPanelState {
    fn default() -> Self {
        Self { open: true }
    }
}

/// System that renders the info panel.
pub fn info_panel_system(
    mut contexts: EguiContexts,
    clock: Res<SimulationClock>,
    mut panel_state: ResMut<InfoPanelState>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let state = clock.orbital_state();

    egui::Window::new("info_panel")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(12))
                .stroke(egui::Stroke::new(1.0, colors::BORDER))
                .corner_radius(8),
        )
        .show(ctx, |ui| {
            ui.set_width(240.0);

            ui.horizontal(|ui| {
                ui.heading("Earth & Sun");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if panel_state.open { "\u{25B2}" } else { "\u{25BC}" };
                    if ui.small_button(icon).on_hover_text("Show/hide details").clicked() {
                        panel_state.open = !panel_state.open;
                    }
                });
            });

            render_season_card(ui, &state);

            if !panel_state.open {
                return;
            }

            ui.add_space(6.0);
            render_readouts(ui, &state);

            ui.add_space(6.0);
            ui.add(
                egui::ProgressBar::new(state.year_progress() as f32)
                    .text(format!("Orbit {:.0}% complete", state.year_progress() * 100.0)),
            );

            ui.add_space(6.0);
            render_about(ui);
        });
}

/// Date and seasonal phase, the most prominent card.
fn render_season_card(ui: &mut egui::Ui, state: &OrbitalState) {
    let accent = if state.phase.is_turning_point() {
        colors::HIGHLIGHT
    } else {
        colors::ACTIVE
    };

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(format!("{} {}", icons::CALENDAR, calendar::format_long(state.date)))
                .size(14.0)
                .color(colors::TEXT),
        );
        ui.label(
            egui::RichText::new(format!("{} {}", icons::SEASON, state.phase))
                .size(20.0)
                .strong()
                .color(accent),
        );
        ui.label(
            egui::RichText::new(state.phase.description())
                .size(12.0)
                .color(colors::MUTED),
        );
    });
}

/// Readout rows: day of year, distance, rotation, orbits, eccentricity.
fn render_readouts(ui: &mut egui::Ui, state: &OrbitalState) {
    let rows = readout_rows(state);

    egui::Grid::new("orbit_readouts")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for (label, value) in rows {
                ui.label(egui::RichText::new(label).color(colors::MUTED));
                ui.label(egui::RichText::new(value).monospace().color(colors::TEXT));
                ui.end_row();
            }
        });
}

/// Label/value pairs shown in the readout grid.
pub(crate) fn readout_rows(state: &OrbitalState) -> Vec<(String, String)> {
    vec![
        (
            format!("{} Day of year", icons::ORBIT),
            format!("{:.1} / 365.25", state.day_of_year),
        ),
        (
            format!("{} Distance", icons::DISTANCE),
            format!("{:.3} AU", state.distance_au),
        ),
        (
            format!("{} Rotation", icons::PLANET),
            format!("{:.0}\u{00B0}", state.rotation_degrees),
        ),
        (
            format!("{} Orbits", icons::SUN),
            format!("{}", state.completed_orbits()),
        ),
        (
            format!("{} Eccentricity", icons::INFO),
            format!("{:.4}", orbit::eccentricity()),
        ),
    ]
}

/// Collapsible explanation of the model.
fn render_about(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("About the model")
        .default_open(false)
        .show(ui, |ui| {
            ui.label(
                "Earth moves around the Sun on an ellipse at constant angular \
                 speed, completing one orbit every 365.25 simulated days, and \
                 spins once per simulated day.",
            );
            ui.add_space(4.0);
            ui.label(format!(
                "Distance ranges from {:.2} AU to {:.2} AU.",
                orbit::perihelion_au(),
                orbit::aphelion_au()
            ));
        });

    egui::CollapsingHeader::new("Why are there seasons?")
        .default_open(false)
        .show(ui, |ui| {
            ui.label(
                "Seasons come from the tilt of Earth's axis, not from its \
                 distance to the Sun. The equinoxes and solstices mark the \
                 four turning points of the year.",
            );
        });

    egui::CollapsingHeader::new("Time scale")
        .default_open(false)
        .show(ui, |ui| {
            ui.label(format!(
                "Day zero is the vernal equinox of {}. Choose between one day, \
                 one week, one month or one year of simulated time per second.",
                calendar::format_short(calendar::START_DATE)
            ));
        });
}
