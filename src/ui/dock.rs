//! Control dock at the bottom of the screen.
//!
//! The dock provides a single horizontal strip with:
//! - Play/Pause toggle
//! - Current date
//! - Speed slider (1 day/s, 1 week/s, 1 month/s, 1 year/s)
//! - Earth rotation switch
//! - Reset button
//! - Help button with shortcuts tooltip

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use crate::calendar;
use crate::time::SimulationClock;
use crate::types::SpeedLevel;

/// Resource for help tooltip visibility.
#[derive(Resource, Default)]
pub struct HelpTooltipState {
    pub visible: bool,
}

/// System that renders the dock.
pub fn dock_system(
    mut contexts: EguiContexts,
    mut clock: ResMut<SimulationClock>,
    mut help_state: ResMut<HelpTooltipState>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("dock")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -12.0))
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(20, 10))
                .stroke(egui::Stroke::new(1.0, colors::BORDER))
                .corner_radius(8),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 14.0;

                render_play_pause(ui, &mut clock);

                ui.separator();

                let date = clock.orbital_state().date;
                ui.label(
                    egui::RichText::new(calendar::format_short(date))
                        .monospace()
                        .size(14.0)
                        .color(colors::TEXT),
                );

                ui.separator();

                render_speed_slider(ui, &mut clock);

                ui.separator();

                render_rotation_switch(ui, &mut clock);

                ui.separator();

                render_reset_button(ui, &mut clock);
                render_help_button(ui, &mut help_state);
            });
        });

    if help_state.visible {
        render_help_overlay(ctx);
    }
}

/// Render the play/pause toggle button.
fn render_play_pause(ui: &mut egui::Ui, clock: &mut SimulationClock) {
    let (icon, color, tooltip) = if clock.is_paused() {
        (icons::PLAY, colors::PLAY_ICON, "Play (Space)")
    } else {
        (icons::PAUSE, colors::PAUSE_ICON, "Pause (Space)")
    };

    let button = egui::Button::new(egui::RichText::new(icon).size(22.0).color(color))
        .min_size(egui::vec2(40.0, 36.0));

    if ui.add(button).on_hover_text(tooltip).clicked() {
        clock.toggle_paused();
    }
}

/// Render the speed slider over the fixed speed levels.
fn render_speed_slider(ui: &mut egui::Ui, clock: &mut SimulationClock) {
    let mut index = clock.speed().index();
    let max_index = SpeedLevel::ALL.len() - 1;

    ui.label(egui::RichText::new(icons::SPEED).size(16.0).color(colors::MUTED));

    let response = ui
        .add(
            egui::Slider::new(&mut index, 0..=max_index)
                .show_value(false)
                .step_by(1.0),
        )
        .on_hover_text("Simulation speed (1-4)");

    if response.changed()
        && let Err(err) = clock.set_speed_index(index)
    {
        warn!("Speed slider: {err}");
    }

    ui.label(
        egui::RichText::new(clock.speed().label())
            .size(14.0)
            .color(colors::ACTIVE),
    );
}

/// Render the Earth rotation switch.
fn render_rotation_switch(ui: &mut egui::Ui, clock: &mut SimulationClock) {
    let mut enabled = clock.rotation_enabled();
    let text = format!("{} Rotation", icons::ROTATION);

    if ui
        .checkbox(&mut enabled, egui::RichText::new(text).size(14.0).color(colors::TEXT))
        .on_hover_text("Spin Earth once per simulated day (R)")
        .changed()
    {
        clock.set_rotation_enabled(enabled);
    }
}

/// Render the reset button.
fn render_reset_button(ui: &mut egui::Ui, clock: &mut SimulationClock) {
    let button = egui::Button::new(egui::RichText::new(icons::RESET).size(18.0))
        .min_size(egui::vec2(36.0, 32.0));

    if ui.add(button).on_hover_text("Back to the equinox (Backspace)").clicked() {
        clock.reset();
    }
}

/// Render the help button.
fn render_help_button(ui: &mut egui::Ui, help_state: &mut HelpTooltipState) {
    let button = egui::Button::new(egui::RichText::new(icons::HELP).size(18.0))
        .min_size(egui::vec2(32.0, 32.0));

    let response = ui.add(button);

    if response.hovered() || help_state.visible {
        help_state.visible = response.hovered();
    }

    if response.clicked() {
        help_state.visible = !help_state.visible;
    }
}

/// Render the help overlay showing keyboard shortcuts.
fn render_help_overlay(ctx: &egui::Context) {
    egui::Window::new("Keyboard Shortcuts")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -80.0))
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(16))
                .stroke(egui::Stroke::new(1.0, colors::BORDER)),
        )
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;

            let shortcuts = [
                ("Space", "Play/Pause"),
                ("1-4", "Set speed (day/week/month/year per second)"),
                ("R", "Toggle Earth rotation"),
                ("Backspace", "Back to the equinox"),
                ("+/-", "Zoom in/out"),
            ];

            egui::Grid::new("shortcuts_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .show(ui, |ui| {
                    for (key, action) in shortcuts {
                        ui.label(egui::RichText::new(key).strong().monospace().size(14.0));
                        ui.label(egui::RichText::new(action).size(14.0));
                        ui.end_row();
                    }
                });
        });
}
