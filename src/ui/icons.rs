//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Play icon (triangle pointing right)
pub const PLAY: &str = egui_phosphor::regular::PLAY;
/// Pause icon (two vertical bars)
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Reset/reload icon (circular arrow)
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Help/question icon
pub const HELP: &str = egui_phosphor::regular::QUESTION;
/// Speed/gauge icon
pub const SPEED: &str = egui_phosphor::regular::GAUGE;
/// Rotation icon
pub const ROTATION: &str = egui_phosphor::regular::ARROWS_CLOCKWISE;

/// Calendar icon
pub const CALENDAR: &str = egui_phosphor::regular::CALENDAR;
/// Sun icon
pub const SUN: &str = egui_phosphor::regular::SUN;
/// Planet/globe icon
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
/// Orbit/path icon
pub const ORBIT: &str = egui_phosphor::regular::PATH;
/// Ruler icon for distances
pub const DISTANCE: &str = egui_phosphor::regular::RULER;
/// Leaf icon for seasons
pub const SEASON: &str = egui_phosphor::regular::LEAF;
/// Info icon
pub const INFO: &str = egui_phosphor::regular::INFO;
