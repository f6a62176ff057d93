//! Light mode visuals

use eframe::egui::{self, Color32, Visuals};

use super::ThemeColors;

/// Build the light theme's egui `Visuals`.
pub fn create_light_visuals() -> Visuals {
    let mut visuals = super::styled_visuals(Visuals::light(), &ThemeColors::light());

    // Softer shadows than the dark theme
    visuals.window_shadow = egui::epaint::Shadow {
        offset: egui::vec2(0.0, 3.0),
        blur: 14.0,
        spread: 0.0,
        color: Color32::from_black_alpha(44),
    };
    visuals.popup_shadow = egui::epaint::Shadow {
        offset: egui::vec2(0.0, 2.0),
        blur: 10.0,
        spread: 0.0,
        color: Color32::from_black_alpha(32),
    };

    visuals.dark_mode = false;
    visuals
}
