//! Dark mode visuals

use eframe::egui::{self, Color32, Visuals};

use super::ThemeColors;

/// Build the dark theme's egui `Visuals`.
pub fn create_dark_visuals() -> Visuals {
    let mut visuals = super::styled_visuals(Visuals::dark(), &ThemeColors::dark());

    // Stronger shadows than the light theme
    visuals.window_shadow = egui::epaint::Shadow {
        offset: egui::vec2(0.0, 4.0),
        blur: 18.0,
        spread: 0.0,
        color: Color32::from_black_alpha(96),
    };
    visuals.popup_shadow = egui::epaint::Shadow {
        offset: egui::vec2(0.0, 2.0),
        blur: 12.0,
        spread: 0.0,
        color: Color32::from_black_alpha(72),
    };

    visuals.dark_mode = true;
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_mode_flag_set() {
        assert!(create_dark_visuals().dark_mode);
    }

    #[test]
    fn test_panel_fill_is_dark() {
        let visuals = create_dark_visuals();
        assert!(visuals.panel_fill.r() < 50);
        assert!(visuals.panel_fill.g() < 50);
        assert!(visuals.panel_fill.b() < 50);
    }

    #[test]
    fn test_panel_fill_matches_palette() {
        let visuals = create_dark_visuals();
        assert_eq!(visuals.panel_fill, ThemeColors::dark().base.background);
    }

    #[test]
    fn test_selection_distinct_from_background() {
        let visuals = create_dark_visuals();
        assert_ne!(visuals.selection.bg_fill, visuals.panel_fill);
    }

    #[test]
    fn test_text_is_light_on_dark() {
        let visuals = create_dark_visuals();
        assert!(visuals.widgets.noninteractive.fg_stroke.color.r() > 150);
    }

    #[test]
    fn test_shadows_heavier_than_light_theme() {
        let dark = create_dark_visuals();
        let light = super::super::light::create_light_visuals();
        assert!(dark.window_shadow.color.a() > light.window_shadow.color.a());
    }
}
