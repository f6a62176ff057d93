//! Theming for Tally
//!
//! [`ThemeColors`] is the palette the stats panel and preview pull their
//! colors from; [`styled_visuals`] turns the same palette into egui
//! `Visuals` so widgets match. `dark` and `light` add what actually
//! differs between the two modes, and [`ThemeManager`] decides which one
//! is in effect.

pub mod dark;
pub mod light;
pub mod manager;

pub use manager::ThemeManager;

use eframe::egui::{self, Color32, Rounding, Stroke, Visuals};

use crate::config::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Palette
// ─────────────────────────────────────────────────────────────────────────────

/// Full color palette for one theme mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub base: BaseColors,
    pub text: TextColors,
    pub stats: StatsColors,
    pub ui: UiColors,
}

/// Backgrounds, borders, and interaction fills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseColors {
    pub background: Color32,
    /// Panels and toolbar, one step off the main background
    pub background_secondary: Color32,
    /// Inputs and inset areas, two steps off
    pub background_tertiary: Color32,
    pub border: Color32,
    pub border_subtle: Color32,
    pub hover: Color32,
    pub selected: Color32,
}

/// Body text colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextColors {
    pub primary: Color32,
    pub secondary: Color32,
}

/// Colors for the statistics panel and the preview pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsColors {
    /// Row labels and panel headings
    pub heading: Color32,
    /// The numbers themselves
    pub value: Color32,
    pub preview_bg: Color32,
    pub preview_border: Color32,
    /// Shown in the preview pane while there is no text
    pub placeholder: Color32,
}

/// Accent and feedback colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiColors {
    pub accent: Color32,
    pub accent_hover: Color32,
    pub warning: Color32,
    pub error: Color32,
}

impl ThemeColors {
    /// Resolve a theme setting to a palette.
    ///
    /// `System` follows the dark-mode flag of the visuals currently in
    /// effect.
    pub fn from_theme(theme: Theme, visuals: &Visuals) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
            Theme::System => {
                if visuals.dark_mode {
                    Self::dark()
                } else {
                    Self::light()
                }
            }
        }
    }

    pub fn light() -> Self {
        Self {
            base: BaseColors {
                background: Color32::from_rgb(252, 252, 252),
                background_secondary: Color32::from_rgb(246, 246, 248),
                background_tertiary: Color32::from_rgb(240, 240, 242),
                border: Color32::from_rgb(205, 205, 210),
                border_subtle: Color32::from_rgb(228, 228, 232),
                hover: Color32::from_rgb(238, 240, 245),
                selected: Color32::from_rgb(214, 232, 255),
            },
            text: TextColors {
                primary: Color32::from_rgb(25, 25, 28),
                secondary: Color32::from_rgb(90, 90, 96),
            },
            stats: StatsColors {
                heading: Color32::from_rgb(0, 102, 170),
                value: Color32::from_rgb(25, 25, 28),
                preview_bg: Color32::from_rgb(240, 240, 242),
                preview_border: Color32::from_rgb(205, 205, 210),
                placeholder: Color32::from_rgb(125, 125, 132),
            },
            ui: UiColors {
                accent: Color32::from_rgb(0, 116, 204),
                accent_hover: Color32::from_rgb(0, 96, 172),
                warning: Color32::from_rgb(180, 120, 0),
                error: Color32::from_rgb(200, 40, 50),
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            base: BaseColors {
                background: Color32::from_rgb(28, 28, 30),
                background_secondary: Color32::from_rgb(36, 36, 40),
                background_tertiary: Color32::from_rgb(44, 44, 48),
                border: Color32::from_rgb(64, 64, 70),
                border_subtle: Color32::from_rgb(52, 52, 56),
                hover: Color32::from_rgb(52, 54, 60),
                selected: Color32::from_rgb(38, 58, 84),
            },
            text: TextColors {
                primary: Color32::from_rgb(222, 222, 226),
                secondary: Color32::from_rgb(172, 172, 180),
            },
            stats: StatsColors {
                heading: Color32::from_rgb(106, 182, 255),
                value: Color32::from_rgb(222, 222, 226),
                preview_bg: Color32::from_rgb(36, 36, 40),
                preview_border: Color32::from_rgb(64, 64, 70),
                placeholder: Color32::from_rgb(135, 135, 142),
            },
            ui: UiColors {
                accent: Color32::from_rgb(106, 182, 255),
                accent_hover: Color32::from_rgb(140, 200, 255),
                warning: Color32::from_rgb(255, 200, 60),
                error: Color32::from_rgb(255, 105, 97),
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Spacing
// ─────────────────────────────────────────────────────────────────────────────

/// Rounding and padding steps shared by both themes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSpacing {
    pub sm: f32,
    pub md: f32,
}

impl Default for ThemeSpacing {
    fn default() -> Self {
        Self { sm: 4.0, md: 8.0 }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared visuals
// ─────────────────────────────────────────────────────────────────────────────

/// Apply everything palette-driven to a set of `Visuals`.
///
/// Both theme modes style widgets identically apart from the palette, so
/// the whole widget treatment lives here once. The per-mode files add
/// shadows and the dark-mode flag on top.
fn styled_visuals(mut visuals: Visuals, colors: &ThemeColors) -> Visuals {
    let spacing = ThemeSpacing::default();

    visuals.panel_fill = colors.base.background;
    visuals.window_fill = colors.base.background;
    visuals.extreme_bg_color = colors.base.background_tertiary;
    visuals.faint_bg_color = colors.base.background_secondary;
    visuals.code_bg_color = colors.stats.preview_bg;

    visuals.override_text_color = None;
    visuals.warn_fg_color = colors.ui.warning;
    visuals.error_fg_color = colors.ui.error;
    visuals.hyperlink_color = colors.ui.accent;

    visuals.selection.bg_fill = colors.base.selected;
    visuals.selection.stroke = Stroke::new(1.0, colors.ui.accent);

    let widgets = &mut visuals.widgets;

    widgets.noninteractive.bg_fill = colors.base.background_secondary;
    widgets.noninteractive.weak_bg_fill = colors.base.background_tertiary;
    widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.base.border_subtle);
    widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text.primary);

    widgets.inactive.bg_fill = colors.base.background_secondary;
    widgets.inactive.weak_bg_fill = colors.base.background_tertiary;
    widgets.inactive.bg_stroke = Stroke::new(1.0, colors.base.border);
    widgets.inactive.fg_stroke = Stroke::new(1.0, colors.text.secondary);

    widgets.hovered.bg_fill = colors.base.hover;
    widgets.hovered.weak_bg_fill = colors.base.hover;
    widgets.hovered.bg_stroke = Stroke::new(1.0, colors.ui.accent);
    widgets.hovered.fg_stroke = Stroke::new(1.5, colors.text.primary);

    widgets.active.bg_fill = colors.ui.accent;
    widgets.active.weak_bg_fill = colors.base.selected;
    widgets.active.bg_stroke = Stroke::new(1.0, colors.ui.accent_hover);
    widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);

    widgets.open.bg_fill = colors.base.selected;
    widgets.open.weak_bg_fill = colors.base.selected;
    widgets.open.bg_stroke = Stroke::new(1.0, colors.ui.accent);
    widgets.open.fg_stroke = Stroke::new(1.0, colors.text.primary);

    for state in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
        &mut widgets.open,
    ] {
        state.rounding = Rounding::same(spacing.sm);
    }

    visuals.window_rounding = Rounding::same(spacing.md);
    visuals.window_stroke = Stroke::new(1.0, colors.base.border);

    visuals.resize_corner_size = 12.0;
    visuals.button_frame = true;
    visuals.striped = true;
    visuals.slider_trailing_fill = true;
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);

    visuals
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_palette_is_light() {
        let colors = ThemeColors::light();
        assert!(colors.base.background.r() > 200);
        assert!(colors.text.primary.r() < 50);
    }

    #[test]
    fn test_dark_palette_is_dark() {
        let colors = ThemeColors::dark();
        assert!(colors.base.background.r() < 50);
        assert!(colors.text.primary.r() > 150);
    }

    #[test]
    fn test_from_theme_resolves_fixed_modes() {
        // Fixed modes ignore whatever visuals are in effect
        let light = ThemeColors::from_theme(Theme::Light, &Visuals::dark());
        assert_eq!(light, ThemeColors::light());

        let dark = ThemeColors::from_theme(Theme::Dark, &Visuals::light());
        assert_eq!(dark, ThemeColors::dark());
    }

    #[test]
    fn test_from_theme_system_follows_visuals() {
        let dark = ThemeColors::from_theme(Theme::System, &Visuals::dark());
        assert_eq!(dark, ThemeColors::dark());

        let light = ThemeColors::from_theme(Theme::System, &Visuals::light());
        assert_eq!(light, ThemeColors::light());
    }

    #[test]
    fn test_headings_stand_out_from_body_text() {
        for colors in [ThemeColors::light(), ThemeColors::dark()] {
            assert_ne!(colors.stats.heading, colors.text.primary);
            assert_ne!(colors.stats.placeholder, colors.text.primary);
        }
    }

    #[test]
    fn test_feedback_colors_read_as_expected() {
        for colors in [ThemeColors::light(), ThemeColors::dark()] {
            // Errors lean red, warnings lean yellow
            assert!(colors.ui.error.r() > colors.ui.error.b());
            assert!(colors.ui.warning.g() > colors.ui.warning.b());
        }
    }

    #[test]
    fn test_spacing_steps() {
        let spacing = ThemeSpacing::default();
        assert!(spacing.sm < spacing.md);
        assert_eq!(spacing.sm, 4.0);
        assert_eq!(spacing.md, 8.0);
    }

    #[test]
    fn test_styled_visuals_carries_palette_through() {
        let colors = ThemeColors::dark();
        let visuals = styled_visuals(Visuals::dark(), &colors);

        assert_eq!(visuals.panel_fill, colors.base.background);
        assert_eq!(visuals.selection.bg_fill, colors.base.selected);
        assert_eq!(visuals.hyperlink_color, colors.ui.accent);
        assert_eq!(
            visuals.widgets.noninteractive.fg_stroke.color,
            colors.text.primary
        );
    }

    #[test]
    fn test_styled_visuals_keeps_tables_striped() {
        let visuals = styled_visuals(Visuals::light(), &ThemeColors::light());
        assert!(visuals.striped);
    }
}
