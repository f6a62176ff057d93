//! Settings panel for Tally
//!
//! A modal window over a dimmed backdrop where the user picks theme, font
//! size, and word wrap. Edits land directly in the passed-in [`Settings`] so
//! the window behind previews every change immediately.

use crate::config::{Settings, Theme};
use eframe::egui::{self, Color32, RichText};

/// What the settings panel asked for this frame.
#[derive(Debug, Clone, Default)]
pub struct SettingsPanelOutput {
    /// At least one setting was edited.
    pub changed: bool,
    /// The user dismissed the panel.
    pub close_requested: bool,
    /// The user hit the reset-to-defaults button.
    pub reset_requested: bool,
}

/// Draw the settings modal and report what the user did.
///
/// `settings` is edited in place for live preview; the caller decides when
/// to persist. `is_dark` picks the backdrop strength.
pub fn show_settings_panel(
    ctx: &egui::Context,
    settings: &mut Settings,
    is_dark: bool,
) -> SettingsPanelOutput {
    let mut output = SettingsPanelOutput::default();

    // Dimmed backdrop, a click on it dismisses the panel
    let screen_rect = ctx.screen_rect();
    let backdrop_alpha = if is_dark { 180 } else { 120 };

    egui::Area::new(egui::Id::new("settings_overlay"))
        .order(egui::Order::Middle)
        .fixed_pos(screen_rect.min)
        .show(ctx, |ui| {
            let response = ui.allocate_response(screen_rect.size(), egui::Sense::click());
            ui.painter().rect_filled(
                screen_rect,
                0.0,
                Color32::from_rgba_unmultiplied(0, 0, 0, backdrop_alpha),
            );

            if response.clicked() {
                output.close_requested = true;
            }
        });

    egui::Window::new("⚙ Settings")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .min_width(360.0)
        .max_width(440.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            // Escape closes the panel from anywhere inside it
            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                output.close_requested = true;
            }

            ui.heading("Appearance");
            ui.add_space(8.0);

            ui.label(RichText::new("Theme").strong());
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                for theme in [Theme::Light, Theme::Dark, Theme::System] {
                    let label = match theme {
                        Theme::Light => "☀ Light",
                        Theme::Dark => "🌙 Dark",
                        Theme::System => "💻 System",
                    };
                    if ui
                        .selectable_value(&mut settings.theme, theme, label)
                        .changed()
                    {
                        output.changed = true;
                    }
                }
            });

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Font Size").strong());
                ui.add_space(8.0);
                ui.label(format!("{}px", settings.font_size as u32));
            });
            ui.add_space(4.0);

            let font_slider = ui.add(
                egui::Slider::new(
                    &mut settings.font_size,
                    Settings::MIN_FONT_SIZE..=Settings::MAX_FONT_SIZE,
                )
                .show_value(false)
                .step_by(1.0),
            );
            if font_slider.changed() {
                output.changed = true;
            }

            // One-click presets under the slider
            ui.horizontal(|ui| {
                for (label, size) in [("Small", 12.0), ("Medium", 14.0), ("Large", 18.0)] {
                    if ui.small_button(label).clicked() {
                        settings.font_size = size;
                        output.changed = true;
                    }
                }
            });

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.heading("Editor");
            ui.add_space(8.0);

            if ui
                .checkbox(&mut settings.word_wrap, "Word Wrap")
                .on_hover_text("Wrap long lines instead of horizontal scrolling")
                .changed()
            {
                output.changed = true;
            }

            ui.add_space(16.0);
            ui.separator();

            // Reset on the left, close on the right
            ui.horizontal(|ui| {
                if ui
                    .button("↺ Reset All")
                    .on_hover_text("Reset all settings to defaults")
                    .clicked()
                {
                    output.reset_requested = true;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        output.close_requested = true;
                    }
                    ui.label(
                        RichText::new("Settings are saved automatically")
                            .small()
                            .weak(),
                    );
                });
            });
        });

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_frame_requests_nothing() {
        let output = SettingsPanelOutput::default();
        assert!(!output.changed);
        assert!(!output.close_requested);
        assert!(!output.reset_requested);
    }
}
