//! About and help panel for Tally
//!
//! A modal over a dimmed backdrop with the version line, the keyboard
//! shortcut reference, the library stack, and license details.

use eframe::egui::{self, Color32, Margin, RichText};

/// What the about panel asked for this frame.
#[derive(Debug, Clone, Default)]
pub struct AboutPanelOutput {
    /// The user dismissed the panel.
    pub close_requested: bool,
}

/// Shortcut reference shown in the panel, as (keys, what it does) pairs.
const SHORTCUTS: &[(&str, &str)] = &[
    ("Ctrl+L", "Load sample text"),
    ("Ctrl+N", "Clear text"),
    ("Ctrl+Shift+C", "Copy statistics to clipboard"),
    ("Ctrl+Shift+T", "Cycle theme"),
    ("Ctrl+,", "Open settings"),
    ("F1", "About / Help"),
    ("Escape", "Close panel or dialog"),
];

/// Draw the about modal and report whether the user closed it.
///
/// `is_dark` picks the backdrop strength and the accent colors inside.
pub fn show_about_panel(ctx: &egui::Context, is_dark: bool) -> AboutPanelOutput {
    let mut output = AboutPanelOutput::default();

    // Dimmed backdrop, a click on it dismisses the panel
    let screen_rect = ctx.screen_rect();
    let backdrop_alpha = if is_dark { 180 } else { 120 };

    egui::Area::new(egui::Id::new("about_overlay"))
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

    egui::Window::new("❓ About / Help")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .min_width(380.0)
        .max_width(440.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            // Escape closes the panel from anywhere inside it
            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                output.close_requested = true;
            }

            egui::ScrollArea::vertical()
                .max_height(420.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(8.0);
                        ui.label(RichText::new("Tally").size(24.0).strong());
                        ui.label(
                            RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION"))).weak(),
                        );
                        ui.add_space(4.0);
                        ui.label("Live word, character, sentence, and paragraph counts as you type");
                        ui.add_space(8.0);
                    });

                    ui.separator();
                    ui.add_space(8.0);

                    ui.label(RichText::new("⌨ Keyboard Shortcuts").strong().size(16.0));
                    ui.add_space(8.0);
                    render_shortcuts(ui, is_dark);

                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(8.0);

                    ui.label(RichText::new("⚙ Built With").strong().size(16.0));
                    ui.add_space(8.0);
                    render_libraries(ui, is_dark);

                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(8.0);

                    ui.label(RichText::new("📜 License").strong().size(16.0));
                    ui.add_space(4.0);
                    ui.label("MIT License");
                    ui.label(RichText::new("© 2025 Tally Contributors").weak().small());
                    ui.add_space(8.0);
                });

            ui.separator();

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        output.close_requested = true;
                    }
                    ui.label(
                        RichText::new("Press F1 or Escape to close")
                            .small()
                            .weak(),
                    );
                });
            });
        });

    output
}

/// The shortcut table, key combinations rendered as small pills.
fn render_shortcuts(ui: &mut egui::Ui, is_dark: bool) {
    let key_bg = if is_dark {
        Color32::from_rgb(60, 60, 70)
    } else {
        Color32::from_rgb(230, 230, 235)
    };
    let key_color = if is_dark {
        Color32::from_rgb(255, 200, 100)
    } else {
        Color32::from_rgb(150, 80, 0)
    };

    egui::Grid::new("shortcuts_grid")
        .num_columns(2)
        .spacing([20.0, 6.0])
        .show(ui, |ui| {
            for (keys, action) in SHORTCUTS {
                egui::Frame::none()
                    .fill(key_bg)
                    .rounding(3.0)
                    .inner_margin(Margin::symmetric(6.0, 2.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(*keys)
                                .monospace()
                                .size(12.0)
                                .color(key_color),
                        );
                    });
                ui.label(*action);
                ui.end_row();
            }
        });
}

/// The library credits table.
fn render_libraries(ui: &mut egui::Ui, is_dark: bool) {
    let lib_color = if is_dark {
        Color32::from_rgb(130, 180, 255)
    } else {
        Color32::from_rgb(0, 102, 204)
    };

    let libraries = [
        ("egui / eframe", "Immediate mode GUI framework"),
        ("serde", "Settings serialization"),
        ("arboard", "Clipboard integration"),
        ("regex", "Paragraph boundary detection"),
    ];

    egui::Grid::new("libraries_grid")
        .num_columns(2)
        .spacing([20.0, 4.0])
        .show(ui, |ui| {
            for (name, description) in libraries {
                ui.label(RichText::new(name).monospace().color(lib_color));
                ui.label(description);
                ui.end_row();
            }
        });
}
