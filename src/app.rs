//! The Tally application window
//!
//! `TallyApp` wires everything together for eframe: toolbar, editor,
//! statistics panel, status bar, the overlays on top of them, keyboard
//! shortcuts, and window geometry tracking.

use crate::config::{Settings, WindowSize};
use crate::editor::EditorWidget;
use crate::export::{copy_text_to_clipboard, generate_stats_report};
use crate::state::AppState;
use crate::theme::ThemeManager;
use crate::ui::{show_about_panel, show_settings_panel};
use eframe::egui;
use log::{debug, info, warn};

/// Bundled sample text for the Load Sample Text action.
const SAMPLE_TEXT: &str = "The art of writing is the art of discovering what you believe. \
    Writing is not just about putting words on paper; it's about finding your voice and sharing \
    your unique perspective with the world.\n\n\
    Every great writer started as a beginner. They faced the blank page with the same uncertainty \
    and excitement that you might feel right now. The key is to start writing, even if you think \
    your first attempts aren't perfect.\n\n\
    Remember, writing is rewriting. Your first draft is just the beginning of your journey. \
    With each revision, your ideas become clearer, your arguments stronger, and your voice more \
    authentic. Don't be afraid to experiment with different styles and approaches.";

/// Hint shown in the editor while the buffer is empty.
const EDITOR_HINT: &str = "Start typing or paste your text here...";

/// How long standard toasts stay visible, in seconds.
const TOAST_DURATION: f64 = 2.0;

/// What a keyboard shortcut asks for.
///
/// Shortcut matching happens inside the input closure where `self` is
/// borrowed; the action runs afterwards.
#[derive(Debug, Clone, Copy)]
enum KeyboardAction {
    /// Ctrl+L
    LoadSample,
    /// Ctrl+N
    ClearText,
    /// Ctrl+Shift+C
    CopyStats,
    /// Ctrl+Shift+T
    CycleTheme,
    /// Ctrl+Comma
    OpenSettings,
    /// F1
    OpenAbout,
    /// Escape, only while a dialog is up
    CloseTopmost,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application
// ─────────────────────────────────────────────────────────────────────────────

/// The main application.
pub struct TallyApp {
    state: AppState,
    theme_manager: ThemeManager,
    /// Window geometry as of the last frame that changed it
    seen_window_size: Option<egui::Vec2>,
    seen_window_pos: Option<egui::Pos2>,
    /// Toast timing is measured from here
    started: std::time::Instant,
}

impl TallyApp {
    /// Load state from the config file and bring up the saved theme.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::new();

        let mut theme_manager = ThemeManager::new(state.settings.theme);
        theme_manager.apply(&cc.egui_ctx);
        info!("UI ready with {:?} theme", state.settings.theme);

        Self {
            state,
            theme_manager,
            seen_window_size: None,
            seen_window_pos: None,
            started: std::time::Instant::now(),
        }
    }

    /// Seconds since launch.
    fn uptime(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Mirror the current window geometry into settings.
    ///
    /// Geometry is written back only when it moved or resized by more
    /// than a pixel, which keeps the debug log quiet. The settings are
    /// not marked dirty for this; geometry rides along with the
    /// unconditional save at shutdown.
    fn track_window_geometry(&mut self, ctx: &egui::Context) {
        let (outer_rect, maximized) = ctx.input(|i| {
            let viewport = i.viewport();
            (viewport.outer_rect, viewport.maximized.unwrap_or(false))
        });
        let rect = match outer_rect {
            Some(rect) => rect,
            None => return,
        };

        let size = rect.size();
        let pos = rect.min;
        let resized = match self.seen_window_size {
            Some(old) => (old - size).length() > 1.0,
            None => true,
        };
        let moved = match self.seen_window_pos {
            Some(old) => (old - pos).length() > 1.0,
            None => true,
        };
        if !resized && !moved {
            return;
        }

        self.seen_window_size = Some(size);
        self.seen_window_pos = Some(pos);
        self.state.settings.window_size = WindowSize {
            width: size.x,
            height: size.y,
            x: Some(pos.x),
            y: Some(pos.y),
            maximized,
        };
        debug!(
            "Window geometry now {}x{} at ({}, {}), maximized: {}",
            size.x, size.y, pos.x, pos.y, maximized
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the buffer with the bundled sample text.
    fn load_sample(&mut self) {
        let now = self.uptime();
        info!("Loading sample text");

        self.state.buffer = SAMPLE_TEXT.to_string();
        self.state.caret_to_start = true;
        self.state.refresh_stats();
        self.state.show_toast("Sample text loaded", now, TOAST_DURATION);
    }

    /// Put the statistics report on the system clipboard.
    fn copy_stats(&mut self) {
        let now = self.uptime();
        let report = generate_stats_report(&self.state.stats);

        match copy_text_to_clipboard(&report) {
            Ok(()) => {
                info!("Statistics copied to clipboard");
                self.state
                    .show_toast("Statistics copied to clipboard", now, TOAST_DURATION);
            }
            Err(e) => {
                warn!("Failed to copy statistics: {}", e);
                self.state
                    .show_error(format!("Failed to copy statistics:\n{}", e));
            }
        }
    }

    /// Step to the next theme and remember the choice.
    fn cycle_theme(&mut self, ctx: &egui::Context) {
        let theme = self.theme_manager.cycle();
        self.theme_manager.apply(ctx);
        self.state.settings.theme = theme;
        self.state.mark_settings_dirty();
        info!("Theme cycled to {:?}", theme);
    }

    /// Dismiss whichever dialog is on top. The about and settings panels
    /// watch Escape themselves.
    fn close_topmost(&mut self) {
        if self.state.ui.show_error_modal {
            self.state.dismiss_error();
        } else if self.state.ui.show_confirm_dialog {
            self.state.cancel_pending_action();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Keyboard Shortcuts
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let action = ctx.input(|i| self.match_shortcut(i));
        if let Some(action) = action {
            self.run_action(action, ctx);
        }
    }

    /// Map pressed keys to an action. Shifted combinations are checked
    /// first so Ctrl+Shift+C never reads as a plain Ctrl chord.
    fn match_shortcut(&self, i: &egui::InputState) -> Option<KeyboardAction> {
        let ctrl = i.modifiers.ctrl;
        let shift = i.modifiers.shift;

        if ctrl && shift && i.key_pressed(egui::Key::C) {
            return Some(KeyboardAction::CopyStats);
        }
        if ctrl && shift && i.key_pressed(egui::Key::T) {
            return Some(KeyboardAction::CycleTheme);
        }
        if ctrl && !shift && i.key_pressed(egui::Key::L) {
            return Some(KeyboardAction::LoadSample);
        }
        if ctrl && !shift && i.key_pressed(egui::Key::N) {
            return Some(KeyboardAction::ClearText);
        }
        if ctrl && i.key_pressed(egui::Key::Comma) {
            return Some(KeyboardAction::OpenSettings);
        }
        if i.key_pressed(egui::Key::F1) {
            return Some(KeyboardAction::OpenAbout);
        }

        let dialog_open = self.state.ui.show_error_modal || self.state.ui.show_confirm_dialog;
        if dialog_open && i.key_pressed(egui::Key::Escape) {
            return Some(KeyboardAction::CloseTopmost);
        }

        None
    }

    fn run_action(&mut self, action: KeyboardAction, ctx: &egui::Context) {
        debug!("Keyboard action: {:?}", action);
        match action {
            KeyboardAction::LoadSample => self.load_sample(),
            KeyboardAction::ClearText => self.state.request_clear(),
            KeyboardAction::CopyStats => self.copy_stats(),
            KeyboardAction::CycleTheme => self.cycle_theme(ctx),
            KeyboardAction::OpenSettings => self.state.toggle_settings(),
            KeyboardAction::OpenAbout => self.state.toggle_about(),
            KeyboardAction::CloseTopmost => self.close_topmost(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // UI Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Render the main UI content.
    fn render_ui(&mut self, ctx: &egui::Context) {
        self.render_toolbar(ctx);
        self.render_status_bar(ctx);
        self.render_stats_panel(ctx);
        self.render_editor(ctx);
        self.render_dialogs(ctx);
    }

    /// Top toolbar: the three text actions on the left, app chrome on the
    /// right.
    fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .button("Load Sample Text")
                    .on_hover_text("Replace the text with a writing sample (Ctrl+L)")
                    .clicked()
                {
                    self.load_sample();
                }

                if ui
                    .button("Clear Text")
                    .on_hover_text("Clear all text (Ctrl+N)")
                    .clicked()
                {
                    self.state.request_clear();
                }

                if ui
                    .button("Copy Statistics")
                    .on_hover_text("Copy the statistics report to the clipboard (Ctrl+Shift+C)")
                    .clicked()
                {
                    self.copy_stats();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("❓").on_hover_text("About / Help (F1)").clicked() {
                        self.state.toggle_about();
                    }

                    if ui.button("⚙").on_hover_text("Settings (Ctrl+,)").clicked() {
                        self.state.toggle_settings();
                    }

                    let theme_label = format!(
                        "{} {}",
                        self.theme_manager.icon(),
                        self.theme_manager.label()
                    );
                    let theme_tooltip =
                        format!("{} (Ctrl+Shift+T)", self.theme_manager.tooltip(ctx));
                    if ui
                        .button(theme_label)
                        .on_hover_text(theme_tooltip)
                        .clicked()
                    {
                        self.cycle_theme(ctx);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    /// Bottom status bar: the compact counts on the left, the active
    /// toast on the right.
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.state.stats.format_compact());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(toast) = &self.state.ui.toast_message {
                        ui.label(egui::RichText::new(toast).italics());
                    }
                });
            });
        });
    }

    /// Right side panel with live statistics and the preview.
    fn render_stats_panel(&mut self, ctx: &egui::Context) {
        let colors = self.theme_manager.colors(ctx);

        egui::SidePanel::right("stats_panel")
            .resizable(true)
            .default_width(280.0)
            .min_width(230.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("📊 Live Statistics:")
                        .strong()
                        .size(16.0)
                        .color(colors.stats.heading),
                );
                ui.add_space(8.0);

                let rows = [
                    ("Words:", self.state.stats.words),
                    ("Characters:", self.state.stats.characters),
                    (
                        "Characters (no spaces):",
                        self.state.stats.characters_no_spaces,
                    ),
                    ("Sentences:", self.state.stats.sentences),
                    ("Paragraphs:", self.state.stats.paragraphs),
                ];
                for (label, value) in rows {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(label).color(colors.text.secondary));
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(value.to_string())
                                        .strong()
                                        .color(colors.stats.value),
                                );
                            },
                        );
                    });
                }

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);

                ui.label(
                    egui::RichText::new("Preview (First 200 characters)")
                        .strong()
                        .color(colors.stats.heading),
                );
                ui.add_space(4.0);

                let preview_color = if self.state.buffer.is_empty() {
                    colors.stats.placeholder
                } else {
                    colors.text.primary
                };

                egui::Frame::none()
                    .fill(colors.stats.preview_bg)
                    .stroke(egui::Stroke::new(1.0, colors.stats.preview_border))
                    .rounding(4.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        egui::ScrollArea::vertical()
                            .id_source("preview_scroll")
                            .max_height(180.0)
                            .auto_shrink([false, true])
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(&self.state.stats.preview)
                                        .color(preview_color),
                                );
                            });
                    });
            });
    }

    /// Central editor panel.
    fn render_editor(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Enter Your Text").strong().size(16.0));
            ui.add_space(4.0);

            let font_size = self.state.settings.font_size;
            let word_wrap = self.state.settings.word_wrap;
            let caret_to_start = self.state.caret_to_start;
            self.state.caret_to_start = false;

            let output = EditorWidget::new(&mut self.state.buffer)
                .font_size(font_size)
                .word_wrap(word_wrap)
                .hint_text(EDITOR_HINT)
                .id(egui::Id::new("main_editor"))
                .caret_to_start(caret_to_start)
                .show(ui);

            // The user is typing again; stale toasts just distract
            if output.changed {
                self.state.clear_toast();
            }
        });
    }

    /// Dialogs and panels layered over the main UI.
    fn render_dialogs(&mut self, ctx: &egui::Context) {
        if self.state.ui.show_confirm_dialog {
            egui::Window::new("Clear Text")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(&self.state.ui.confirm_dialog_message);
                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Clear").clicked() {
                            let now = self.uptime();
                            self.state.handle_confirmed_action(now);
                        }

                        if ui.button("Cancel").clicked() {
                            self.state.cancel_pending_action();
                        }
                    });
                });
        }

        if self.state.ui.show_error_modal {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(egui::RichText::new("⚠").size(24.0));
                    ui.label(&self.state.ui.error_message);
                    ui.separator();
                    if ui.button("OK").clicked() {
                        self.state.dismiss_error();
                    }
                });
        }

        if self.state.ui.show_about {
            let is_dark = ctx.style().visuals.dark_mode;
            let output = show_about_panel(ctx, is_dark);

            if output.close_requested {
                self.state.ui.show_about = false;
            }
        }

        if self.state.ui.show_settings {
            let is_dark = ctx.style().visuals.dark_mode;
            let output = show_settings_panel(ctx, &mut self.state.settings, is_dark);

            if output.changed {
                self.theme_manager.set_theme(self.state.settings.theme);
                self.theme_manager.apply(ctx);
                self.state.mark_settings_dirty();
            }

            if output.reset_requested {
                self.state.settings = Settings::default();
                self.theme_manager.set_theme(self.state.settings.theme);
                self.theme_manager.apply(ctx);
                self.state.mark_settings_dirty();

                let now = self.uptime();
                self.state
                    .show_toast("Settings reset to defaults", now, TOAST_DURATION);
                info!("Settings reset to defaults");
            }

            if output.close_requested {
                self.state.ui.show_settings = false;
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe::App Implementation
// ─────────────────────────────────────────────────────────────────────────────

impl eframe::App for TallyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Covers explicit theme switches and OS scheme flips
        self.theme_manager.apply_if_needed(ctx);

        let now = self.uptime();
        self.state.update_toast(now);

        // Recompute statistics if the buffer changed last frame
        self.state.refresh_stats();

        self.track_window_geometry(ctx);
        self.render_ui(ctx);

        // Shortcuts run after rendering; open panels consume their own
        // keys first
        self.handle_keyboard_shortcuts(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        self.state.shutdown();
    }

    /// Periodic save hook, driven by `auto_save_interval`.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        debug!("Autosave tick");
        self.state.save_settings_if_dirty();
    }

    fn persist_egui_memory(&self) -> bool {
        true
    }

    fn auto_save_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(30)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
