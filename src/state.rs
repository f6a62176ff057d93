//! Application state
//!
//! [`AppState`] is the single owner of everything the frames read and
//! write: the text buffer, the statistics derived from it, which panels
//! and dialogs are up, and the settings along with whether they need
//! saving.

use crate::config::{load_config, save_config_silent, Settings};
use crate::stats::TextStatistics;
use log::{debug, info};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// ─────────────────────────────────────────────────────────────────────────────
// Pending Actions
// ─────────────────────────────────────────────────────────────────────────────

/// An action deferred until the user answers a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Clear the text buffer
    ClearText,
}

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// Which panels, dialogs, and transient messages are up right now.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub show_settings: bool,
    pub show_about: bool,
    pub show_confirm_dialog: bool,
    pub confirm_dialog_message: String,
    /// What to do if the confirmation dialog is accepted
    pub pending_action: Option<PendingAction>,
    pub show_error_modal: bool,
    pub error_message: String,
    /// Transient notice in the status bar
    pub toast_message: Option<String>,
    /// App time (seconds) at which the toast goes away
    pub toast_expires_at: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application State
// ─────────────────────────────────────────────────────────────────────────────

/// Central application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The text being analyzed
    pub buffer: String,
    /// Move the editor caret to the start on the next frame. Set after
    /// programmatic buffer changes, consumed by the render pass.
    pub caret_to_start: bool,
    /// Statistics computed from the buffer (including the preview)
    pub stats: TextStatistics,
    /// Hash of the buffer contents when `stats` was last computed
    last_stats_hash: u64,
    pub settings: Settings,
    pub ui: UiState,
    /// Settings changed since the last save
    settings_dirty: bool,
}

fn content_hash(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

impl AppState {
    /// State for a fresh launch, with settings loaded from disk.
    pub fn new() -> Self {
        let settings = load_config();
        debug!(
            "Loaded settings: theme={:?}, font_size={}, word_wrap={}",
            settings.theme, settings.font_size, settings.word_wrap
        );
        Self::with_settings(settings)
    }

    /// State with the given settings and an empty buffer.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            buffer: String::new(),
            caret_to_start: false,
            stats: TextStatistics::from_text(""),
            last_stats_hash: content_hash(""),
            settings,
            ui: UiState::default(),
            settings_dirty: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Statistics
    // ─────────────────────────────────────────────────────────────────────────

    /// Recompute statistics if the buffer changed since the last call.
    ///
    /// The buffer is hashed and the recount skipped when the hash matches,
    /// so unchanged frames cost one hash instead of a full pass.
    pub fn refresh_stats(&mut self) {
        let hash = content_hash(&self.buffer);
        if hash != self.last_stats_hash {
            self.stats = TextStatistics::from_text(&self.buffer);
            self.last_stats_hash = hash;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────────

    /// Flag the settings for saving at the next autosave.
    pub fn mark_settings_dirty(&mut self) {
        self.settings_dirty = true;
    }

    /// Save settings if they changed since the last save.
    ///
    /// Returns `true` if a save happened. A failed save keeps the dirty
    /// flag set so the next save interval retries.
    pub fn save_settings_if_dirty(&mut self) -> bool {
        if !self.settings_dirty {
            return false;
        }
        if save_config_silent(&self.settings) {
            self.settings_dirty = false;
            true
        } else {
            false
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Confirmation Dialog
    // ─────────────────────────────────────────────────────────────────────────

    /// Ask for confirmation before clearing the text buffer.
    ///
    /// A no-op when the buffer is already empty.
    pub fn request_clear(&mut self) {
        if self.buffer.is_empty() {
            debug!("Clear requested with an empty buffer, ignoring");
            return;
        }
        self.ui.show_confirm_dialog = true;
        self.ui.confirm_dialog_message = "Clear all text? This cannot be undone.".to_string();
        self.ui.pending_action = Some(PendingAction::ClearText);
    }

    /// Perform the pending action after the user confirmed it.
    pub fn handle_confirmed_action(&mut self, now: f64) {
        if let Some(action) = self.ui.pending_action.take() {
            match action {
                PendingAction::ClearText => {
                    info!("Clearing text buffer ({} chars)", self.stats.characters);
                    self.buffer.clear();
                    self.caret_to_start = true;
                    self.refresh_stats();
                    self.show_toast("Text cleared", now, 2.0);
                }
            }
        }
        self.ui.show_confirm_dialog = false;
        self.ui.confirm_dialog_message.clear();
    }

    /// Dismiss the confirmation dialog without performing the action.
    pub fn cancel_pending_action(&mut self) {
        self.ui.pending_action = None;
        self.ui.show_confirm_dialog = false;
        self.ui.confirm_dialog_message.clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Panels
    // ─────────────────────────────────────────────────────────────────────────

    /// Toggle the settings panel. Only one panel is open at a time.
    pub fn toggle_settings(&mut self) {
        self.ui.show_settings = !self.ui.show_settings;
        if self.ui.show_settings {
            self.ui.show_about = false;
        }
    }

    /// Toggle the about panel. Only one panel is open at a time.
    pub fn toggle_about(&mut self) {
        self.ui.show_about = !self.ui.show_about;
        if self.ui.show_about {
            self.ui.show_settings = false;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Error Modal
    // ─────────────────────────────────────────────────────────────────────────

    /// Show an error message in a modal dialog.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.ui.error_message = message.into();
        self.ui.show_error_modal = true;
    }

    /// Close the error modal and drop its message.
    pub fn dismiss_error(&mut self) {
        self.ui.show_error_modal = false;
        self.ui.error_message.clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────────────────────

    /// Show a transient message in the status bar.
    ///
    /// `now` is the current app time in seconds; the toast disappears
    /// `duration_secs` later.
    pub fn show_toast(&mut self, message: impl Into<String>, now: f64, duration_secs: f64) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_expires_at = Some(now + duration_secs);
    }

    /// Clear the toast once its expiry time has passed.
    pub fn update_toast(&mut self, now: f64) {
        match self.ui.toast_expires_at {
            Some(expires_at) if now >= expires_at => self.clear_toast(),
            _ => {}
        }
    }

    /// Clear the toast immediately.
    pub fn clear_toast(&mut self) {
        self.ui.toast_message = None;
        self.ui.toast_expires_at = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Shutdown
    // ─────────────────────────────────────────────────────────────────────────

    /// Final cleanup before the application exits.
    ///
    /// The buffer is deliberately ephemeral, so only settings are saved.
    /// The save is unconditional: window geometry lands in the settings
    /// without passing through the dirty flag.
    pub fn shutdown(&mut self) {
        info!("Shutting down");
        if save_config_silent(&self.settings) {
            self.settings_dirty = false;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
