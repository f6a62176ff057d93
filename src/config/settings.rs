//! User preferences for Tally
//!
//! Everything the user can configure lives in [`Settings`], which round-trips
//! through JSON. The text being counted is never part of this; only
//! preferences persist across sessions.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Color theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Track the operating system preference
    #[default]
    System,
}

// ─────────────────────────────────────────────────────────────────────────────
// Window geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Last known window size, position, and maximized state.
///
/// Position is optional so a fresh install lets the window manager place
/// the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// All persisted user preferences.
///
/// `#[serde(default)]` keeps old config files loadable when fields are
/// added; anything missing falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Light, dark, or follow the OS
    pub theme: Theme,

    /// Editor font size in points
    pub font_size: f32,

    /// Soft-wrap long lines in the editor
    pub word_wrap: bool,

    /// Window geometry from the previous session
    pub window_size: WindowSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_size: 14.0,
            word_wrap: true,
            window_size: WindowSize::default(),
        }
    }
}

impl Settings {
    /// Smallest usable editor font.
    pub const MIN_FONT_SIZE: f32 = 8.0;
    /// Largest editor font the slider offers.
    pub const MAX_FONT_SIZE: f32 = 32.0;
    /// Narrowest window that still fits the stats panel.
    pub const MIN_WINDOW_WIDTH: f32 = 700.0;
    /// Shortest window that still fits the editor and status bar.
    pub const MIN_WINDOW_HEIGHT: f32 = 500.0;
    /// Upper bound on either window dimension.
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;

    /// Force every field into its valid range.
    ///
    /// Config files are plain JSON and people edit them by hand; whatever
    /// comes in, the app must start with workable values.
    pub fn sanitize(&mut self) {
        let defaults = Self::default();

        // clamp() lets NaN through, so reset non-finite values first.
        // Infinities would clamp fine but get the same treatment.
        if !self.font_size.is_finite() {
            self.font_size = defaults.font_size;
        }
        if !self.window_size.width.is_finite() {
            self.window_size.width = defaults.window_size.width;
        }
        if !self.window_size.height.is_finite() {
            self.window_size.height = defaults.window_size.height;
        }

        self.font_size = self
            .font_size
            .clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);
        self.window_size.width = self
            .window_size
            .width
            .clamp(Self::MIN_WINDOW_WIDTH, Self::MAX_WINDOW_SIZE);
        self.window_size.height = self
            .window_size
            .height
            .clamp(Self::MIN_WINDOW_HEIGHT, Self::MAX_WINDOW_SIZE);
    }

    /// Parse settings from JSON and immediately sanitize them.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
