//! Theme switching
//!
//! `ThemeManager` owns the active theme choice, hands out the matching
//! palette, and pushes new egui visuals when the choice changes or the
//! OS preference flips while following it.

use eframe::egui::{Context, Visuals};
use log::{debug, info};

use super::{dark, light, ThemeColors};
use crate::config::Theme;

/// Keeps the egui context in sync with the chosen theme.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    theme: Theme,
    /// Built visuals for one effective mode, keyed by its dark flag
    cache: Option<(bool, Visuals)>,
    /// Set when the context no longer reflects the chosen theme
    dirty: bool,
    /// Dark-mode flag last seen while following the OS preference
    seen_system_dark: Option<bool>,
}

impl ThemeManager {
    pub fn new(theme: Theme) -> Self {
        info!("Theme on startup: {:?}", theme);
        Self {
            theme,
            cache: None,
            dirty: true,
            seen_system_dark: None,
        }
    }

    /// Choose a theme. Takes effect on the next `apply`.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            info!("Theme switched to {:?}", theme);
            self.theme = theme;
            self.dirty = true;
        }
    }

    /// Step to the next theme: Light, Dark, System, and around again.
    pub fn cycle(&mut self) -> Theme {
        let next = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        };
        self.set_theme(next);
        next
    }

    /// Whether the effective mode is dark. `System` resolves against the
    /// visuals currently in effect.
    fn effective_dark(&self, ctx: &Context) -> bool {
        match self.theme {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => ctx.style().visuals.dark_mode,
        }
    }

    /// Push the chosen theme's visuals into the context.
    pub fn apply(&mut self, ctx: &Context) {
        let dark = self.effective_dark(ctx);
        if self.theme == Theme::System {
            self.seen_system_dark = Some(dark);
        }

        let visuals = match &self.cache {
            Some((cached_dark, visuals)) if *cached_dark == dark => visuals.clone(),
            _ => {
                let visuals = if dark {
                    dark::create_dark_visuals()
                } else {
                    light::create_light_visuals()
                };
                self.cache = Some((dark, visuals.clone()));
                visuals
            }
        };

        ctx.set_visuals(visuals);
        self.dirty = false;
        debug!("Applied {:?} theme (dark: {})", self.theme, dark);
    }

    /// Reapply only when something changed: the chosen theme, or the OS
    /// preference while in `System`. Returns whether visuals were pushed.
    pub fn apply_if_needed(&mut self, ctx: &Context) -> bool {
        if self.theme == Theme::System {
            let system_dark = ctx.style().visuals.dark_mode;
            if self.seen_system_dark != Some(system_dark) {
                debug!("OS color scheme flipped, reapplying");
                self.dirty = true;
            }
        }

        if self.dirty {
            self.apply(ctx);
            true
        } else {
            false
        }
    }

    /// Palette for the effective mode.
    pub fn colors(&self, ctx: &Context) -> ThemeColors {
        ThemeColors::from_theme(self.theme, &ctx.style().visuals)
    }

    /// Short name for the toolbar button.
    pub fn label(&self) -> &'static str {
        match self.theme {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    /// Icon for the toolbar button.
    pub fn icon(&self) -> &'static str {
        match self.theme {
            Theme::Light => "☀",
            Theme::Dark => "🌙",
            Theme::System => "💻",
        }
    }

    /// Tooltip text, naming the resolved mode when following the OS.
    pub fn tooltip(&self, ctx: &Context) -> String {
        match self.theme {
            Theme::Light => "Light theme".to_string(),
            Theme::Dark => "Dark theme".to_string(),
            Theme::System => {
                let mode = if ctx.style().visuals.dark_mode {
                    "dark"
                } else {
                    "light"
                };
                format!("System theme (currently {})", mode)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_dirty() {
        let manager = ThemeManager::new(Theme::Dark);
        assert_eq!(manager.theme, Theme::Dark);
        assert!(manager.dirty);
    }

    #[test]
    fn test_set_theme_marks_dirty() {
        let mut manager = ThemeManager::new(Theme::Light);
        manager.dirty = false;

        manager.set_theme(Theme::Dark);
        assert_eq!(manager.theme, Theme::Dark);
        assert!(manager.dirty);
    }

    #[test]
    fn test_set_same_theme_is_a_no_op() {
        let mut manager = ThemeManager::new(Theme::Light);
        manager.dirty = false;

        manager.set_theme(Theme::Light);
        assert!(!manager.dirty);
    }

    #[test]
    fn test_cycle_visits_all_modes() {
        let mut manager = ThemeManager::new(Theme::Light);

        assert_eq!(manager.cycle(), Theme::Dark);
        assert_eq!(manager.cycle(), Theme::System);
        assert_eq!(manager.cycle(), Theme::Light);
        assert_eq!(manager.cycle(), Theme::Dark);
    }

    #[test]
    fn test_labels_and_icons_track_theme() {
        let mut manager = ThemeManager::new(Theme::Light);
        assert_eq!(manager.label(), "Light");
        assert_eq!(manager.icon(), "☀");

        manager.set_theme(Theme::Dark);
        assert_eq!(manager.label(), "Dark");
        assert_eq!(manager.icon(), "🌙");

        manager.set_theme(Theme::System);
        assert_eq!(manager.label(), "System");
        assert_eq!(manager.icon(), "💻");
    }

    #[test]
    fn test_apply_if_needed_runs_once() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::Dark);

        assert!(manager.apply_if_needed(&ctx));
        assert!(!manager.apply_if_needed(&ctx));
    }

    #[test]
    fn test_apply_pushes_matching_visuals() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::Light);

        manager.apply(&ctx);
        assert!(!ctx.style().visuals.dark_mode);

        manager.set_theme(Theme::Dark);
        manager.apply(&ctx);
        assert!(ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_system_reacts_to_preference_flip() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::System);
        manager.apply_if_needed(&ctx);
        let was_dark = ctx.style().visuals.dark_mode;

        // Integration flips the scheme under us
        ctx.set_visuals(if was_dark {
            Visuals::light()
        } else {
            Visuals::dark()
        });

        assert!(manager.apply_if_needed(&ctx));
        assert_ne!(ctx.style().visuals.dark_mode, was_dark);
    }

    #[test]
    fn test_colors_match_effective_mode() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::Light);

        manager.apply(&ctx);
        assert_eq!(manager.colors(&ctx), ThemeColors::light());

        manager.set_theme(Theme::Dark);
        manager.apply(&ctx);
        assert_eq!(manager.colors(&ctx), ThemeColors::dark());
    }

    #[test]
    fn test_tooltip_names_resolved_system_mode() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::System);
        manager.apply(&ctx);

        let tip = manager.tooltip(&ctx);
        assert!(tip.starts_with("System theme"));
        assert!(tip.contains("dark") || tip.contains("light"));
    }
}
