//! Modal panels layered over the main window.

mod about;
mod settings;

pub use about::show_about_panel;
pub use settings::show_settings_panel;
