//! The text entry widget backing the main panel.

mod widget;

pub use widget::EditorWidget;
