//! Counting and previewing the entered text
//!
//! `engine` derives the numbers shown in the statistics panel; `preview`
//! derives the truncated text shown beneath them.

mod engine;
mod preview;

pub use engine::TextStatistics;
pub use preview::{preview_text, PREVIEW_MAX_CHARS, PREVIEW_PLACEHOLDER};
