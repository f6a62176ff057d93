//! Getting statistics out of Tally
//!
//! Today that means one thing: a plain-text report on the system
//! clipboard.

pub mod clipboard;
pub mod report;

pub use clipboard::copy_text_to_clipboard;
pub use report::generate_stats_report;
