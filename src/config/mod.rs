//! Settings and their persistence
//!
//! [`Settings`] is the serde model; `persistence` reads and writes it as
//! JSON under the platform config directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
