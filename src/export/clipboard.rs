//! System clipboard access
//!
//! Copying goes through arboard, which talks to whichever clipboard the
//! platform provides. Failures come back as [`ClipboardError`] so the UI
//! can report them instead of crashing.

use arboard::Clipboard;

/// Why a copy failed.
///
/// arboard's error type is not `Clone`, so the cause travels as a plain
/// message; the UI only ever displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The clipboard could not be opened at all
    Access(String),
    /// The clipboard rejected the new contents
    Write(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Access(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::Write(msg) => write!(f, "Could not write to the clipboard: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Put `text` on the system clipboard.
///
/// Opens a fresh clipboard handle per call.
pub fn copy_text_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Talking to the real clipboard needs a windowing session, which CI
    // does not have; only the error type is testable here.

    #[test]
    fn test_access_error_display() {
        let err = ClipboardError::Access("no display".to_string());
        assert_eq!(err.to_string(), "Clipboard unavailable: no display");
    }

    #[test]
    fn test_write_error_display() {
        let err = ClipboardError::Write("denied".to_string());
        assert_eq!(err.to_string(), "Could not write to the clipboard: denied");
    }
}
