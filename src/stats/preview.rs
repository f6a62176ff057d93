//! Preview text derivation
//!
//! The preview pane shows the first 200 characters of the entered text.
//! Longer input is truncated on a character boundary and marked with an
//! ellipsis; empty input shows a placeholder instead.

use crate::string_utils::{char_index_to_byte_index, safe_slice_to};

/// Maximum number of characters shown in the preview pane.
pub const PREVIEW_MAX_CHARS: usize = 200;

/// Shown in the preview pane while no text has been entered.
pub const PREVIEW_PLACEHOLDER: &str = "Preview will appear here...";

/// Appended to previews of text longer than [`PREVIEW_MAX_CHARS`].
const PREVIEW_ELLIPSIS: &str = "...";

/// Derive the preview for the given text.
///
/// Empty input yields the placeholder. Whitespace-only input is not
/// empty and previews as itself. Input longer than 200 characters is cut
/// after the 200th character and suffixed with "...", so the result is
/// never longer than 203 characters. The cut never lands inside a
/// multi-byte character.
pub fn preview_text(text: &str) -> String {
    if text.is_empty() {
        return PREVIEW_PLACEHOLDER.to_string();
    }

    let cut = char_index_to_byte_index(text, PREVIEW_MAX_CHARS);
    if cut >= text.len() {
        return text.to_string();
    }

    let mut preview = String::with_capacity(cut + PREVIEW_ELLIPSIS.len());
    preview.push_str(safe_slice_to(text, cut));
    preview.push_str(PREVIEW_ELLIPSIS);
    preview
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_empty_shows_placeholder() {
        assert_eq!(preview_text(""), PREVIEW_PLACEHOLDER);
    }

    #[test]
    fn test_preview_whitespace_is_not_placeholder() {
        // Whitespace-only input is real content for the preview
        assert_eq!(preview_text("   "), "   ");
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview_text("Hello world."), "Hello world.");
    }

    #[test]
    fn test_preview_exactly_200_chars() {
        let text = "x".repeat(200);
        assert_eq!(preview_text(&text), text);
    }

    #[test]
    fn test_preview_201_chars_truncated() {
        let text = "x".repeat(201);
        let preview = preview_text(&text);
        assert_eq!(preview.chars().count(), 203);
        assert!(preview.ends_with("..."));
        assert!(preview.starts_with(&"x".repeat(200)));
    }

    #[test]
    fn test_preview_250_chars_truncated() {
        let text = "a".repeat(250);
        let expected = format!("{}...", "a".repeat(200));
        assert_eq!(preview_text(&text), expected);
    }

    #[test]
    fn test_preview_multibyte_truncation() {
        // '中' is 3 bytes per character; truncation must stay on boundaries
        let text = "中".repeat(250);
        let preview = preview_text(&text);
        assert_eq!(preview.chars().count(), 203);
        assert!(preview.ends_with("..."));
        assert!(preview.starts_with(&"中".repeat(200)));
    }

    #[test]
    fn test_preview_emoji_truncation() {
        let text = "🎉".repeat(201);
        let preview = preview_text(&text);
        assert_eq!(preview.chars().count(), 203);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_preview_newlines_preserved() {
        let text = "one\n\ntwo";
        assert_eq!(preview_text(text), text);
    }

    #[test]
    fn test_preview_never_exceeds_203_chars() {
        for text in [
            String::new(),
            "short".to_string(),
            " ".repeat(500),
            "word ".repeat(100),
            "你好".repeat(300),
        ] {
            let preview = preview_text(&text);
            assert!(
                preview.chars().count() <= 203,
                "too long for input of {} chars",
                text.chars().count()
            );
        }
    }
}
