//! Statistics counting engine
//!
//! This module computes word, character, sentence, and paragraph counts
//! for display in the statistics panel and the status bar.

use std::sync::OnceLock;

use regex::Regex;

use super::preview::preview_text;

/// Blank-line separator between paragraphs: a newline, optional
/// whitespace, then another newline. Compiled once and shared.
static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();

fn paragraph_break() -> &'static Regex {
    PARAGRAPH_BREAK
        .get_or_init(|| Regex::new(r"\n\s*\n").expect("blank line pattern should always compile"))
}

/// Sentence terminators. ASCII only; see `count_sentences`.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

// ─────────────────────────────────────────────────────────────────────────────
// TextStatistics
// ─────────────────────────────────────────────────────────────────────────────

/// Statistics for a piece of text.
///
/// Contains counts of words, characters (with and without spaces),
/// sentences, and paragraphs, plus a preview of the first 200 characters.
///
/// # Example
///
/// ```ignore
/// let stats = TextStatistics::from_text("First.\n\nSecond.");
/// assert_eq!(stats.words, 2);
/// assert_eq!(stats.paragraphs, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStatistics {
    /// Number of words (sequences of non-whitespace characters)
    pub words: usize,
    /// Number of characters including whitespace
    pub characters: usize,
    /// Number of characters excluding whitespace
    pub characters_no_spaces: usize,
    /// Number of sentences (segments ending in `.`, `!`, or `?`)
    pub sentences: usize,
    /// Number of paragraphs (non-empty text blocks separated by blank lines)
    pub paragraphs: usize,
    /// The first 200 characters of the text, or a placeholder when empty
    pub preview: String,
}

impl TextStatistics {
    /// Calculate statistics from the given text.
    ///
    /// Every counter is recomputed from scratch; there is no incremental
    /// path. Calling this twice on the same text yields equal results.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: count_words(text),
            characters: text.chars().count(),
            characters_no_spaces: count_characters_no_spaces(text),
            sentences: count_sentences(text),
            paragraphs: count_paragraphs(text),
            preview: preview_text(text),
        }
    }

    /// Format the statistics for display in the status bar.
    ///
    /// Returns a compact string like "150 words | 892 chars | 12 sentences"
    pub fn format_compact(&self) -> String {
        format!(
            "{} words | {} chars | {} sentences",
            self.words, self.characters, self.sentences
        )
    }

    /// Format the statistics as a multi-line report, one labeled line per
    /// counter, using the same label wording as the statistics panel.
    pub fn format_report(&self) -> String {
        format!(
            "Words: {}\nCharacters: {}\nCharacters (no spaces): {}\nSentences: {}\nParagraphs: {}",
            self.words, self.characters, self.characters_no_spaces, self.sentences, self.paragraphs
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Counting functions
// ─────────────────────────────────────────────────────────────────────────────

/// Count words: maximal runs of non-whitespace characters.
fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count characters that are not whitespace (no spaces, tabs, or newlines).
fn count_characters_no_spaces(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Count sentences by splitting on `.`, `!`, and `?`.
///
/// Segments that are empty or whitespace-only are not counted, so a run
/// of terminators ("Wow!!!") contributes a single sentence and a trailing
/// fragment without a terminator still counts as one.
fn count_sentences(text: &str) -> usize {
    text.split(SENTENCE_TERMINATORS)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Count paragraphs: non-empty text blocks separated by blank lines.
///
/// A blank line may itself contain whitespace. Whitespace-only text has
/// zero paragraphs; any other text has at least one, no matter how many
/// trailing blank lines follow it.
fn count_paragraphs(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    let blocks = paragraph_break()
        .split(text)
        .filter(|block| !block.trim().is_empty())
        .count();

    blocks.max(1)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
