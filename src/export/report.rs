//! Statistics Report Generation
//!
//! This module builds the plain-text report placed on the system clipboard
//! by the copy-statistics action.

use crate::stats::TextStatistics;

/// Generate a plain-text statistics report.
///
/// The report starts with a "Text Statistics" header line followed by one
/// labeled line per counter, matching the statistics panel wording.
///
/// # Example output
///
/// ```text
/// Text Statistics
///
/// Words: 42
/// Characters: 256
/// Characters (no spaces): 214
/// Sentences: 4
/// Paragraphs: 2
/// ```
pub fn generate_stats_report(stats: &TextStatistics) -> String {
    format!("Text Statistics\n\n{}", stats.format_report())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_stats_report() {
        let stats = TextStatistics::from_text("Hello world.");
        let report = generate_stats_report(&stats);

        assert_eq!(
            report,
            "Text Statistics\n\nWords: 2\nCharacters: 12\nCharacters (no spaces): 11\nSentences: 1\nParagraphs: 1"
        );
    }

    #[test]
    fn test_generate_stats_report_empty_text() {
        let stats = TextStatistics::from_text("");
        let report = generate_stats_report(&stats);

        assert!(report.starts_with("Text Statistics\n\n"));
        assert!(report.contains("Words: 0"));
        assert!(report.contains("Paragraphs: 0"));
    }

    #[test]
    fn test_generate_stats_report_has_all_labels() {
        let stats = TextStatistics::from_text("One.\n\nTwo.");
        let report = generate_stats_report(&stats);

        for label in [
            "Words:",
            "Characters:",
            "Characters (no spaces):",
            "Sentences:",
            "Paragraphs:",
        ] {
            assert!(report.contains(label), "report missing label {}", label);
        }
    }
}
