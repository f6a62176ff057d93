//! Text entry area for Tally
//!
//! [`EditorWidget`] wraps egui's `TextEdit` and owns the details the rest of
//! the app should not care about: monospace layout, the word wrap toggle,
//! hint text for an empty buffer, and putting the caret back at the top after
//! the buffer is replaced wholesale.

use eframe::egui::{self, FontId, ScrollArea, TextEdit, Ui};
use std::sync::Arc;

/// What happened to the buffer during one [`EditorWidget::show`] call.
pub struct EditorOutput {
    /// True if the user edited the text this frame.
    pub changed: bool,
}

/// Builder-style widget around the text buffer.
///
/// Construct one per frame, chain the configuration that applies, then call
/// [`show`](Self::show):
///
/// ```ignore
/// let output = EditorWidget::new(&mut state.buffer)
///     .font_size(settings.font_size)
///     .word_wrap(settings.word_wrap)
///     .show(ui);
/// ```
pub struct EditorWidget<'a> {
    content: &'a mut String,
    font_size: f32,
    word_wrap: bool,
    /// Placeholder shown while the buffer is empty.
    hint_text: Option<&'a str>,
    /// Stable ID so egui keeps caret and scroll state across frames.
    id: Option<egui::Id>,
    /// Reset the caret to the top of the buffer this frame.
    caret_to_start: bool,
}

impl<'a> EditorWidget<'a> {
    /// A widget editing `content` with default styling.
    pub fn new(content: &'a mut String) -> Self {
        Self {
            content,
            font_size: 14.0,
            word_wrap: true,
            hint_text: None,
            id: None,
            caret_to_start: false,
        }
    }

    /// Point size of the monospace editor font.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Fold long lines at the viewport edge instead of running past it.
    #[must_use]
    pub fn word_wrap(mut self, wrap: bool) -> Self {
        self.word_wrap = wrap;
        self
    }

    /// Placeholder text rendered while the buffer is empty.
    #[must_use]
    pub fn hint_text(mut self, hint: &'a str) -> Self {
        self.hint_text = Some(hint);
        self
    }

    /// Use `id` for egui widget state instead of a position-derived one.
    #[must_use]
    pub fn id(mut self, id: egui::Id) -> Self {
        self.id = Some(id);
        self
    }

    /// Park the caret at the start of the buffer and grab focus.
    ///
    /// Pass true on the frame after the buffer was swapped out from under
    /// the widget (sample text loaded, text cleared) so the view snaps back
    /// to the top.
    #[must_use]
    pub fn caret_to_start(mut self, caret_to_start: bool) -> Self {
        self.caret_to_start = caret_to_start;
        self
    }

    /// Render the editor into `ui`.
    pub fn show(self, ui: &mut Ui) -> EditorOutput {
        let id = self.id.unwrap_or_else(|| ui.id().with("editor"));

        let font_size = self.font_size;
        let word_wrap = self.word_wrap;
        let hint_text = self.hint_text;
        let caret_to_start = self.caret_to_start;

        // One layout path for both wrap modes: an infinite wrap width keeps
        // newline breaks but lets long lines run past the viewport.
        let mut layouter = move |ui: &Ui, text: &str, wrap_width: f32| -> Arc<egui::Galley> {
            let max_width = if word_wrap { wrap_width } else { f32::INFINITY };
            let job = egui::text::LayoutJob::simple(
                text.to_owned(),
                FontId::monospace(font_size),
                ui.visuals().text_color(),
                max_width,
            );
            ui.fonts(|f| f.layout_job(job))
        };

        // Rewrite the stored caret before the TextEdit reads it so the move
        // lands this frame. On the very first frame there is no stored state,
        // and the caret starts at the top anyway.
        if caret_to_start {
            if let Some(mut state) = TextEdit::load_state(ui.ctx(), id) {
                state.cursor.set_char_range(Some(egui::text::CCursorRange::one(
                    egui::text::CCursor::new(0),
                )));
                state.store(ui.ctx(), id);
            }
        }

        let scrolled = ScrollArea::vertical()
            .id_source(id.with("scroll"))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let mut text_edit = TextEdit::multiline(self.content)
                    .id(id)
                    .frame(false)
                    .font(FontId::monospace(font_size))
                    .desired_width(f32::INFINITY)
                    .layouter(&mut layouter);

                if let Some(hint) = hint_text {
                    text_edit = text_edit.hint_text(hint);
                }

                let text_output = text_edit.show(ui);

                if caret_to_start {
                    text_output.response.request_focus();
                }

                text_output
            });

        EditorOutput {
            changed: scrolled.inner.response.changed(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
