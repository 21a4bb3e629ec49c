//! Re-highlight pass
//!
//! Runs on every text change. The whole document is reset to the default
//! style, every span from the language definition is painted in order
//! through the surface's selection API, and finally the user's selection is
//! put back.

use std::time::Instant;

use super::builtin;
use super::language::LanguageDefinition;
use super::style::Style;
use crate::surface::EditorSurface;

/// Applies a language definition to an editor surface
pub struct Highlighter {
    /// Rules used for every pass
    language: LanguageDefinition,
    /// Whether coloring is enabled
    pub enabled: bool,
}

impl Highlighter {
    /// Create a highlighter for the built-in C-family language
    pub fn new() -> Self {
        Self::with_language(builtin::csharp_language())
    }

    /// Create a highlighter for a specific language
    pub fn with_language(language: LanguageDefinition) -> Self {
        Self {
            language,
            enabled: true,
        }
    }

    /// Name of the active language
    pub fn language_name(&self) -> &str {
        &self.language.name
    }

    /// Toggle coloring on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Re-derive all styling for `surface` from its current text
    ///
    /// Change notifications are suspended for the duration of the pass, so
    /// the pass never schedules itself. The selection is preserved and left
    /// in the default style.
    pub fn rehighlight(&self, surface: &mut EditorSurface) {
        let started = Instant::now();
        let saved = surface.selection();
        let mut surface = surface.suspend_notifications();

        surface.select_all();
        surface.set_selection_style(Style::default());

        let mut painted = 0;
        if self.enabled {
            let spans = self.language.highlight(surface.text());
            painted = spans.len();
            for span in spans {
                surface.select(span.start, span.len());
                surface.set_selection_style(span.style());
            }
        }

        surface.select(saved.start, saved.len);
        surface.set_selection_style(Style::default());

        tracing::debug!(
            bytes = surface.len(),
            spans = painted,
            elapsed_us = started.elapsed().as_micros() as u64,
            "re-highlight pass"
        );
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
