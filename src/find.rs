//! Find bar - an embedded query field with find-next
//!
//! Matching is literal and case-insensitive. Each search starts just past
//! the current selection and wraps to the top of the document once.

use regex::RegexBuilder;

use crate::line;
use crate::surface::EditorSurface;

/// Result of a find-next request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    /// Match selected at (start, len)
    Found { start: usize, len: usize },
    /// The query occurs nowhere in the document
    NotFound,
    /// Nothing to search for
    EmptyQuery,
}

/// Locate `query` in `text`, searching from `from` and wrapping once
///
/// Returns the byte range of the match.
pub fn search(text: &str, query: &str, from: usize) -> Option<(usize, usize)> {
    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            tracing::warn!(error = %e, "find query could not be compiled");
            return None;
        }
    };

    let from = line::floor_char_boundary(text, from);
    let found = pattern.find_at(text, from).or_else(|| {
        if from > 0 {
            pattern.find(text)
        } else {
            None
        }
    });

    found.map(|m| (m.start(), m.end()))
}

/// Select the next occurrence of `query` after the current selection
pub fn find_next(surface: &mut EditorSurface, query: &str) -> FindOutcome {
    if query.is_empty() {
        return FindOutcome::EmptyQuery;
    }

    let from = surface.selection().end();
    match search(surface.text(), query, from) {
        Some((start, end)) => {
            surface.select(start, end - start);
            FindOutcome::Found {
                start,
                len: end - start,
            }
        }
        None => FindOutcome::NotFound,
    }
}

/// The find bar's own state: visibility and a one-line input field
#[derive(Debug, Clone, Default)]
pub struct FindWidget {
    /// Whether the bar is shown (and has keyboard focus)
    visible: bool,
    /// Query text
    query: String,
    /// Cursor within `query` (byte offset)
    cursor: usize,
}

impl FindWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the bar if hidden, hide it if shown
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cursor position within the query (byte offset)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, ch: char) {
        self.query.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        // The field is one line
        let s: String = s.chars().filter(|c| !c.is_control()).collect();
        self.query.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    pub fn delete_backward(&mut self) {
        if self.cursor > 0 {
            let prev = line::prev_char_boundary(&self.query, self.cursor);
            self.query.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.query.len() {
            let next = line::next_char_boundary(&self.query, self.cursor);
            self.query.replace_range(self.cursor..next, "");
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = line::prev_char_boundary(&self.query, self.cursor);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = line::next_char_boundary(&self.query, self.cursor);
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.query.len();
    }

    /// Run find-next with the current query
    pub fn find_next(&self, surface: &mut EditorSurface) -> FindOutcome {
        find_next(surface, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Selection;

    fn surface(text: &str) -> EditorSurface {
        let mut s = EditorSurface::new();
        s.set_text(text);
        s
    }

    #[test]
    fn test_find_next_cycles_and_wraps() {
        let mut s = surface("bar foo baz foo");

        assert_eq!(find_next(&mut s, "foo"), FindOutcome::Found { start: 4, len: 3 });
        assert_eq!(s.selection(), Selection::new(4, 3));

        assert_eq!(find_next(&mut s, "foo"), FindOutcome::Found { start: 12, len: 3 });
        assert_eq!(s.selection(), Selection::new(12, 3));

        assert_eq!(find_next(&mut s, "foo"), FindOutcome::Found { start: 4, len: 3 });
        assert_eq!(s.selection(), Selection::new(4, 3));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let mut s = surface("Hello WORLD");
        assert_eq!(find_next(&mut s, "world"), FindOutcome::Found { start: 6, len: 5 });
    }

    #[test]
    fn test_find_is_literal() {
        let mut s = surface("a.b axb (x)");
        assert_eq!(find_next(&mut s, "a.b"), FindOutcome::Found { start: 0, len: 3 });
        assert_eq!(find_next(&mut s, "(x)"), FindOutcome::Found { start: 8, len: 3 });
    }

    #[test]
    fn test_not_found_keeps_selection() {
        let mut s = surface("bar baz");
        s.select(1, 2);
        assert_eq!(find_next(&mut s, "foo"), FindOutcome::NotFound);
        assert_eq!(s.selection(), Selection::new(1, 2));
    }

    #[test]
    fn test_single_match_is_found_again_after_wrap() {
        let mut s = surface("only one match");
        assert_eq!(find_next(&mut s, "one"), FindOutcome::Found { start: 5, len: 3 });
        assert_eq!(find_next(&mut s, "one"), FindOutcome::Found { start: 5, len: 3 });
    }

    #[test]
    fn test_empty_query_is_ignored() {
        let mut s = surface("text");
        s.set_caret(2);
        assert_eq!(find_next(&mut s, ""), FindOutcome::EmptyQuery);
        assert_eq!(s.selection(), Selection::new(2, 0));
    }

    #[test]
    fn test_find_does_not_raise_change() {
        let mut s = surface("abc abc");
        s.take_change();
        find_next(&mut s, "abc");
        assert!(!s.has_pending_change());
    }

    #[test]
    fn test_widget_field_editing() {
        let mut widget = FindWidget::new();
        assert!(!widget.is_visible());
        widget.toggle();
        assert!(widget.is_visible());

        widget.insert_str("fo\no");
        assert_eq!(widget.query(), "foo");
        widget.cursor_left();
        widget.delete_backward();
        assert_eq!(widget.query(), "fo");
        assert_eq!(widget.cursor(), 1);
        widget.cursor_home();
        widget.delete_forward();
        widget.insert_char('é');
        assert_eq!(widget.query(), "éo");
        widget.cursor_end();
        assert_eq!(widget.cursor(), widget.query().len());

        widget.toggle();
        assert!(!widget.is_visible());
        assert_eq!(widget.query(), "éo");
    }
}
