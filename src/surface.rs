//! Editor surface - the document, its per-character styling and the selection
//!
//! The surface is the only owner of the document text. Styling is changed
//! the way a rich-text control does it: select a range, then set the style
//! of the selection. Any change to text or styling raises a change
//! notification that the event loop drains with [`EditorSurface::take_change`].
//!
//! Offsets are byte offsets and always sit on `char` boundaries.

use std::ops::{Deref, DerefMut, Range};

use crate::line;
use crate::syntax::Style;

/// Selection as a start offset and a length in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub len: usize,
}

impl Selection {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Offset just past the selection
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Caret motions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    DocumentStart,
    DocumentEnd,
    PageUp(usize),
    PageDown(usize),
}

/// The editable document
#[derive(Debug)]
pub struct EditorSurface {
    /// Document text
    text: String,
    /// One style per byte of `text`
    styles: Vec<Style>,
    /// Fixed end of the selection
    anchor: usize,
    /// Moving end of the selection
    caret: usize,
    /// Display column kept across vertical movement
    goal_col: Option<usize>,
    /// Tab width used for column math
    tab_width: usize,
    /// Nesting depth of active [`Suspended`] guards
    suspended: usize,
    /// Set when text or styling changed while notifications were live
    pending_change: bool,
}

impl EditorSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self {
            text: String::new(),
            styles: Vec::new(),
            anchor: 0,
            caret: 0,
            goal_col: None,
            tab_width: 4,
            suspended: 0,
            pending_change: false,
        }
    }

    /// Set the tab width used for vertical movement
    pub fn set_tab_width(&mut self, tab_width: usize) {
        self.tab_width = tab_width.max(1);
    }

    /// Get the tab width
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Get the document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the document in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the document is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole document, resetting styling and the caret
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.styles = vec![Style::default(); self.text.len()];
        self.anchor = 0;
        self.caret = 0;
        self.goal_col = None;
        self.notify();
    }

    // ------------------------------------------------------------------
    // Change notification
    // ------------------------------------------------------------------

    fn notify(&mut self) {
        if self.suspended == 0 {
            self.pending_change = true;
        }
    }

    /// Consume the pending change notification, if any
    pub fn take_change(&mut self) -> bool {
        std::mem::take(&mut self.pending_change)
    }

    /// Check for a pending change without consuming it
    #[cfg(test)]
    pub fn has_pending_change(&self) -> bool {
        self.pending_change
    }

    /// Suspend change notifications until the returned guard is dropped
    pub fn suspend_notifications(&mut self) -> Suspended<'_> {
        self.suspended += 1;
        Suspended { surface: self }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Current selection
    pub fn selection(&self) -> Selection {
        let start = self.anchor.min(self.caret);
        let end = self.anchor.max(self.caret);
        Selection::new(start, end - start)
    }

    /// Caret offset (the moving end of the selection)
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Select `len` bytes starting at `start`; the caret ends up at the end
    ///
    /// Both ends are clamped to the document and snapped to char boundaries.
    pub fn select(&mut self, start: usize, len: usize) {
        let end = line::floor_char_boundary(&self.text, start.saturating_add(len));
        let start = line::floor_char_boundary(&self.text, start);
        self.anchor = start;
        self.caret = end;
        self.goal_col = None;
    }

    /// Select the whole document
    pub fn select_all(&mut self) {
        self.select(0, self.text.len());
    }

    /// Collapse the selection to a caret at `pos`
    #[cfg(test)]
    pub fn set_caret(&mut self, pos: usize) {
        self.select(pos, 0);
    }

    /// Style of the first selected character (or the one at the caret)
    #[cfg(test)]
    pub fn selection_style(&self) -> Style {
        self.style_at(self.selection().start).unwrap_or_default()
    }

    /// Apply `style` to every selected byte
    pub fn set_selection_style(&mut self, style: Style) {
        let range = self.selection().range();
        if range.is_empty() {
            return;
        }
        self.styles[range].fill(style);
        self.notify();
    }

    /// Style of the character starting at `pos`
    #[cfg(test)]
    pub fn style_at(&self, pos: usize) -> Option<Style> {
        self.styles.get(pos).copied()
    }

    /// Styles for every byte of the document
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Replace the selection with `s`, leaving the caret after it
    pub fn insert_str(&mut self, s: &str) {
        let range = self.selection().range();
        let start = range.start;
        self.styles
            .splice(range.clone(), std::iter::repeat(Style::default()).take(s.len()));
        self.text.replace_range(range, s);
        self.anchor = start + s.len();
        self.caret = self.anchor;
        self.goal_col = None;
        self.notify();
    }

    /// Delete the selection, or the character (or line break) before the caret
    ///
    /// Returns false if there was nothing to delete.
    pub fn delete_backward(&mut self) -> bool {
        let range = if self.selection().is_empty() {
            let caret = self.caret;
            let line = self.line_of(caret);
            if caret == self.line_start(line) && line > 0 {
                self.line_range(line - 1).end..caret
            } else {
                line::prev_char_boundary(&self.text, caret)..caret
            }
        } else {
            self.selection().range()
        };
        self.delete_range(range)
    }

    /// Delete the selection, or the character (or line break) at the caret
    pub fn delete_forward(&mut self) -> bool {
        let range = if self.selection().is_empty() {
            let caret = self.caret;
            let line = self.line_of(caret);
            if caret == self.line_range(line).end && line + 1 < self.line_count() {
                caret..self.line_start(line + 1)
            } else {
                caret..line::next_char_boundary(&self.text, caret)
            }
        } else {
            self.selection().range()
        };
        self.delete_range(range)
    }

    fn delete_range(&mut self, range: Range<usize>) -> bool {
        if range.is_empty() {
            return false;
        }
        self.select(range.start, range.len());
        self.insert_str("");
        true
    }

    // ------------------------------------------------------------------
    // Lines
    // ------------------------------------------------------------------

    /// Number of lines (an empty document has one)
    pub fn line_count(&self) -> usize {
        self.text.bytes().filter(|&b| b == b'\n').count() + 1
    }

    /// Line containing byte offset `pos`
    pub fn line_of(&self, pos: usize) -> usize {
        let pos = pos.min(self.text.len());
        self.text.as_bytes()[..pos]
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
    }

    /// Byte offset where `line` starts (document end for lines past the end)
    pub fn line_start(&self, line: usize) -> usize {
        if line == 0 {
            return 0;
        }
        self.text
            .match_indices('\n')
            .nth(line - 1)
            .map(|(i, _)| i + 1)
            .unwrap_or(self.text.len())
    }

    /// Content range of `line`, excluding its `\n` or `\r\n` terminator
    pub fn line_range(&self, line: usize) -> Range<usize> {
        let start = self.line_start(line);
        let rest = &self.text[start..];
        let mut end = rest.find('\n').map(|i| start + i).unwrap_or(self.text.len());
        if end > start && self.text.as_bytes()[end - 1] == b'\r' && end < self.text.len() {
            end -= 1;
        }
        start..end
    }

    /// Text of `line` without its terminator
    pub fn line_text(&self, line: usize) -> &str {
        &self.text[self.line_range(line)]
    }

    /// (line, byte offset within line) for `pos`
    pub fn position_of(&self, pos: usize) -> (usize, usize) {
        let line = self.line_of(pos);
        (line, pos.min(self.text.len()) - self.line_start(line))
    }

    // ------------------------------------------------------------------
    // Caret movement
    // ------------------------------------------------------------------

    /// Move the caret; with `extend` the anchor stays put
    pub fn move_caret(&mut self, motion: Motion, extend: bool) {
        let selection = self.selection();
        let target = match motion {
            Motion::Left if !extend && !selection.is_empty() => selection.start,
            Motion::Right if !extend && !selection.is_empty() => selection.end(),
            Motion::Left => self.left_of(self.caret),
            Motion::Right => self.right_of(self.caret),
            Motion::Up => return self.move_vertical(-1, extend),
            Motion::Down => return self.move_vertical(1, extend),
            Motion::PageUp(n) => return self.move_vertical(-(n.max(1) as isize), extend),
            Motion::PageDown(n) => return self.move_vertical(n.max(1) as isize, extend),
            Motion::LineStart => self.line_start(self.line_of(self.caret)),
            Motion::LineEnd => self.line_range(self.line_of(self.caret)).end,
            Motion::DocumentStart => 0,
            Motion::DocumentEnd => self.text.len(),
        };
        self.goal_col = None;
        self.place_caret(target, extend);
    }

    fn place_caret(&mut self, target: usize, extend: bool) {
        self.caret = target;
        if !extend {
            self.anchor = target;
        }
    }

    fn left_of(&self, pos: usize) -> usize {
        let line = self.line_of(pos);
        if pos == self.line_start(line) && line > 0 {
            self.line_range(line - 1).end
        } else {
            line::prev_char_boundary(&self.text, pos)
        }
    }

    fn right_of(&self, pos: usize) -> usize {
        let line = self.line_of(pos);
        if pos >= self.line_range(line).end && line + 1 < self.line_count() {
            self.line_start(line + 1)
        } else {
            line::next_char_boundary(&self.text, pos)
        }
    }

    fn move_vertical(&mut self, delta: isize, extend: bool) {
        let (line, offset) = self.position_of(self.caret);
        let goal = match self.goal_col {
            Some(col) => col,
            None => line::byte_to_col(self.line_text(line), offset, self.tab_width),
        };

        let last = self.line_count() - 1;
        let target_line = if delta < 0 {
            line.saturating_sub(delta.unsigned_abs())
        } else {
            (line + delta as usize).min(last)
        };

        let target = if target_line == line && delta < 0 {
            0
        } else if target_line == line && delta > 0 {
            self.line_range(line).end
        } else {
            let range = self.line_range(target_line);
            range.start + line::col_to_byte(&self.text[range], goal, self.tab_width)
        };

        self.place_caret(target, extend);
        self.goal_col = Some(goal);
    }
}

impl Default for EditorSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped suspension of change notifications
///
/// Mutations made through the guard do not raise a change. Notifications
/// resume when the guard is dropped, whichever way the scope is left.
pub struct Suspended<'a> {
    surface: &'a mut EditorSurface,
}

impl Deref for Suspended<'_> {
    type Target = EditorSurface;

    fn deref(&self) -> &EditorSurface {
        self.surface
    }
}

impl DerefMut for Suspended<'_> {
    fn deref_mut(&mut self) -> &mut EditorSurface {
        self.surface
    }
}

impl Drop for Suspended<'_> {
    fn drop(&mut self) {
        self.surface.suspended -= 1;
    }
}
