//! Display rendering

use unicode_width::UnicodeWidthStr;

use crate::editor::EditorState;
use crate::error::Result;
use crate::line;
use crate::syntax::{Color, Style, FOREGROUND};
use crate::terminal::Terminal;

/// Find bar and dialog colors
const PANEL: Style = Style {
    fg: FOREGROUND,
    bg: Color::from_u32(0x3C3C3C),
};

/// Width of the find bar, label included
const FIND_BAR_WIDTH: usize = 32;

const FIND_LABEL: &str = " Find: ";

/// Display state
pub struct Display {
    /// Whether a full redraw is needed
    needs_redraw: bool,
}

impl Display {
    pub fn new() -> Self {
        Self { needs_redraw: true }
    }

    /// Mark that a full redraw is needed
    pub fn force_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Render the editor display
    pub fn render(&mut self, terminal: &mut Terminal, editor: &EditorState) -> Result<()> {
        let (cols, rows) = (terminal.cols() as usize, terminal.rows());
        if rows == 0 || cols == 0 {
            return Ok(());
        }

        terminal.set_cursor_visible(false)?;
        if self.needs_redraw {
            terminal.set_style(Style::default())?;
            terminal.clear_screen()?;
        }

        self.render_text(terminal, editor)?;
        self.render_status_line(terminal, editor, rows - 1, cols)?;

        let mut cursor = self.caret_position(editor);
        if editor.find.is_visible() {
            cursor = Some(self.render_find_bar(terminal, editor, cols)?);
        }
        if let Some(text) = editor.dialog() {
            self.render_dialog(terminal, text, cols, rows)?;
            cursor = None;
        }

        terminal.reset_attributes()?;
        if let Some((row, col)) = cursor {
            terminal.move_cursor(row, col)?;
            terminal.set_cursor_visible(true)?;
        }
        terminal.flush()?;

        self.needs_redraw = false;
        Ok(())
    }

    /// Render the visible document lines
    fn render_text(&self, terminal: &mut Terminal, editor: &EditorState) -> Result<()> {
        let surface = &editor.surface;
        let window = &editor.window;
        let gutter = editor.gutter_width();
        let selection = surface.selection();

        for row in 0..window.height() {
            let line_idx = window.top_line() + row as usize;
            terminal.move_cursor(row, 0)?;

            if line_idx >= surface.line_count() {
                terminal.set_style(Style::default())?;
                if gutter > 0 {
                    terminal.write_str(&" ".repeat(gutter))?;
                }
                // Empty line indicator (like vim's ~)
                terminal.set_dim(true)?;
                terminal.write_str("~")?;
                terminal.set_dim(false)?;
                terminal.clear_to_eol()?;
                continue;
            }

            if gutter > 0 {
                terminal.set_style(Style::default())?;
                terminal.set_dim(true)?;
                terminal.write_str(&format!("{:>width$} ", line_idx + 1, width = gutter - 1))?;
                terminal.set_dim(false)?;
            }

            let range = surface.line_range(line_idx);
            let runs = styled_runs(
                &surface.text()[range.clone()],
                &surface.styles()[range.clone()],
                selection.range().start.saturating_sub(range.start)
                    ..selection.end().saturating_sub(range.start),
                surface.tab_width(),
                window.left_col(),
                window.width() as usize,
            );
            for run in &runs {
                terminal.set_style(run.style)?;
                terminal.set_reverse(run.selected)?;
                terminal.write_str(&run.text)?;
            }

            terminal.set_reverse(false)?;
            terminal.set_style(Style::default())?;
            terminal.clear_to_eol()?;
        }

        Ok(())
    }

    /// Render the status line: language, highlight state, caret position
    fn render_status_line(
        &self,
        terminal: &mut Terminal,
        editor: &EditorState,
        row: u16,
        cols: usize,
    ) -> Result<()> {
        terminal.move_cursor(row, 0)?;
        terminal.set_style(Style::default())?;
        terminal.set_reverse(true)?;

        let surface = &editor.surface;
        let (line_idx, offset) = surface.position_of(surface.caret());
        let col = line::byte_to_col(surface.line_text(line_idx), offset, surface.tab_width());
        let position = format!(
            " {} | highlight {} | Ln {}, Col {} ",
            editor.highlighter.language_name(),
            if editor.highlighter.enabled { "on" } else { "off" },
            line_idx + 1,
            col + 1
        );
        let left = format!(" minipad  {}", editor.message().unwrap_or(""));

        let left_width = cols.saturating_sub(position.width());
        let mut status = truncate_to_width(&left, left_width);
        status.push_str(&" ".repeat(left_width.saturating_sub(status.width())));
        status.push_str(&position);

        terminal.write_str(&truncate_to_width(&status, cols))?;
        terminal.set_reverse(false)?;
        Ok(())
    }

    /// Render the find bar in the top-right corner
    ///
    /// Returns the screen position of the field's cursor.
    fn render_find_bar(
        &self,
        terminal: &mut Terminal,
        editor: &EditorState,
        cols: usize,
    ) -> Result<(u16, u16)> {
        let width = FIND_BAR_WIDTH.min(cols);
        let left = cols - width;
        let field_width = width.saturating_sub(FIND_LABEL.width() + 1).max(1);

        // Scroll the field so its cursor stays visible
        let query = editor.find.query();
        let cursor_col = query[..editor.find.cursor()].width();
        let skip = (cursor_col + 1).saturating_sub(field_width);
        let visible = skip_width(query, skip);
        let mut field = truncate_to_width(visible, field_width);
        field.push_str(&" ".repeat(field_width.saturating_sub(field.width())));

        terminal.move_cursor(0, left as u16)?;
        terminal.set_style(PANEL)?;
        terminal.write_str(&truncate_to_width(&format!("{}{} ", FIND_LABEL, field), width))?;

        let col = (left + FIND_LABEL.width() + cursor_col - skip).min(cols - 1);
        Ok((0, col as u16))
    }

    /// Render a centered dialog box
    fn render_dialog(
        &self,
        terminal: &mut Terminal,
        text: &str,
        cols: usize,
        rows: u16,
    ) -> Result<()> {
        let mut lines: Vec<&str> = text.lines().collect();
        lines.push("");
        lines.push("[ press any key ]");

        let inner = lines
            .iter()
            .map(|l| l.width())
            .max()
            .unwrap_or(0)
            .min(cols.saturating_sub(4));
        let width = inner + 4;
        let max_body = (rows as usize).saturating_sub(2);
        if lines.len() > max_body {
            // Keep the dismiss hint on screen
            let hint = lines.split_off(lines.len() - 1);
            lines.truncate(max_body.saturating_sub(1));
            lines.extend(hint);
        }
        let height = lines.len() + 2;

        let top = (rows as usize).saturating_sub(height) / 2;
        let left = cols.saturating_sub(width) / 2;

        terminal.set_style(PANEL)?;
        terminal.move_cursor(top as u16, left as u16)?;
        terminal.write_str(&format!("┌{}┐", "─".repeat(width - 2)))?;
        for (i, line) in lines.iter().enumerate() {
            let mut body = truncate_to_width(line, inner);
            body.push_str(&" ".repeat(inner - body.width()));
            terminal.move_cursor((top + 1 + i) as u16, left as u16)?;
            terminal.write_str(&format!("│ {} │", body))?;
        }
        terminal.move_cursor((top + height - 1) as u16, left as u16)?;
        terminal.write_str(&format!("└{}┘", "─".repeat(width - 2)))?;
        Ok(())
    }

    /// Screen position of the caret, if it is inside the window
    fn caret_position(&self, editor: &EditorState) -> Option<(u16, u16)> {
        let surface = &editor.surface;
        let window = &editor.window;
        let (line_idx, offset) = surface.position_of(surface.caret());
        let row = window.line_to_row(line_idx)?;

        let col = line::byte_to_col(surface.line_text(line_idx), offset, surface.tab_width());
        let col = col.checked_sub(window.left_col())?;
        if col >= window.width() as usize {
            return None;
        }
        Some((row, (editor.gutter_width() + col) as u16))
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

/// A stretch of screen text drawn with one style
#[derive(Debug, Clone, PartialEq)]
struct Run {
    text: String,
    style: Style,
    selected: bool,
}

/// Split one line into runs of equal style and selection state
///
/// `styles` has one entry per byte of `text`; `selected` is a byte range
/// within the line. Tabs are expanded and only the columns from `left_col`
/// to `left_col + width` are kept.
fn styled_runs(
    text: &str,
    styles: &[Style],
    selected: std::ops::Range<usize>,
    tab_width: usize,
    left_col: usize,
    width: usize,
) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    let right_col = left_col + width;
    let mut col = 0;

    for (pos, ch) in text.char_indices() {
        if col >= right_col {
            break;
        }
        let ch_width = line::char_width(ch, col, tab_width);
        let end_col = col + ch_width;

        // Glyph as drawn; tabs and clipped wide chars become spaces
        let visible = end_col.min(right_col).saturating_sub(col.max(left_col));
        let glyph: String = if visible == 0 {
            String::new()
        } else if ch == '\t' || visible < ch_width || ch.is_control() {
            " ".repeat(visible)
        } else {
            ch.to_string()
        };
        col = end_col;
        if glyph.is_empty() {
            continue;
        }

        let style = styles.get(pos).copied().unwrap_or_default();
        let is_selected = selected.contains(&pos);
        match runs.last_mut() {
            Some(run) if run.style == style && run.selected == is_selected => {
                run.text.push_str(&glyph)
            }
            _ => runs.push(Run {
                text: glyph,
                style,
                selected: is_selected,
            }),
        }
    }

    runs
}

/// Truncate a string to fit within a display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}

/// Drop leading characters worth at least `cols` display columns
fn skip_width(s: &str, cols: usize) -> &str {
    let mut width = 0;
    for (pos, ch) in s.char_indices() {
        if width >= cols {
            return &s[pos..];
        }
        width += unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1);
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Category;

    fn plain(text: &str) -> Vec<Style> {
        vec![Style::default(); text.len()]
    }

    #[test]
    fn test_runs_split_on_style() {
        let text = "int x";
        let mut styles = plain(text);
        styles[..3].fill(Category::Type.style());

        let runs = styled_runs(text, &styles, 0..0, 4, 0, 80);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "int");
        assert_eq!(runs[0].style, Category::Type.style());
        assert_eq!(runs[1].text, " x");
        assert_eq!(runs[1].style, Style::default());
    }

    #[test]
    fn test_runs_mark_selection() {
        let text = "abcdef";
        let runs = styled_runs(text, &plain(text), 2..4, 4, 0, 80);
        let texts: Vec<_> = runs.iter().map(|r| (r.text.as_str(), r.selected)).collect();
        assert_eq!(texts, vec![("ab", false), ("cd", true), ("ef", false)]);
    }

    #[test]
    fn test_runs_expand_tabs_and_clip() {
        let text = "\tab";
        let runs = styled_runs(text, &plain(text), 0..0, 4, 0, 80);
        assert_eq!(runs[0].text, "    ab");

        let runs = styled_runs(text, &plain(text), 0..0, 4, 2, 3);
        assert_eq!(runs[0].text, "  a");
    }

    #[test]
    fn test_runs_clip_wide_chars() {
        let text = "日本";
        let runs = styled_runs(text, &plain(text), 0..0, 4, 1, 80);
        assert_eq!(runs[0].text, " 本");
    }

    #[test]
    fn test_truncate_and_skip_width() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(skip_width("hello", 2), "llo");
        assert_eq!(skip_width("hello", 0), "hello");
        assert_eq!(skip_width("hi", 5), "");
    }
}
