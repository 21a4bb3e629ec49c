//! Window representation - the viewport onto the document

/// The visible part of the document
///
/// Lines are not wrapped, so the view scrolls both ways.
#[derive(Debug, Clone)]
pub struct Window {
    /// First visible line
    top_line: usize,
    /// First visible display column
    left_col: usize,
    /// Number of text rows
    height: u16,
    /// Number of text columns (excluding any line-number gutter)
    width: u16,
}

impl Window {
    /// Create a window of the given text area size
    pub fn new(height: u16, width: u16) -> Self {
        Self {
            top_line: 0,
            left_col: 0,
            height,
            width,
        }
    }

    /// Get the top visible line
    pub fn top_line(&self) -> usize {
        self.top_line
    }

    /// Get the leftmost visible column
    pub fn left_col(&self) -> usize {
        self.left_col
    }

    /// Get window height in rows
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get window width in columns
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Resize the text area
    pub fn set_size(&mut self, height: u16, width: u16) {
        self.height = height;
        self.width = width;
    }

    /// Lines moved by PageUp/PageDown
    pub fn page_lines(&self) -> usize {
        (self.height as usize).saturating_sub(1).max(1)
    }

    /// Scroll back to the top-left corner
    pub fn scroll_to_top(&mut self) {
        self.top_line = 0;
        self.left_col = 0;
    }

    /// Check if a line is visible in the window
    pub fn is_line_visible(&self, line: usize) -> bool {
        line >= self.top_line && line < self.top_line + self.height as usize
    }

    /// Get the screen row offset for a document line (None if not visible)
    pub fn line_to_row(&self, line: usize) -> Option<u16> {
        if self.is_line_visible(line) {
            Some((line - self.top_line) as u16)
        } else {
            None
        }
    }

    /// Scroll so that (`line`, `col`) is on screen
    ///
    /// Keeps `margin` lines of context above and below when the window is
    /// tall enough for it.
    pub fn ensure_visible(&mut self, line: usize, col: usize, margin: usize) {
        let height = self.height as usize;
        if height > 0 {
            let margin = margin.min(height.saturating_sub(1) / 2);
            if line < self.top_line + margin {
                self.top_line = line.saturating_sub(margin);
            } else if line + margin >= self.top_line + height {
                self.top_line = line + margin + 1 - height;
            }
        }

        let width = self.width as usize;
        if width > 0 {
            if col < self.left_col {
                self.left_col = col;
            } else if col >= self.left_col + width {
                self.left_col = col + 1 - width;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolls_down_with_margin() {
        let mut w = Window::new(10, 40);
        w.ensure_visible(5, 0, 2);
        assert_eq!(w.top_line(), 0);

        w.ensure_visible(8, 0, 2);
        assert_eq!(w.top_line(), 1);
        assert!(w.is_line_visible(10));

        w.ensure_visible(30, 0, 2);
        assert_eq!(w.top_line(), 23);
        assert_eq!(w.line_to_row(30), Some(7));
    }

    #[test]
    fn test_scrolls_up_with_margin() {
        let mut w = Window::new(10, 40);
        w.ensure_visible(30, 0, 2);
        w.ensure_visible(22, 0, 2);
        assert_eq!(w.top_line(), 20);
        w.ensure_visible(1, 0, 2);
        assert_eq!(w.top_line(), 0);
    }

    #[test]
    fn test_margin_is_limited_by_height() {
        let mut w = Window::new(3, 40);
        w.ensure_visible(10, 0, 10);
        assert_eq!(w.top_line(), 9);
        assert_eq!(w.line_to_row(10), Some(1));
    }

    #[test]
    fn test_horizontal_scroll() {
        let mut w = Window::new(10, 20);
        w.ensure_visible(0, 25, 0);
        assert_eq!(w.left_col(), 6);
        w.ensure_visible(0, 3, 0);
        assert_eq!(w.left_col(), 3);

        w.scroll_to_top();
        assert_eq!((w.top_line(), w.left_col()), (0, 0));
    }

    #[test]
    fn test_page_lines() {
        assert_eq!(Window::new(24, 80).page_lines(), 23);
        assert_eq!(Window::new(1, 80).page_lines(), 1);
    }
}
