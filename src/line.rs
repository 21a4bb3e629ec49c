//! Line geometry helpers
//!
//! Byte offsets are the currency of the editor; these helpers convert
//! between byte offsets and display columns, expanding tabs and honoring
//! wide characters.

use unicode_width::UnicodeWidthChar;

/// Display width of a single character at display column `col`
pub fn char_width(ch: char, col: usize, tab_width: usize) -> usize {
    match ch {
        '\t' => tab_width - (col % tab_width),
        _ => UnicodeWidthChar::width(ch).unwrap_or(0),
    }
}

/// Display width of a line
pub fn display_width(text: &str, tab_width: usize) -> usize {
    text.chars()
        .fold(0, |col, ch| col + char_width(ch, col, tab_width))
}

/// Get column (display position) for a given byte position
pub fn byte_to_col(text: &str, byte_pos: usize, tab_width: usize) -> usize {
    let end = floor_char_boundary(text, byte_pos);
    display_width(&text[..end], tab_width)
}

/// Get byte position for a display column
///
/// Columns inside a wide character or tab resolve to the start of that
/// character. Columns past the end resolve to the end of the line.
pub fn col_to_byte(text: &str, col: usize, tab_width: usize) -> usize {
    let mut current_col = 0;
    for (byte_idx, ch) in text.char_indices() {
        let width = char_width(ch, current_col, tab_width);
        if current_col + width > col {
            return byte_idx;
        }
        current_col += width;
    }
    text.len()
}

/// Find the nearest valid UTF-8 char boundary at or before `pos`
pub fn floor_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos;
    while p > 0 && !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}

/// Byte offset of the character before `pos` (0 if none)
pub fn prev_char_boundary(text: &str, pos: usize) -> usize {
    let pos = floor_char_boundary(text, pos);
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset just past the character at `pos` (text length if none)
pub fn next_char_boundary(text: &str, pos: usize) -> usize {
    let pos = floor_char_boundary(text, pos);
    text[pos..]
        .chars()
        .next()
        .map(|ch| pos + ch.len_utf8())
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_expands_tabs() {
        assert_eq!(display_width("abc", 4), 3);
        assert_eq!(display_width("\tx", 4), 5);
        assert_eq!(display_width("ab\tx", 4), 5);
        assert_eq!(display_width("日本", 4), 4);
    }

    #[test]
    fn test_byte_col_conversion() {
        let text = "a\tb日c";
        assert_eq!(byte_to_col(text, 0, 4), 0);
        assert_eq!(byte_to_col(text, 1, 4), 1);
        assert_eq!(byte_to_col(text, 2, 4), 4);
        assert_eq!(byte_to_col(text, 3, 4), 5);
        assert_eq!(byte_to_col(text, 6, 4), 7);

        assert_eq!(col_to_byte(text, 0, 4), 0);
        assert_eq!(col_to_byte(text, 2, 4), 1);
        assert_eq!(col_to_byte(text, 4, 4), 2);
        assert_eq!(col_to_byte(text, 6, 4), 3);
        assert_eq!(col_to_byte(text, 99, 4), text.len());
    }

    #[test]
    fn test_char_boundaries() {
        let text = "aé日";
        assert_eq!(next_char_boundary(text, 0), 1);
        assert_eq!(next_char_boundary(text, 1), 3);
        assert_eq!(next_char_boundary(text, 6), 6);
        assert_eq!(prev_char_boundary(text, 6), 3);
        assert_eq!(prev_char_boundary(text, 3), 1);
        assert_eq!(prev_char_boundary(text, 0), 0);
        assert_eq!(floor_char_boundary(text, 2), 1);
    }
}
