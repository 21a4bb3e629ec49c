//! Style types for text rendering
//!
//! Colors are 24-bit RGB and are sent to the terminal as truecolor escapes.

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        crossterm::style::Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Editor background
pub const BACKGROUND: Color = Color::from_u32(0x1E1E1E);

/// Plain text foreground
pub const FOREGROUND: Color = Color::from_u32(0xFFFFFF);

/// Foreground/background pair applied to a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: FOREGROUND,
            bg: BACKGROUND,
        }
    }
}

impl Style {
    /// Create a style with the given foreground on the editor background
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Check if this is the default (no styling)
    #[cfg(test)]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A styled byte range of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Category that produced this span
    pub category: super::Category,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, category: super::Category) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Style this span paints with
    pub fn style(&self) -> Style {
        self.category.style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Category;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, FOREGROUND);
        assert_eq!(style.bg, BACKGROUND);
    }

    #[test]
    fn test_style_fg_keeps_background() {
        let red = Color::rgb(255, 0, 0);
        let style = Style::fg(red);
        assert_eq!(style.fg, red);
        assert_eq!(style.bg, BACKGROUND);
        assert!(!style.is_default());
    }

    #[test]
    fn test_from_u32() {
        assert_eq!(Color::from_u32(0x569CD6), Color::rgb(0x56, 0x9C, 0xD6));
        assert_eq!(BACKGROUND, Color::rgb(0x1E, 0x1E, 0x1E));
    }

    #[test]
    fn test_span() {
        let span = Span::new(5, 10, Category::Number);
        assert_eq!(span.len(), 5);
        assert_eq!(Span::new(7, 3, Category::Number).len(), 0);
        assert_eq!(span.style(), Category::Number.style());
    }
}
