//! Highlight categories
//!
//! Each category owns one fixed color. Categories are applied in the
//! order listed by [`Category::PASS_ORDER`]; a later category repaints
//! whatever an earlier one colored on the same characters.

use super::style::{Color, Style};

/// Semantic categories recognized by the highlighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Language keywords (if, class, return, ...)
    Keyword,
    /// Built-in type names (int, string, ...)
    Type,
    /// Double-quoted string literals
    String,
    /// `//` line comments
    Comment,
    /// Integer literals
    Number,
    /// Identifier directly followed by `(`
    MethodName,
}

impl Category {
    /// Order in which categories are painted
    pub const PASS_ORDER: [Category; 6] = [
        Category::Keyword,
        Category::Type,
        Category::String,
        Category::MethodName,
        Category::Comment,
        Category::Number,
    ];

    /// Foreground color for this category
    pub fn color(&self) -> Color {
        match self {
            Category::Keyword => Color::from_u32(0x569CD6),
            Category::Type => Color::from_u32(0x4EC9B0),
            Category::String => Color::from_u32(0xD69D85),
            Category::Comment => Color::from_u32(0x6A9955),
            Category::Number => Color::from_u32(0xB5CEA8),
            Category::MethodName => Color::from_u32(0xDCDCAA),
        }
    }

    /// Style for this category (always on the editor background)
    pub fn style(&self) -> Style {
        Style::fg(self.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_match_palette() {
        assert_eq!(Category::Keyword.color(), Color::rgb(0x56, 0x9C, 0xD6));
        assert_eq!(Category::Type.color(), Color::rgb(0x4E, 0xC9, 0xB0));
        assert_eq!(Category::String.color(), Color::rgb(0xD6, 0x9D, 0x85));
        assert_eq!(Category::Comment.color(), Color::rgb(0x6A, 0x99, 0x55));
        assert_eq!(Category::Number.color(), Color::rgb(0xB5, 0xCE, 0xA8));
        assert_eq!(Category::MethodName.color(), Color::rgb(0xDC, 0xDC, 0xAA));
    }

    #[test]
    fn test_styles_use_editor_background() {
        for category in Category::PASS_ORDER {
            assert_eq!(category.style().bg, crate::syntax::style::BACKGROUND);
            assert!(!category.style().is_default());
        }
    }
}
