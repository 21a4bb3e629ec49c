//! Syntax highlighting
//!
//! Highlighting is split in two: `LanguageDefinition::highlight` is a pure
//! function from document text to styled spans, and [`Highlighter`] paints
//! those spans onto an [`EditorSurface`](crate::surface::EditorSurface).

mod builtin;
mod highlighter;
mod language;
mod rules;
mod style;
mod tokens;

pub use highlighter::Highlighter;
pub use style::{Color, Style, FOREGROUND};
pub use tokens::Category;
