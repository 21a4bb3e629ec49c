//! Language definitions for syntax highlighting
//!
//! A [`LanguageDefinition`] is an ordered list of pattern rules. Highlighting
//! is a pure function of the document text: every rule is run against the
//! whole text and every match becomes a span. Spans are returned in paint
//! order, so applying them front to back yields last-write-wins coloring.

use super::rules::PatternRule;
use super::style::Span;

/// An ordered set of pattern rules for one language
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Language name
    pub name: String,
    /// Rules in paint order (earlier rules are painted over by later ones)
    pub rules: Vec<PatternRule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rules: Vec::new(),
        }
    }

    /// Append a rule; it paints after every rule added before it
    pub fn add_rule(&mut self, rule: PatternRule) {
        self.rules.push(rule);
    }

    /// Compute every span for `text`, in paint order
    ///
    /// Spans may overlap. Nothing is merged or deduplicated.
    pub fn highlight(&self, text: &str) -> Vec<Span> {
        if text.is_empty() {
            return Vec::new();
        }

        self.rules
            .iter()
            .flat_map(|rule| {
                rule.find_all(text)
                    .into_iter()
                    .map(move |(start, end)| Span::new(start, end, rule.category))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Category;

    fn create_test_language() -> LanguageDefinition {
        let mut lang = LanguageDefinition::new("Test");

        if let Some(rule) = PatternRule::whole_word("if", Category::Keyword) {
            lang.add_rule(rule);
        }
        if let Some(rule) = PatternRule::new("number", r"\b\d+\b", Category::Number) {
            lang.add_rule(rule);
        }
        if let Some(rule) = PatternRule::new("line_comment", r"(?m)//.*?$", Category::Comment) {
            lang.add_rule(rule);
        }

        lang
    }

    #[test]
    fn test_spans_follow_rule_order() {
        let lang = create_test_language();
        let spans = lang.highlight("if 42 // 7");

        let categories: Vec<_> = spans.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Keyword,
                Category::Number,
                Category::Number,
                Category::Comment
            ]
        );
        assert_eq!(spans[3], Span::new(6, 10, Category::Comment));
    }

    #[test]
    fn test_empty_text_has_no_spans() {
        let lang = create_test_language();
        assert!(lang.highlight("").is_empty());
    }

    #[test]
    fn test_comment_stops_at_line_end() {
        let lang = create_test_language();
        let spans = lang.highlight("// one\nif");

        assert!(spans.contains(&Span::new(0, 6, Category::Comment)));
        assert!(spans.contains(&Span::new(7, 9, Category::Keyword)));
    }
}
