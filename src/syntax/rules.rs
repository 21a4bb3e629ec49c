//! Pattern rules for syntax highlighting
//!
//! A rule is one regex plus the category its matches are painted with.

use regex::Regex;

use super::tokens::Category;

/// A single pattern rule
///
/// Every non-overlapping match of `pattern` in the document becomes one span.
/// When `group` is non-zero only that capture group is painted, which lets a
/// rule require trailing context (such as an opening parenthesis) without
/// coloring it.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Category to assign to matches
    pub category: Category,
    /// Capture group that forms the span (0 = whole match)
    pub group: usize,
}

impl PatternRule {
    /// Create a new pattern rule painting the whole match
    pub fn new(name: &str, pattern: &str, category: Category) -> Option<Self> {
        Self::with_group(name, pattern, category, 0)
    }

    /// Create a pattern rule painting a single capture group
    pub fn with_group(name: &str, pattern: &str, category: Category, group: usize) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(regex) if group < regex.captures_len() => Some(Self {
                pattern: regex,
                category,
                group,
            }),
            Ok(_) => {
                tracing::warn!(rule = name, group, "capture group out of range, rule skipped");
                None
            }
            Err(e) => {
                tracing::warn!(rule = name, error = %e, "invalid pattern, rule skipped");
                None
            }
        }
    }

    /// Rule matching `word` as a whole word, case-sensitively
    pub fn whole_word(word: &str, category: Category) -> Option<Self> {
        let pattern = format!(r"\b{}\b", regex::escape(word));
        Self::new(word, &pattern, category)
    }

    /// Byte ranges of every match in `text`, in document order
    pub fn find_all(&self, text: &str) -> Vec<(usize, usize)> {
        if self.group == 0 {
            return self
                .pattern
                .find_iter(text)
                .map(|m| (m.start(), m.end()))
                .collect();
        }

        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(self.group))
            .map(|m| (m.start(), m.end()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("number", r"\b\d+\b", Category::Number).unwrap();
        assert_eq!(rule.find_all("abc 123 def 4"), vec![(4, 7), (12, 13)]);
        assert!(rule.find_all("no numbers").is_empty());
    }

    #[test]
    fn test_whole_word_rejects_partial_identifiers() {
        let rule = PatternRule::whole_word("int", Category::Type).unwrap();
        assert_eq!(rule.find_all("int interval print int"), vec![(0, 3), (19, 22)]);
    }

    #[test]
    fn test_whole_word_is_case_sensitive() {
        let rule = PatternRule::whole_word("class", Category::Keyword).unwrap();
        assert!(rule.find_all("Class CLASS").is_empty());
    }

    #[test]
    fn test_capture_group() {
        let rule =
            PatternRule::with_group("call", r"\b(\w+)\s*\(", Category::MethodName, 1).unwrap();
        assert_eq!(rule.find_all("foo (bar(1))"), vec![(0, 3), (5, 8)]);
    }

    #[test]
    fn test_invalid_rules_are_rejected() {
        assert!(PatternRule::new("broken", r"(unclosed", Category::String).is_none());
        assert!(PatternRule::with_group("nogroup", r"\w+", Category::String, 1).is_none());
    }
}
