//! C-family language definition (C#, Java and friends)

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::Category;

/// Keywords, painted first
pub const KEYWORDS: [&str; 20] = [
    "public", "private", "protected", "static", "void", "return", "class", "using", "namespace",
    "if", "else", "for", "while", "switch", "case", "break", "new", "try", "catch", "finally",
];

/// Built-in type names, painted after keywords
pub const TYPES: [&str; 9] = [
    "int", "string", "bool", "double", "float", "char", "var", "object", "decimal",
];

/// Create the C-family language definition
///
/// Rule order is paint order: keywords, types, strings, method names,
/// comments, then numbers.
pub fn csharp_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("C#");

    for word in KEYWORDS {
        if let Some(rule) = PatternRule::whole_word(word, Category::Keyword) {
            lang.add_rule(rule);
        }
    }

    for word in TYPES {
        if let Some(rule) = PatternRule::whole_word(word, Category::Type) {
            lang.add_rule(rule);
        }
    }

    // No escape handling: `\"` ends the literal
    if let Some(rule) = PatternRule::new("string", r#"".*?""#, Category::String) {
        lang.add_rule(rule);
    }

    // Only the identifier is painted, not the whitespace or parenthesis
    if let Some(rule) = PatternRule::with_group("method_call", r"\b(\w+)\s*\(", Category::MethodName, 1) {
        lang.add_rule(rule);
    }

    // After calls and strings, so everything after `//` reads as comment
    if let Some(rule) = PatternRule::new("line_comment", r"(?m)//.*?$", Category::Comment) {
        lang.add_rule(rule);
    }

    // Last: digits keep their color inside comments
    if let Some(rule) = PatternRule::new("number", r"\b\d+\b", Category::Number) {
        lang.add_rule(rule);
    }

    lang
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_compiles() {
        let lang = csharp_language();
        assert_eq!(lang.rules.len(), KEYWORDS.len() + TYPES.len() + 4);
    }

    #[test]
    fn test_keyword_and_type_lists_are_disjoint() {
        for word in KEYWORDS {
            assert!(!TYPES.contains(&word), "{} is in both lists", word);
        }
    }

    #[test]
    fn test_rules_follow_paint_order() {
        let lang = csharp_language();
        let mut order: Vec<Category> = lang.rules.iter().map(|r| r.category).collect();
        order.dedup();
        assert_eq!(order, Category::PASS_ORDER.to_vec());
    }
}
