//! Splitting display text into highlighted and plain spans.

use regex::RegexBuilder;
use serde::Serialize;

/// A piece of display text, flagged when it matched a query term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    /// The text, with its original casing.
    pub text: String,
    /// True when the text case-insensitively equals a matched term.
    pub highlighted: bool,
}

impl Span {
    /// Creates an unhighlighted span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    /// Creates a highlighted span.
    pub fn marked(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// Splits `text` into spans around case-insensitive occurrences of `terms`.
///
/// Terms are tried as an alternation in the order given, so when two terms could match
/// at the same position the earlier one wins. Matches may fall inside words: the term
/// `engineer` marks the first eight letters of "Engineering". Empty pieces are never
/// emitted; with no terms, or no match, the result is a single plain span holding the
/// whole input.
pub fn highlight<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<Span> {
    let alternatives: Vec<String> = terms
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| !t.is_empty())
        .map(regex::escape)
        .collect();
    if alternatives.is_empty() {
        return vec![Span::plain(text)];
    }

    let pattern = format!("(?:{})", alternatives.join("|"));
    let Ok(matcher) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
        return vec![Span::plain(text)];
    };

    let mut spans = Vec::new();
    let mut last = 0;
    for found in matcher.find_iter(text) {
        if found.start() > last {
            spans.push(Span::plain(&text[last..found.start()]));
        }
        spans.push(Span::marked(found.as_str()));
        last = found.end();
    }
    if last < text.len() {
        spans.push(Span::plain(&text[last..]));
    }

    if spans.is_empty() {
        spans.push(Span::plain(text));
    }
    spans
}

/// Returns true when any span is highlighted.
pub fn has_highlight(spans: &[Span]) -> bool {
    spans.iter().any(|s| s.highlighted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_terms_is_single_plain_span() {
        let spans = highlight::<&str>("Backend Engineer", &[]);
        assert_eq!(spans, vec![Span::plain("Backend Engineer")]);
    }

    #[test]
    fn marks_case_insensitive_match_preserving_case() {
        let spans = highlight("Backend Engineer", &["engineer"]);
        assert_eq!(
            spans,
            vec![Span::plain("Backend "), Span::marked("Engineer")]
        );
    }

    #[test]
    fn multiple_terms_and_occurrences() {
        let spans = highlight("Go and go-lang", &["go", "lang"]);
        assert_eq!(
            spans,
            vec![
                Span::marked("Go"),
                Span::plain(" and "),
                Span::marked("go"),
                Span::plain("-"),
                Span::marked("lang"),
            ]
        );
    }

    #[test]
    fn matches_inside_words() {
        let spans = highlight("Engineering", &["engineer"]);
        assert_eq!(spans, vec![Span::marked("Engineer"), Span::plain("ing")]);
    }

    #[test]
    fn whole_text_match() {
        assert_eq!(highlight("SQL", &["sql"]), vec![Span::marked("SQL")]);
    }

    #[test]
    fn no_match_returns_input() {
        assert_eq!(highlight("Python", &["rust"]), vec![Span::plain("Python")]);
    }

    #[test]
    fn empty_text() {
        assert_eq!(highlight("", &["rust"]), vec![Span::plain("")]);
    }

    #[test]
    fn earlier_alternative_wins_at_same_position() {
        let spans = highlight("javascript", &["java", "javascript"]);
        assert_eq!(spans, vec![Span::marked("java"), Span::plain("script")]);
    }

    #[test]
    fn concatenation_reproduces_input() {
        let text = "Senior Staff ENGINEER, Platform (Go/Rust)";
        let spans = highlight(text, &["engineer", "go", "rust", "platform"]);
        let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, text);
        assert!(has_highlight(&spans));
    }

    #[test]
    fn serializes_to_text_and_flag() {
        let json = serde_json::to_string(&Span::marked("Go")).unwrap();
        assert_eq!(json, r#"{"text":"Go","highlighted":true}"#);
    }
}
