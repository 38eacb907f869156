//! Match highlighting and terminal colors for scout.
//!
//! This crate splits candidate display text into highlighted spans around matched query
//! terms, renders those spans for the terminal, and syntax-highlights the effective
//! configuration for `scout config`.

#![warn(missing_docs)]

mod spans;

pub use spans::{Span, has_highlight, highlight};
use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// A syntax highlighter for configuration output.
pub struct Highlighter {
    /// The syntax set containing language definitions (including TOML).
    syntax_set: SyntaxSet,
    /// The theme set containing color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// The theme to use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a new highlighter with the default theme (Dracula).
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML content for terminal output.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights content with the specified syntax for terminal output.
    ///
    /// If the syntax is not found, the content is rendered as plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings and matched terms).
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text (for errors).
    pub const RED: &str = "\x1b[31m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Renders spans for the terminal, marking highlighted spans bold yellow.
pub fn render_spans(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        if span.highlighted {
            out.push_str(colors::BOLD);
            out.push_str(colors::YELLOW);
            out.push_str(&span.text);
            out.push_str(colors::RESET);
        } else {
            out.push_str(&span.text);
        }
    }
    out
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Formats text as an error (red).
pub fn error(text: &str) -> String {
    format!("{}{}{}", colors::RED, text, colors::RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighter_toml() {
        let hl = Highlighter::new();
        let toml = r#"[search]
mode = "blended"
"#;
        let output = hl.highlight_toml(toml);
        assert!(output.contains("\x1b["));
        assert!(output.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_toml_syntax_available() {
        let ss = extra_syntaxes();
        assert!(
            ss.find_syntax_by_extension("toml").is_some(),
            "TOML syntax should be available"
        );
    }

    #[test]
    fn test_render_spans_marks_highlights() {
        let spans = highlight("Backend Engineer", &["engineer"]);
        let out = render_spans(&spans);
        assert!(out.starts_with("Backend "));
        let marked = format!("{}{}Engineer{}", colors::BOLD, colors::YELLOW, colors::RESET);
        assert!(out.contains(&marked));
    }

    #[test]
    fn test_render_plain_spans_unchanged() {
        let spans = highlight::<&str>("Ann Lee", &[]);
        assert_eq!(render_spans(&spans), "Ann Lee");
    }

    #[test]
    fn test_header_formatting() {
        let h = header("Results");
        assert!(h.contains(colors::BOLD));
        assert!(h.contains(colors::CYAN));
        assert!(h.contains(colors::RESET));
        assert!(h.contains("Results"));
    }

    #[test]
    fn test_dim_formatting() {
        let d = dim("faint");
        assert!(d.contains(colors::DIM));
        assert!(d.contains(colors::RESET));
    }
}
