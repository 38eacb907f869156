//! Free-text tokenizer.
//!
//! Tokens are lowercase ASCII alphanumeric runs. Every other character, punctuation and
//! non-ASCII letters included, acts as a separator.

/// Tokens shorter than this are dropped.
pub const MIN_TOKEN_LEN: usize = 2;

/// Splits text into lowercase alphanumeric tokens of at least [`MIN_TOKEN_LEN`] characters.
///
/// Never fails: empty or punctuation-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn punctuation_is_a_separator() {
        assert_eq!(tokenize("Node.js, React!"), vec!["node", "js", "react"]);
    }

    #[test]
    fn single_characters_dropped() {
        assert_eq!(tokenize("C# and a C++ dev"), vec!["and", "dev"]);
    }

    #[test]
    fn lowercases_and_keeps_digits() {
        assert_eq!(tokenize("Web3 ES2015"), vec!["web3", "es2015"]);
    }

    #[test]
    fn non_ascii_letters_split_tokens() {
        assert_eq!(tokenize("Zürich"), vec!["rich"]);
        assert_eq!(tokenize("São Paulo"), vec!["paulo"]);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        assert_eq!(
            tokenize("go go-lang GO"),
            vec!["go", "go", "lang", "go"]
        );
    }

    #[test]
    fn only_punctuation() {
        assert!(tokenize("!!! --- ???").is_empty());
    }
}
