//! Sparse term-frequency vectors.

use std::collections::BTreeMap;

use crate::tokenize::tokenize;

/// A bag-of-words vector mapping each token to its occurrence count.
///
/// Keys are kept ordered so that any arithmetic folded over the vector visits terms in
/// the same order on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermVector {
    /// Token to occurrence count.
    counts: BTreeMap<String, u32>,
}

impl TermVector {
    /// Builds a vector by counting the given tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Tokenizes `text` and counts the resulting tokens.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    /// Returns the count for a term, or 0 when absent.
    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true when no term has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(term, count)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Euclidean norm of the vector.
    pub fn norm(&self) -> f64 {
        self.counts
            .values()
            .map(|&c| f64::from(c) * f64::from(c))
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .map(|(term, count)| f64::from(count) * f64::from(large.get(term)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_occurrences() {
        let v = TermVector::from_tokens(["rust", "go", "rust"]);
        assert_eq!(v.get("rust"), 2);
        assert_eq!(v.get("go"), 1);
        assert_eq!(v.get("java"), 0);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn order_independent() {
        let a = TermVector::from_tokens(["a1", "b2", "a1"]);
        let b = TermVector::from_tokens(["a1", "a1", "b2"]);
        assert_eq!(a, b);
    }

    #[test]
    fn from_text_tokenizes() {
        let v = TermVector::from_text("Data, data & more DATA");
        assert_eq!(v.get("data"), 3);
        assert_eq!(v.get("more"), 1);
    }

    #[test]
    fn empty_vector() {
        let v = TermVector::from_text("");
        assert!(v.is_empty());
        assert_eq!(v.norm(), 0.0);
    }

    #[test]
    fn norm_and_dot() {
        let a = TermVector::from_tokens(["xx", "xx", "yy"]);
        let b = TermVector::from_tokens(["xx", "zz"]);
        assert!((a.norm() - 5f64.sqrt()).abs() < 1e-12);
        assert_eq!(a.dot(&b), 2.0);
        assert_eq!(b.dot(&a), 2.0);
    }
}
