//! Keyword overlap scoring.

use std::collections::BTreeSet;

use crate::filter::contains_ignore_case;

/// Keyword score for one candidate and the query tokens that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatch {
    /// Distinct overlap count plus any location bonus.
    pub score: f64,
    /// Matched query tokens in query order, deduplicated.
    pub matched: Vec<String>,
    /// True when the location bonus was applied.
    pub location_bonus: bool,
}

/// Scores keyword overlap between query and candidate tokens.
///
/// The score counts distinct query tokens present in the candidate. When any value in
/// `location_filters` is a case-insensitive substring of `candidate_location`, `bonus`
/// is added.
pub fn keyword_score(
    query_tokens: &[String],
    candidate_tokens: &[String],
    location_filters: &[String],
    candidate_location: Option<&str>,
    bonus: f64,
) -> KeywordMatch {
    let available: BTreeSet<&str> = candidate_tokens.iter().map(String::as_str).collect();
    let mut seen = BTreeSet::new();
    let mut matched = Vec::new();
    for token in query_tokens {
        if available.contains(token.as_str()) && seen.insert(token.as_str()) {
            matched.push(token.clone());
        }
    }

    let location_bonus = candidate_location.is_some_and(|location| {
        location_filters
            .iter()
            .any(|wanted| contains_ignore_case(location, wanted))
    });

    let mut score = matched.len() as f64;
    if location_bonus {
        score += bonus;
    }
    KeywordMatch {
        score,
        matched,
        location_bonus,
    }
}
