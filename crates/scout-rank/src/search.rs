//! The result ranker: score, filter, sort and annotate a candidate pool.

use scout_highlight::{Span, highlight};
use scout_record::CandidateRecord;
use scout_text::{TermVector, cosine_similarity, tokenize};
use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    filter::{DefaultPolicy, Dimension, FilterSet, first_failure},
    keyword::keyword_score,
    mode::{Mode, ScoringParams},
};

/// Score given to every candidate when browsing with no query and no filters.
pub const BROWSE_SCORE: f64 = 1.0;

/// Free-text query plus scoring mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    /// Raw query text.
    pub text: String,
    /// Scoring mode.
    pub mode: Mode,
}

impl Query {
    /// Creates a query.
    pub fn new(text: impl Into<String>, mode: Mode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }

    /// True when the text is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Highlighted renderings of the displayed candidate fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlights {
    /// Name spans.
    pub name: Vec<Span>,
    /// Title spans.
    pub title: Vec<Span>,
    /// Spans for each skill, in skill order.
    pub skills: Vec<Vec<Span>>,
}

impl Highlights {
    /// Annotates a candidate's name, title and skills with the matched tokens.
    pub fn annotate(candidate: &CandidateRecord, matched: &[String]) -> Self {
        Self {
            name: highlight(&candidate.name, matched),
            title: highlight(candidate.title_text(), matched),
            skills: candidate
                .skills
                .iter()
                .map(|skill| highlight(skill, matched))
                .collect(),
        }
    }
}

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult<'a> {
    /// The candidate, borrowed from the pool.
    pub candidate: &'a CandidateRecord,
    /// Keyword overlap score, including any location bonus.
    pub keyword_score: f64,
    /// Cosine similarity in `[0, 1]`.
    pub semantic_score: f64,
    /// Combined score, rounded to 3 decimals.
    pub score: f64,
    /// Matched query tokens in query order.
    pub matched_terms: Vec<String>,
    /// Highlighted display fields.
    pub highlights: Highlights,
}

/// Scores for a candidate before filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Keyword overlap score.
    pub keyword: f64,
    /// Semantic similarity.
    pub semantic: f64,
    /// Combined score.
    pub combined: f64,
    /// Matched query tokens.
    pub matched: Vec<String>,
    /// First failing filter dimension, if any.
    pub failed: Option<Dimension>,
}

/// Tokenized query reused across every candidate.
#[derive(Debug, Clone)]
struct PreparedQuery {
    /// Query tokens in order.
    tokens: Vec<String>,
    /// Term-frequency vector of the tokens.
    vector: TermVector,
    /// Scoring mode.
    mode: Mode,
}

impl PreparedQuery {
    /// Tokenizes and vectorizes the query text.
    fn new(query: &Query) -> Self {
        let tokens = tokenize(&query.text);
        let vector = TermVector::from_tokens(&tokens);
        Self {
            tokens,
            vector,
            mode: query.mode,
        }
    }
}

/// Ranks candidates with a fixed set of weights and default policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchEngine {
    /// Scoring weights.
    params: ScoringParams,
    /// Substitutes for absent fields.
    policy: DefaultPolicy,
}

impl SearchEngine {
    /// Creates an engine.
    pub fn new(params: ScoringParams, policy: DefaultPolicy) -> Self {
        Self { params, policy }
    }

    /// Scoring weights.
    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Default policy.
    pub fn policy(&self) -> &DefaultPolicy {
        &self.policy
    }

    /// Scores one candidate without deciding inclusion.
    pub fn explain(
        &self,
        query: &Query,
        filters: &FilterSet,
        candidate: &CandidateRecord,
    ) -> ScoreBreakdown {
        self.score(&PreparedQuery::new(query), filters, candidate)
    }

    /// Scores one candidate against a prepared query.
    fn score(
        &self,
        query: &PreparedQuery,
        filters: &FilterSet,
        candidate: &CandidateRecord,
    ) -> ScoreBreakdown {
        let tokens = tokenize(&candidate.profile_text());
        let keyword = keyword_score(
            &query.tokens,
            &tokens,
            filters.values(Dimension::Locations),
            candidate.location.as_deref(),
            self.params.location_bonus,
        );
        let semantic = cosine_similarity(&query.vector, &TermVector::from_tokens(&tokens));
        ScoreBreakdown {
            combined: self.params.combine(keyword.score, semantic, query.mode),
            keyword: keyword.score,
            semantic,
            matched: keyword.matched,
            failed: first_failure(candidate, filters, &self.policy),
        }
    }

    /// Ranks `candidates` against a query and filter set.
    ///
    /// With a blank query and no active filter every candidate is returned at
    /// [`BROWSE_SCORE`] in pool order. Otherwise candidates failing a filter are dropped,
    /// as are zero-score candidates when no filter is active. Results are sorted by score
    /// descending; ties keep pool order.
    pub fn search<'a>(
        &self,
        query: &Query,
        filters: &FilterSet,
        candidates: &'a [CandidateRecord],
    ) -> Vec<ScoredResult<'a>> {
        let filtering = filters.has_active();
        if query.is_blank() && !filtering {
            debug!(candidates = candidates.len(), "browse all");
            return candidates.iter().map(browse_result).collect();
        }

        let prepared = PreparedQuery::new(query);
        let mut results: Vec<ScoredResult<'a>> = Vec::new();
        for candidate in candidates {
            let breakdown = self.score(&prepared, filters, candidate);
            if let Some(dimension) = breakdown.failed {
                trace!(id = %candidate.id, %dimension, "filtered out");
                continue;
            }
            if breakdown.combined <= 0.0 && !filtering && !query.is_blank() {
                trace!(id = %candidate.id, "no match");
                continue;
            }
            results.push(ScoredResult {
                candidate,
                keyword_score: breakdown.keyword,
                semantic_score: breakdown.semantic,
                score: breakdown.combined,
                highlights: Highlights::annotate(candidate, &breakdown.matched),
                matched_terms: breakdown.matched,
            });
        }
        // sort_by is stable, so ties keep pool order.
        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            candidates = candidates.len(),
            results = results.len(),
            mode = %query.mode,
            terms = prepared.tokens.len(),
            "search complete"
        );
        results
    }
}

/// A browse-all result: fixed score, nothing matched.
fn browse_result(candidate: &CandidateRecord) -> ScoredResult<'_> {
    ScoredResult {
        candidate,
        keyword_score: 0.0,
        semantic_score: 0.0,
        score: BROWSE_SCORE,
        matched_terms: Vec::new(),
        highlights: Highlights::annotate(candidate, &[]),
    }
}

/// Ranks candidates with default weights and the built-in default policy.
pub fn search<'a>(
    query: &str,
    filters: &FilterSet,
    mode: Mode,
    candidates: &'a [CandidateRecord],
) -> Vec<ScoredResult<'a>> {
    SearchEngine::default().search(&Query::new(query, mode), filters, candidates)
}
