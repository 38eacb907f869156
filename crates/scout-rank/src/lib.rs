//! Candidate ranking for scout.
//!
//! Given a candidate pool, a free-text [`Query`] and a [`FilterSet`], the ranker scores
//! every candidate two ways:
//!
//! - **keyword**: distinct query tokens found in the candidate's profile, plus a bonus
//!   when a location filter matches the candidate's location
//! - **semantic**: cosine similarity of the query's and profile's term-frequency vectors
//!
//! The [`Mode`] picks how the two combine. Candidates that fail an active filter are
//! dropped, the rest are sorted by score and annotated with highlight spans.
//!
//! ```
//! use scout_rank::{FilterSet, Mode, search};
//! use scout_record::CandidateRecord;
//!
//! let pool = vec![CandidateRecord::new("1", "Bo Ray").with_title("Backend Engineer")];
//! let results = search("engineer", &FilterSet::new(), Mode::Keyword, &pool);
//! assert_eq!(results[0].matched_terms, vec!["engineer"]);
//! ```
//!
//! [`SearchSession`] adds the draft/applied split and bulk selection on top.

#![warn(missing_docs)]

mod derive;
mod error;
mod filter;
mod keyword;
mod mode;
mod search;
mod selection;
mod session;

pub use derive::{DerivedSearch, REMOTE, SENIORITY_LABELS, derive_filters_from_job};
pub use error::{FilterError, SubmitError};
pub use filter::{
    DefaultPolicy, Dimension, DimensionKind, Field, FieldValue, FilterSet, contains_ignore_case,
    dimension_passes, field_value, first_failure, passes,
};
pub use keyword::{KeywordMatch, keyword_score};
pub use mode::{Mode, ScoringParams, combine};
pub use search::{
    BROWSE_SCORE, Highlights, Query, ScoreBreakdown, ScoredResult, SearchEngine, search,
};
pub use selection::{
    Confirmation, SelectionSet, SubmissionSink, submit_candidate, submit_selection,
};
pub use session::{AppliedFilterSet, AppliedSearch, DraftFilterSet, SearchDraft, SearchSession};
