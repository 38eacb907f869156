//! Draft and applied search state.
//!
//! Edits go to a [`SearchDraft`]. Results only change when the draft is committed, which
//! copies it into an [`AppliedSearch`] and reranks the whole pool.

use std::ops::{Deref, DerefMut};

use scout_record::{CandidateRecord, JobRecord};
use tracing::debug;

use crate::{
    derive::derive_filters_from_job,
    error::SubmitError,
    filter::FilterSet,
    mode::Mode,
    search::{Query, ScoredResult, SearchEngine},
    selection::{Confirmation, SelectionSet, SubmissionSink, submit_selection},
};

/// Editable filters. Changing them has no effect on results until commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftFilterSet(FilterSet);

impl Deref for DraftFilterSet {
    type Target = FilterSet;

    fn deref(&self) -> &FilterSet {
        &self.0
    }
}

impl DerefMut for DraftFilterSet {
    fn deref_mut(&mut self) -> &mut FilterSet {
        &mut self.0
    }
}

/// Filters the current results were computed with. Only a commit produces one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedFilterSet(FilterSet);

impl Deref for AppliedFilterSet {
    type Target = FilterSet;

    fn deref(&self) -> &FilterSet {
        &self.0
    }
}

/// The editable side of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDraft {
    /// Query text.
    pub text: String,
    /// Scoring mode.
    pub mode: Mode,
    /// Filters.
    pub filters: DraftFilterSet,
}

impl SearchDraft {
    /// Replaces the draft filters.
    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = DraftFilterSet(filters);
    }
}

/// The committed side of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedSearch {
    /// Committed query.
    query: Query,
    /// Committed filters.
    filters: AppliedFilterSet,
}

impl AppliedSearch {
    /// Committed query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Committed filters.
    pub fn filters(&self) -> &AppliedFilterSet {
        &self.filters
    }
}

/// Search state over a borrowed candidate pool.
#[derive(Debug, Clone)]
pub struct SearchSession<'a> {
    /// Ranker.
    engine: SearchEngine,
    /// Candidate pool.
    candidates: &'a [CandidateRecord],
    /// Editable state.
    draft: SearchDraft,
    /// Committed state.
    applied: AppliedSearch,
    /// Results for the applied state.
    results: Vec<ScoredResult<'a>>,
    /// Bulk selection.
    selection: SelectionSet,
}

impl<'a> SearchSession<'a> {
    /// Starts a session in the browse-all state.
    pub fn new(engine: SearchEngine, candidates: &'a [CandidateRecord], mode: Mode) -> Self {
        let draft = SearchDraft {
            mode,
            ..SearchDraft::default()
        };
        let mut session = Self {
            engine,
            candidates,
            draft,
            applied: AppliedSearch::default(),
            results: Vec::new(),
            selection: SelectionSet::new(),
        };
        session.commit();
        session
    }

    /// The draft.
    pub fn draft(&self) -> &SearchDraft {
        &self.draft
    }

    /// Mutable access to the draft.
    pub fn draft_mut(&mut self) -> &mut SearchDraft {
        &mut self.draft
    }

    /// The applied state.
    pub fn applied(&self) -> &AppliedSearch {
        &self.applied
    }

    /// Results for the applied state.
    pub fn results(&self) -> &[ScoredResult<'a>] {
        &self.results
    }

    /// True when the draft differs from the applied state.
    pub fn is_dirty(&self) -> bool {
        self.draft.text != self.applied.query.text
            || self.draft.mode != self.applied.query.mode
            || *self.draft.filters != *self.applied.filters
    }

    /// Copies the draft into the applied state and reranks.
    pub fn commit(&mut self) -> &[ScoredResult<'a>] {
        self.applied = AppliedSearch {
            query: Query::new(self.draft.text.clone(), self.draft.mode),
            filters: AppliedFilterSet(self.draft.filters.0.clone()),
        };
        self.results = self
            .engine
            .search(&self.applied.query, &self.applied.filters, self.candidates);
        debug!(
            query = %self.applied.query.text,
            filters = self.applied.filters.active().count(),
            results = self.results.len(),
            "committed search"
        );
        &self.results
    }

    /// Replaces query text and filters with those derived from a job, and commits.
    ///
    /// The mode is kept.
    pub fn apply_job(&mut self, job: &JobRecord) -> &[ScoredResult<'a>] {
        let derived = derive_filters_from_job(job);
        debug!(job = %job.id, "applying job filters");
        self.draft.text = derived.search_text;
        self.draft.set_filters(derived.filters);
        self.commit()
    }

    /// Resets query and filters, clears the selection and returns to browse-all.
    pub fn clear(&mut self) -> &[ScoredResult<'a>] {
        self.draft.text.clear();
        self.draft.filters.clear();
        self.selection.clear();
        self.commit()
    }

    /// The bulk selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Flips one candidate's selection.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    /// Selects or deselects every candidate in the current results.
    pub fn toggle_all(&mut self, target: bool) {
        let visible = self.results.iter().map(|r| r.candidate.id.as_str());
        self.selection.toggle_all(visible, target);
    }

    /// Submits the selection to a job. Success clears the selection.
    pub fn submit<K: SubmissionSink + ?Sized>(
        &mut self,
        job_id: Option<&str>,
        sink: &mut K,
    ) -> Result<Confirmation, SubmitError> {
        submit_selection(&mut self.selection, job_id, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Dimension;

    fn pool() -> Vec<CandidateRecord> {
        vec![
            CandidateRecord::new("a", "Ann Lee")
                .with_title("Senior Product Manager")
                .with_location("Remote"),
            CandidateRecord::new("b", "Bo Ray")
                .with_title("Backend Engineer")
                .with_location("Austin"),
            CandidateRecord::new("c", "Cy Diaz")
                .with_title("Product Manager")
                .with_location("Denver"),
        ]
    }

    /// Accepts everything.
    struct AcceptAll;

    impl SubmissionSink for AcceptAll {
        fn submit(&mut self, _ids: &[String], _job_id: &str) -> Result<(), SubmitError> {
            Ok(())
        }
    }

    #[test]
    fn starts_browsing_all() {
        let candidates = pool();
        let session = SearchSession::new(SearchEngine::default(), &candidates, Mode::Blended);
        assert_eq!(session.results().len(), 3);
        assert!(!session.is_dirty());
    }

    #[test]
    fn draft_edits_do_not_rerank() {
        let candidates = pool();
        let mut session = SearchSession::new(SearchEngine::default(), &candidates, Mode::Keyword);
        session.draft_mut().text = "engineer".into();
        session.draft_mut().filters.add(Dimension::Locations, "Austin");
        assert!(session.is_dirty());
        assert_eq!(session.results().len(), 3);
        assert!(session.applied().query().is_blank());

        let results = session.commit();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].candidate.id, "b");
        assert!(!session.is_dirty());
        assert_eq!(session.applied().filters().values(Dimension::Locations), ["Austin"]);
    }

    #[test]
    fn apply_job_sets_draft_and_applied() {
        let candidates = pool();
        let mut session = SearchSession::new(SearchEngine::default(), &candidates, Mode::Keyword);
        let job = JobRecord::new("j1", "Senior Product Manager", "Remote");
        let ids: Vec<_> = session
            .apply_job(&job)
            .iter()
            .map(|r| r.candidate.id.clone())
            .collect();
        // "Product Manager" passes the titles filter through "Manager".
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(session.draft().text, "Senior Product Manager");
        assert_eq!(session.applied().query().text, "Senior Product Manager");
        assert_eq!(
            session.applied().filters().values(Dimension::Titles),
            ["Senior", "Manager"]
        );
        assert_eq!(session.applied().query().mode, Mode::Keyword);
        assert!(!session.is_dirty());
    }

    #[test]
    fn toggle_all_uses_visible_results() {
        let candidates = pool();
        let mut session = SearchSession::new(SearchEngine::default(), &candidates, Mode::Keyword);
        session.draft_mut().text = "manager".into();
        session.commit();
        session.toggle_all(true);
        let selected: Vec<_> = session.selection().iter().collect();
        assert_eq!(selected, vec!["a", "c"]);
        session.toggle_all(false);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let candidates = pool();
        let mut session = SearchSession::new(SearchEngine::default(), &candidates, Mode::Keyword);
        session.draft_mut().text = "engineer".into();
        session.commit();
        session.toggle("b");
        let results = session.clear();
        assert_eq!(results.len(), 3);
        assert!(session.selection().is_empty());
        assert!(!session.draft().filters.has_active());
    }

    #[test]
    fn submit_clears_selection_on_success() {
        let candidates = pool();
        let mut session = SearchSession::new(SearchEngine::default(), &candidates, Mode::Keyword);
        session.toggle("a");
        assert_eq!(
            session.submit(None, &mut AcceptAll),
            Err(SubmitError::NoDestination)
        );
        assert_eq!(session.selection().len(), 1);
        let confirmation = session.submit(Some("j1"), &mut AcceptAll).unwrap();
        assert_eq!(confirmation.candidate_ids, vec!["a"]);
        assert!(session.selection().is_empty());
    }
}
