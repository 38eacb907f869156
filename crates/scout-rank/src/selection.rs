//! Bulk selection and submission validation.

use std::{collections::BTreeSet, fmt};

use serde::Serialize;
use tracing::debug;

use crate::error::SubmitError;

/// Candidate ids chosen for a bulk action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet {
    /// Selected ids, ordered.
    ids: BTreeSet<String>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips one id. Returns true when the id is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Selects (`target = true`) or deselects every visible id. Others are untouched.
    pub fn toggle_all<I, S>(&mut self, visible_ids: I, target: bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in visible_ids {
            let id = id.as_ref();
            if target {
                self.ids.insert(id.to_string());
            } else {
                self.ids.remove(id);
            }
        }
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// True when the id is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

/// Receives validated submissions.
pub trait SubmissionSink {
    /// Accepts or rejects candidates for a job.
    fn submit(&mut self, candidate_ids: &[String], job_id: &str) -> Result<(), SubmitError>;
}

/// Returned to the caller after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    /// Destination job.
    pub job_id: String,
    /// Submitted candidates.
    pub candidate_ids: Vec<String>,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.candidate_ids.len();
        let noun = if count == 1 { "candidate" } else { "candidates" };
        write!(f, "submitted {count} {noun} to job {}", self.job_id)
    }
}

/// Returns the destination or [`SubmitError::NoDestination`].
fn destination(job_id: Option<&str>) -> Result<&str, SubmitError> {
    match job_id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(SubmitError::NoDestination),
    }
}

/// Submits every selected candidate to a job.
///
/// The destination is checked first, then the selection. The selection is cleared only
/// when the sink accepts.
pub fn submit_selection<K: SubmissionSink + ?Sized>(
    selection: &mut SelectionSet,
    job_id: Option<&str>,
    sink: &mut K,
) -> Result<Confirmation, SubmitError> {
    let job_id = destination(job_id)?;
    if selection.is_empty() {
        return Err(SubmitError::EmptySelection);
    }
    let candidate_ids: Vec<String> = selection.iter().map(str::to_string).collect();
    sink.submit(&candidate_ids, job_id)?;
    selection.clear();
    debug!(job = job_id, count = candidate_ids.len(), "bulk submission accepted");
    Ok(Confirmation {
        job_id: job_id.to_string(),
        candidate_ids,
    })
}

/// Submits one candidate to a job.
pub fn submit_candidate<K: SubmissionSink + ?Sized>(
    candidate_id: &str,
    job_id: Option<&str>,
    sink: &mut K,
) -> Result<Confirmation, SubmitError> {
    let job_id = destination(job_id)?;
    let candidate_ids = vec![candidate_id.to_string()];
    sink.submit(&candidate_ids, job_id)?;
    debug!(job = job_id, candidate = candidate_id, "submission accepted");
    Ok(Confirmation {
        job_id: job_id.to_string(),
        candidate_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every accepted submission; rejects job "closed".
    #[derive(Default)]
    struct RecordingSink {
        /// Accepted submissions.
        accepted: Vec<(Vec<String>, String)>,
    }

    impl SubmissionSink for RecordingSink {
        fn submit(&mut self, candidate_ids: &[String], job_id: &str) -> Result<(), SubmitError> {
            if job_id == "closed" {
                return Err(SubmitError::Rejected("job is closed".into()));
            }
            self.accepted.push((candidate_ids.to_vec(), job_id.to_string()));
            Ok(())
        }
    }

    fn selected(ids: &[&str]) -> SelectionSet {
        let mut selection = SelectionSet::new();
        selection.toggle_all(ids, true);
        selection
    }

    #[test]
    fn toggle_flips() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle("a"));
        assert!(selection.contains("a"));
        assert!(!selection.toggle("a"));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_only_touches_visible() {
        let mut selection = selected(&["hidden"]);
        selection.toggle_all(["a", "b"], true);
        assert_eq!(selection.len(), 3);
        selection.toggle_all(["a", "b"], false);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["hidden"]);
    }

    #[test]
    fn clear_empties() {
        let mut selection = selected(&["a", "b"]);
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn bulk_requires_destination() {
        let mut selection = selected(&["a"]);
        let mut sink = RecordingSink::default();
        assert_eq!(
            submit_selection(&mut selection, None, &mut sink),
            Err(SubmitError::NoDestination)
        );
        assert_eq!(
            submit_selection(&mut selection, Some("  "), &mut sink),
            Err(SubmitError::NoDestination)
        );
        assert_eq!(selection.len(), 1);
        assert!(sink.accepted.is_empty());
    }

    #[test]
    fn bulk_requires_selection() {
        let mut selection = SelectionSet::new();
        let mut sink = RecordingSink::default();
        let err = submit_selection(&mut selection, Some("j1"), &mut sink).unwrap_err();
        assert_eq!(err, SubmitError::EmptySelection);
        assert_eq!(err.to_string(), "empty selection");
    }

    #[test]
    fn destination_checked_before_selection() {
        let mut selection = SelectionSet::new();
        let mut sink = RecordingSink::default();
        let err = submit_selection(&mut selection, None, &mut sink).unwrap_err();
        assert_eq!(err.to_string(), "no destination selected");
    }

    #[test]
    fn bulk_success_clears_selection() {
        let mut selection = selected(&["b", "a"]);
        let mut sink = RecordingSink::default();
        let confirmation = submit_selection(&mut selection, Some("j1"), &mut sink).unwrap();
        assert_eq!(confirmation.candidate_ids, vec!["a", "b"]);
        assert_eq!(confirmation.to_string(), "submitted 2 candidates to job j1");
        assert!(selection.is_empty());
        assert_eq!(sink.accepted.len(), 1);
    }

    #[test]
    fn rejection_keeps_selection() {
        let mut selection = selected(&["a"]);
        let mut sink = RecordingSink::default();
        let err = submit_selection(&mut selection, Some("closed"), &mut sink).unwrap_err();
        assert_eq!(err, SubmitError::Rejected("job is closed".into()));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn single_submission() {
        let mut sink = RecordingSink::default();
        assert_eq!(
            submit_candidate("a", None, &mut sink),
            Err(SubmitError::NoDestination)
        );
        let confirmation = submit_candidate("a", Some("j1"), &mut sink).unwrap();
        assert_eq!(confirmation.to_string(), "submitted 1 candidate to job j1");
    }
}
