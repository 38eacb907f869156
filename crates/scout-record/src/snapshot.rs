//! Immutable per-invocation snapshots of candidates and jobs.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{CandidateRecord, JobRecord, RecordError};

/// Supplies the candidate pool and open jobs to the ranking core.
///
/// Implementations hand out an already-resolved view; the core never mutates it.
pub trait CandidateSource {
    /// Returns every candidate in display order.
    fn list_candidates(&self) -> &[CandidateRecord];

    /// Returns every open job.
    fn list_jobs(&self) -> &[JobRecord];
}

/// Candidates and jobs loaded together from a JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Candidate pool in original order.
    #[serde(default)]
    pub candidates: Vec<CandidateRecord>,
    /// Open jobs.
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
}

impl Snapshot {
    /// Reads and validates a snapshot file.
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let contents = fs::read_to_string(path).map_err(|source| RecordError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents, path)
    }

    /// Parses and validates a snapshot from JSON text.
    ///
    /// The `path` parameter is used for error reporting.
    pub fn from_json_str(contents: &str, path: &Path) -> Result<Self, RecordError> {
        let snapshot: Self =
            serde_json::from_str(contents).map_err(|source| RecordError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        snapshot.check_unique_ids(path)?;
        Ok(snapshot)
    }

    /// Looks up a candidate by id.
    pub fn candidate(&self, id: &str) -> Option<&CandidateRecord> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// Looks up a job by id.
    pub fn job(&self, id: &str) -> Option<&JobRecord> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Rejects snapshots where two candidates or two jobs share an id.
    fn check_unique_ids(&self, path: &Path) -> Result<(), RecordError> {
        if let Some(id) = first_duplicate(self.candidates.iter().map(|c| c.id.as_str())) {
            return Err(RecordError::DuplicateCandidate {
                id,
                path: PathBuf::from(path),
            });
        }
        if let Some(id) = first_duplicate(self.jobs.iter().map(|j| j.id.as_str())) {
            return Err(RecordError::DuplicateJob {
                id,
                path: PathBuf::from(path),
            });
        }
        Ok(())
    }
}

impl CandidateSource for Snapshot {
    fn list_candidates(&self) -> &[CandidateRecord] {
        &self.candidates
    }

    fn list_jobs(&self) -> &[JobRecord] {
        &self.jobs
    }
}

/// Returns the first id that has already been seen.
fn first_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Some(id.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const SAMPLE: &str = r#"{
        "candidates": [
            {"id": "c1", "name": "Ann Lee", "title": "Senior Engineer", "skills": ["Python"], "location": "Remote"},
            {"id": "c2", "name": "Bo Ray", "title": "Backend Engineer", "skills": ["Go", "SQL"], "location": "Austin"}
        ],
        "jobs": [
            {"id": "j1", "title": "Senior Product Manager", "location": "Remote"}
        ]
    }"#;

    #[test]
    fn parses_sample() {
        let snapshot = Snapshot::from_json_str(SAMPLE, Path::new("sample.json")).unwrap();
        assert_eq!(snapshot.list_candidates().len(), 2);
        assert_eq!(snapshot.list_jobs().len(), 1);
        assert_eq!(snapshot.candidate("c2").unwrap().name, "Bo Ray");
        assert_eq!(snapshot.job("j1").unwrap().location, "Remote");
        assert!(snapshot.candidate("missing").is_none());
    }

    #[test]
    fn empty_object_is_empty_snapshot() {
        let snapshot = Snapshot::from_json_str("{}", Path::new("empty.json")).unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn rejects_duplicate_candidates() {
        let json = r#"{"candidates": [{"id": "c1", "name": "A"}, {"id": "c1", "name": "B"}]}"#;
        let err = Snapshot::from_json_str(json, Path::new("dup.json")).unwrap_err();
        assert!(matches!(err, RecordError::DuplicateCandidate { ref id, .. } if id == "c1"));
    }

    #[test]
    fn rejects_duplicate_jobs() {
        let json = r#"{"jobs": [
            {"id": "j1", "title": "A", "location": "Remote"},
            {"id": "j1", "title": "B", "location": "Remote"}
        ]}"#;
        let err = Snapshot::from_json_str(json, Path::new("dup.json")).unwrap_err();
        assert!(matches!(err, RecordError::DuplicateJob { .. }));
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let err = Snapshot::from_json_str("{not json", Path::new("bad.json")).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, SAMPLE).unwrap();

        let snapshot = Snapshot::load(&path).unwrap();
        assert_eq!(snapshot.candidates[0].id, "c1");
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Snapshot::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, RecordError::ReadFile { .. }));
    }
}
