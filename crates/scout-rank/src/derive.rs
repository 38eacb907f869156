//! Turning a job posting into a search.

use scout_record::JobRecord;
use serde::Serialize;

use crate::filter::{Dimension, FilterSet, contains_ignore_case};

/// Seniority keywords searched for in a job title, with the label each one emits.
pub const SENIORITY_LABELS: [(&str, &str); 4] = [
    ("senior", "Senior"),
    ("lead", "Lead"),
    ("principal", "Principal"),
    ("manager", "Manager"),
];

/// Location value that never becomes a location filter.
pub const REMOTE: &str = "Remote";

/// Query text and filters derived from a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSearch {
    /// The job title.
    pub search_text: String,
    /// Location and seniority filters.
    pub filters: FilterSet,
}

/// Derives a search for candidates matching a job.
///
/// The search text is the job title. The job location becomes the only `locations`
/// value unless it is exactly "Remote". Each seniority keyword found in the title adds
/// its label to `titles`, in [`SENIORITY_LABELS`] order.
pub fn derive_filters_from_job(job: &JobRecord) -> DerivedSearch {
    let mut filters = FilterSet::new();
    if job.location != REMOTE {
        filters.add(Dimension::Locations, &job.location);
    }
    for (keyword, label) in SENIORITY_LABELS {
        if contains_ignore_case(&job.title, keyword) {
            filters.add(Dimension::Titles, label);
        }
    }
    DerivedSearch {
        search_text: job.title.clone(),
        filters,
    }
}
