//! Shared helpers for command implementations.

use std::process::ExitCode;

use scout_rank::FilterSet;
use scout_record::{JobRecord, Snapshot};

/// Adds `dimension=value` filter specs, exiting on the first bad one.
pub fn apply_filter_specs(filters: &mut FilterSet, specs: &[String]) -> Result<(), ExitCode> {
    for spec in specs {
        filters.add_spec(spec).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
    }
    Ok(())
}

/// Looks up a job, exiting with an error when it is unknown.
pub fn find_job<'a>(snapshot: &'a Snapshot, id: &str) -> Result<&'a JobRecord, ExitCode> {
    snapshot.job(id).ok_or_else(|| {
        eprintln!("error: unknown job '{id}'");
        eprintln!("run 'scout jobs' to list open jobs");
        ExitCode::FAILURE
    })
}
