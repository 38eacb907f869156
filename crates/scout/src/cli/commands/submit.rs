//! Implementation of `scout submit`.

use std::{collections::BTreeSet, process::ExitCode};

use scout_rank::{SearchSession, SubmissionSink, SubmitError};
use scout_record::{CandidateSource, Snapshot};

use super::shared::apply_filter_specs;
use crate::cli::{
    args::SubmitCommand,
    context::CommandContext,
    output::{dim, print_json, success},
};

/// Accepts submissions whose job and candidates exist in the snapshot.
struct SnapshotSink<'a> {
    /// Snapshot to check ids against.
    snapshot: &'a Snapshot,
}

impl SubmissionSink for SnapshotSink<'_> {
    fn submit(&mut self, candidate_ids: &[String], job_id: &str) -> Result<(), SubmitError> {
        if self.snapshot.job(job_id).is_none() {
            return Err(SubmitError::Rejected(format!("unknown job '{job_id}'")));
        }
        if let Some(missing) = candidate_ids
            .iter()
            .find(|id| self.snapshot.candidate(id).is_none())
        {
            return Err(SubmitError::Rejected(format!(
                "unknown candidate '{missing}'"
            )));
        }
        Ok(())
    }
}

/// Validates a bulk submission and prints the confirmation.
pub fn run(ctx: &CommandContext, cmd: &SubmitCommand) -> ExitCode {
    let snapshot = match ctx.snapshot() {
        Ok(s) => s,
        Err(code) => return code,
    };
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };
    let mode = match ctx.mode(cmd.filters.mode) {
        Ok(mode) => mode,
        Err(code) => return code,
    };

    let mut session = SearchSession::new(engine, snapshot.list_candidates(), mode);

    if cmd.matching.is_some() || !cmd.filters.filters.is_empty() {
        let draft = session.draft_mut();
        draft.text = cmd.matching.clone().unwrap_or_default();
        if let Err(code) = apply_filter_specs(&mut draft.filters, &cmd.filters.filters) {
            return code;
        }
        session.commit();
        session.toggle_all(true);
    }

    let explicit: BTreeSet<&str> = cmd.candidates.iter().map(String::as_str).collect();
    for id in explicit {
        if !session.selection().contains(id) {
            session.toggle(id);
        }
    }

    let mut sink = SnapshotSink {
        snapshot: &snapshot,
    };
    let confirmation = match session.submit(cmd.job.as_deref(), &mut sink) {
        Ok(confirmation) => confirmation,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_json(&confirmation);
    }

    println!("{}", success(&confirmation.to_string()));
    for id in &confirmation.candidate_ids {
        let name = snapshot.candidate(id).map_or("", |c| c.name.as_str());
        println!("  {id} {}", dim(name));
    }
    ExitCode::SUCCESS
}
