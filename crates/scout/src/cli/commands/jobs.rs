//! Implementation of `scout jobs`.

use std::process::ExitCode;

use scout_record::CandidateSource;

use crate::cli::{
    context::CommandContext,
    output::{dim, jobs_table},
};

/// Lists open jobs in a table.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let snapshot = match ctx.snapshot() {
        Ok(s) => s,
        Err(code) => return code,
    };

    let jobs = snapshot.list_jobs();
    if jobs.is_empty() {
        println!("{}", dim("No open jobs."));
        return ExitCode::SUCCESS;
    }

    println!("{}", jobs_table(jobs));
    ExitCode::SUCCESS
}
