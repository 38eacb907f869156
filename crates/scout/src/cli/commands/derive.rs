//! Implementation of `scout derive`.

use std::process::ExitCode;

use scout_rank::derive_filters_from_job;

use super::shared::find_job;
use crate::cli::{
    args::DeriveCommand,
    context::CommandContext,
    output::{header, output_filters, print_json, subheader},
};

/// Prints the query text and filters derived from a job.
pub fn run(ctx: &CommandContext, cmd: &DeriveCommand) -> ExitCode {
    let snapshot = match ctx.snapshot() {
        Ok(s) => s,
        Err(code) => return code,
    };
    let job = match find_job(&snapshot, &cmd.job) {
        Ok(job) => job,
        Err(code) => return code,
    };

    let derived = derive_filters_from_job(job);
    if cmd.json {
        return print_json(&derived);
    }

    println!("{}", header(&format!("{} ({})", job.title, job.location)));
    println!();
    println!("{}", subheader("Search text:"));
    println!("  {}", derived.search_text);
    println!();
    println!("{}", subheader("Filters:"));
    output_filters(&derived.filters, "  ");
    ExitCode::SUCCESS
}
