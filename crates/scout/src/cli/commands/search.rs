//! Implementation of `scout search`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use scout_rank::{FilterSet, Query, ScoredResult, SearchEngine, SearchSession};
use scout_record::{CandidateRecord, CandidateSource};
use scout_text::tokenize;

use super::shared::{apply_filter_specs, find_job};
use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{
        dim, error, output_filters, output_json_results, output_results, subheader, success,
    },
};

/// Ranks the candidate pool and prints the results.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
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

    let mut session = SearchSession::new(engine.clone(), snapshot.list_candidates(), mode);

    if let Some(job_id) = &cmd.job {
        let job = match find_job(&snapshot, job_id) {
            Ok(job) => job,
            Err(code) => return code,
        };
        session.apply_job(job);
    }

    let text = cmd.query.join(" ");
    let draft = session.draft_mut();
    if !text.trim().is_empty() {
        draft.text = text;
    }
    if let Err(code) = apply_filter_specs(&mut draft.filters, &cmd.filters.filters) {
        return code;
    }
    if session.is_dirty() {
        session.commit();
    }

    let applied = session.applied();
    if cmd.explain {
        explain(
            &engine,
            applied.query(),
            applied.filters(),
            snapshot.list_candidates(),
            session.results(),
        );
        return ExitCode::SUCCESS;
    }

    let limit = cmd.limit.unwrap_or(ctx.config.search.limit);
    if cmd.json {
        return output_json_results(
            &applied.query().text,
            applied.query().mode,
            applied.filters(),
            session.results(),
            limit,
        );
    }

    output_results(session.results(), limit, ctx.verbose);
    ExitCode::SUCCESS
}

/// Prints the query analysis and how every candidate fared.
fn explain(
    engine: &SearchEngine,
    query: &Query,
    filters: &FilterSet,
    candidates: &[CandidateRecord],
    results: &[ScoredResult<'_>],
) {
    println!("{}", subheader("Query:"));
    println!("  {:?} ({} mode)", query.text, query.mode);
    println!();

    println!("{}", subheader("Terms:"));
    let terms = tokenize(&query.text);
    if terms.is_empty() {
        println!("  {}", dim("(none)"));
    } else {
        println!("  {}", terms.join(" "));
    }
    println!();

    println!("{}", subheader("Filters:"));
    output_filters(filters, "  ");
    println!();

    println!("{}", subheader("Candidates:"));
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Id", "Name", "Keyword", "Semantic", "Score", "Outcome"]);
    for candidate in candidates {
        let breakdown = engine.explain(query, filters, candidate);
        let rank = results.iter().position(|r| r.candidate.id == candidate.id);
        let outcome = match (rank, breakdown.failed) {
            (Some(rank), _) => success(&format!("rank {}", rank + 1)),
            (None, Some(dimension)) => error(&format!("filtered by {dimension}")),
            (None, None) => dim("no match"),
        };
        table.add_row(vec![
            Cell::new(&candidate.id),
            Cell::new(&candidate.name),
            Cell::new(format!("{:.3}", breakdown.keyword)),
            Cell::new(format!("{:.3}", breakdown.semantic)),
            Cell::new(format!("{:.3}", breakdown.combined)),
            Cell::new(outcome),
        ]);
    }
    println!("{table}");
}
