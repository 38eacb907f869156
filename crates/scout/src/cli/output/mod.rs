//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use scout_highlight::render_spans;
pub use scout_highlight::{dim, error, header, subheader, success, warning};
use scout_rank::{FilterSet, Mode, ScoredResult};
use scout_record::JobRecord;
use serde::Serialize;

/// JSON output for `scout search`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSearchOutput<'s, 'a> {
    /// Applied query text.
    query: &'s str,
    /// Applied scoring mode.
    mode: Mode,
    /// Applied filters.
    filters: &'s FilterSet,
    /// Matches before the limit was applied.
    total_matches: usize,
    /// Printed results.
    results: &'s [ScoredResult<'a>],
}

/// Serializes a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Truncates results to `limit`, where 0 means unlimited.
pub fn limited<'s, 'a>(results: &'s [ScoredResult<'a>], limit: usize) -> &'s [ScoredResult<'a>] {
    if limit == 0 || limit >= results.len() {
        results
    } else {
        &results[..limit]
    }
}

/// Prints search results as JSON.
pub fn output_json_results(
    query: &str,
    mode: Mode,
    filters: &FilterSet,
    results: &[ScoredResult<'_>],
    limit: usize,
) -> ExitCode {
    print_json(&JsonSearchOutput {
        query,
        mode,
        filters,
        total_matches: results.len(),
        results: limited(results, limit),
    })
}

/// Prints ranked results for the terminal.
pub fn output_results(results: &[ScoredResult<'_>], limit: usize, verbose: u8) {
    if results.is_empty() {
        println!("{}", dim("No matching candidates."));
        return;
    }

    let shown = limited(results, limit);
    for (rank, result) in shown.iter().enumerate() {
        print_result(rank + 1, result, verbose);
    }

    if shown.len() < results.len() {
        println!(
            "{}",
            dim(&format!(
                "showing {} of {} matches (use -n 0 for all)",
                shown.len(),
                results.len()
            ))
        );
    }
}

/// Prints one ranked result.
fn print_result(rank: usize, result: &ScoredResult<'_>, verbose: u8) {
    let candidate = result.candidate;
    let highlights = &result.highlights;

    let mut line = format!("{rank:>3}. {}", render_spans(&highlights.name));
    if candidate.title.is_some() {
        line.push_str(" - ");
        line.push_str(&render_spans(&highlights.title));
    }
    println!("{line}  {}", dim(&format!("[{}] {:.3}", candidate.id, result.score)));

    let details: Vec<&str> = [candidate.company.as_deref(), candidate.location.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !details.is_empty() {
        println!("     {}", dim(&details.join(" · ")));
    }

    if !highlights.skills.is_empty() {
        let skills: Vec<String> = highlights
            .skills
            .iter()
            .map(|spans| render_spans(spans))
            .collect();
        println!("     {}", skills.join(", "));
    }

    if verbose > 0 {
        let matched = if result.matched_terms.is_empty() {
            "-".to_string()
        } else {
            result.matched_terms.join(" ")
        };
        println!(
            "     {}",
            dim(&format!(
                "keyword {:.3}  semantic {:.3}  matched: {matched}",
                result.keyword_score, result.semantic_score
            ))
        );
    }
}

/// Prints active filters, one dimension per line.
pub fn output_filters(filters: &FilterSet, indent: &str) {
    if !filters.has_active() {
        println!("{indent}{}", dim("(none)"));
        return;
    }
    for (dimension, values) in filters.active() {
        println!("{indent}{dimension}: {}", values.join(", "));
    }
}

/// Builds a table of jobs.
pub fn jobs_table(jobs: &[JobRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Id", "Title", "Location", "Company", "Department"]);
    for job in jobs {
        table.add_row(vec![
            Cell::new(&job.id),
            Cell::new(&job.title),
            Cell::new(&job.location),
            Cell::new(job.company.as_deref().unwrap_or("-")),
            Cell::new(job.department.as_deref().unwrap_or("-")),
        ]);
    }
    table
}
