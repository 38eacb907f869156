//! Clap argument definitions for the `scout` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use scout_rank::Mode;

/// Parses a scoring mode from a string.
fn parse_mode(s: &str) -> Result<Mode, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Candidate search - rank candidates against a query and filters")]
pub struct Cli {
    /// Candidate snapshot (JSON); overrides [data] snapshot
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Verbosity level (-v for debug logs, -vv for trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Filter flags shared by commands that run a search.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Filter as dimension=value (repeatable), e.g. -f titles=Engineer -f excludeTitles=Senior
    #[arg(short = 'f', long = "filter", value_name = "DIM=VALUE")]
    pub filters: Vec<String>,

    /// Scoring mode: keyword, semantic, blended [default: from config]
    #[arg(short = 'm', long, value_parser = parse_mode)]
    pub mode: Option<Mode>,
}

/// Arguments for `scout search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words; empty browses all candidates
    pub query: Vec<String>,

    #[command(flatten)]
    /// Filter and mode flags.
    pub filters: FilterArgs,

    /// Start from the search derived from this job
    #[arg(long, value_name = "JOB_ID")]
    pub job: Option<String>,

    /// Maximum results to print, 0 for all [default: from config]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show how every candidate scored instead of the ranked list
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for `scout derive`.
#[derive(Args, Debug, Clone)]
pub struct DeriveCommand {
    /// Job id
    pub job: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `scout submit`.
#[derive(Args, Debug, Clone)]
pub struct SubmitCommand {
    /// Candidate ids to submit
    pub candidates: Vec<String>,

    /// Destination job id
    #[arg(long, value_name = "JOB_ID")]
    pub job: Option<String>,

    /// Also select every candidate this query returns
    #[arg(long, value_name = "QUERY")]
    pub matching: Option<String>,

    #[command(flatten)]
    /// Filters applied to --matching.
    pub filters: FilterArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `scout init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.scout.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `scout` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidates against a query and filters
    #[command(after_help = "\
FILTER DIMENSIONS:
  titles  companies  schools  locations  fundingRounds  likelinessToRespond
  industry  growth  investors  degrees  pastJobTitles  currentTenure
  yearsOfExperience  graduationYear
  excludeTitles  excludeCompanies  excludeDegrees   (reject matches)

  Values match as case-insensitive substrings. Values for one dimension are
  ORed; dimensions are ANDed.

EXAMPLES:
  scout search rust engineer
  scout search -m keyword python -f locations=Austin
  scout search -f titles=Engineer -f excludeTitles=Senior
  scout search --job j1
  scout search --json data pipeline")]
    Search(SearchCommand),

    /// List open jobs
    Jobs,

    /// Show the search derived from a job
    Derive(DeriveCommand),

    /// Submit candidates to a job
    Submit(SubmitCommand),

    /// Initialize scout configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}
