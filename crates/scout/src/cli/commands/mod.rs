//! Command implementations and dispatch.

pub mod config;
pub mod derive;
pub mod init;
pub mod jobs;
pub mod search;
mod shared;
pub mod submit;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Jobs => jobs::run(ctx),
        Commands::Derive(cmd) => derive::run(ctx, &cmd),
        Commands::Submit(cmd) => submit::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
