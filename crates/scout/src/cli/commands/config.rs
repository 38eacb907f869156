//! Implementation of `scout config`.

use std::process::ExitCode;

use scout_highlight::Highlighter;

use crate::cli::{context::CommandContext, output::warning};

/// Shows effective configuration settings and any configuration warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    let toml = match config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let highlighter = Highlighter::new();
    print!("{}", highlighter.highlight_toml(&toml));

    for w in config.validate() {
        eprintln!("{}", warning(&format!("warning: {w}")));
    }
    ExitCode::SUCCESS
}
