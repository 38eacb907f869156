//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use scout_config::Config;
use scout_rank::{DefaultPolicy, Mode, ScoringParams, SearchEngine};
use scout_record::Snapshot;
use tracing::debug;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Verbosity from `-v`.
    pub verbose: u8,
    /// Snapshot path given with `--data`, relative to `cwd`.
    data_override: Option<PathBuf>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(data_override: Option<PathBuf>, verbose: u8) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            verbose,
            data_override,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which must work even when an existing config file is invalid.
    pub fn load_cwd_only(verbose: u8) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            verbose,
            data_override: None,
        })
    }

    /// The snapshot path: `--data` first, then `[data] snapshot`.
    pub fn snapshot_path(&self) -> Option<PathBuf> {
        match &self.data_override {
            Some(path) => Some(self.cwd.join(path)),
            None => self.config.data.snapshot.clone(),
        }
    }

    /// Loads the candidate snapshot or exits with an error.
    pub fn snapshot(&self) -> Result<Snapshot, ExitCode> {
        let Some(path) = self.snapshot_path() else {
            eprintln!("error: no snapshot configured");
            eprintln!("pass --data FILE or set [data] snapshot in .scout.toml");
            return Err(ExitCode::FAILURE);
        };
        let snapshot = Snapshot::load(&path).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
        debug!(
            path = %path.display(),
            candidates = snapshot.candidates.len(),
            jobs = snapshot.jobs.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Builds the ranker from `[scoring]` and `[defaults]`.
    pub fn engine(&self) -> Result<SearchEngine, ExitCode> {
        let policy = DefaultPolicy::from_table(&self.config.defaults.values).map_err(|e| {
            eprintln!("error: invalid [defaults] table: {e}");
            ExitCode::FAILURE
        })?;
        Ok(SearchEngine::new(
            ScoringParams::from(&self.config.scoring),
            policy,
        ))
    }

    /// The scoring mode: the flag if given, otherwise `[search] mode`.
    pub fn mode(&self, flag: Option<Mode>) -> Result<Mode, ExitCode> {
        if let Some(mode) = flag {
            return Ok(mode);
        }
        self.config.search.mode.parse().map_err(|e| {
            eprintln!("error: invalid [search] mode: {e}");
            ExitCode::FAILURE
        })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
