//! Configuration system for scout.
//!
//! scout uses TOML configuration files named `.scout.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.scout.toml` files found, then loading `~/.scout.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawDataSettings, RawScoringSettings, RawSearchSettings, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_data_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default scoring mode name.
pub const DEFAULT_MODE: &str = "blended";
/// Default maximum number of results printed.
pub const DEFAULT_LIMIT: usize = 25;
/// Default bonus added to the keyword score when a location filter matches.
pub const DEFAULT_LOCATION_BONUS: f64 = 1.5;
/// Default multiplier that lifts the semantic score into the keyword score's range.
pub const DEFAULT_SEMANTIC_SCALE: f64 = 10.0;
/// Default weight of the keyword component in blended mode.
pub const DEFAULT_BLEND_WEIGHT: f64 = 0.5;

/// Built-in default-policy entries: values assumed for candidate fields the source left
/// empty. Pending product confirmation; override or blank them in `[defaults]`.
pub const DEFAULT_POLICY: &[(&str, &str)] = &[
    ("industry", "Technology"),
    ("likeliness_to_respond", "Medium"),
];

/// Top-level merged configuration for scout.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Search settings.
    pub search: SearchSettings,
    /// Scoring weights.
    pub scoring: ScoringSettings,
    /// Default-policy table for absent candidate fields.
    pub defaults: DefaultsSettings,
    /// Input data settings.
    pub data: DataSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.scout.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            search: &self.search,
            scoring: &self.scoring,
            defaults: &self.defaults.values,
            data: &self.data,
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// Search settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Scoring mode name: `keyword`, `semantic` or `blended`.
    pub mode: String,
    /// Maximum results printed (0 = unlimited).
    pub limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Scoring weights.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringSettings {
    /// Bonus added to the keyword score when a location filter matches.
    pub location_bonus: f64,
    /// Multiplier applied to the semantic score before combining.
    pub semantic_scale: f64,
    /// Weight of the keyword component in blended mode; the semantic side gets the rest.
    pub blend_weight: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            location_bonus: DEFAULT_LOCATION_BONUS,
            semantic_scale: DEFAULT_SEMANTIC_SCALE,
            blend_weight: DEFAULT_BLEND_WEIGHT,
        }
    }
}

/// Default-policy table: candidate field name to the value assumed when it is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultsSettings {
    /// Field name to default value.
    pub values: BTreeMap<String, String>,
}

impl Default for DefaultsSettings {
    fn default() -> Self {
        Self {
            values: DEFAULT_POLICY
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

/// Input data settings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DataSettings {
    /// Resolved snapshot path, if one is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<PathBuf>,
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Search settings.
    search: &'a SearchSettings,
    /// Scoring weights.
    scoring: &'a ScoringSettings,
    /// Default-policy table (ordered for deterministic output).
    defaults: &'a BTreeMap<String, String>,
    /// Input data settings.
    data: &'a DataSettings,
}
