//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, DataSettings, DefaultsSettings, ScoringSettings, SearchSettings,
    parse::{RawConfig, RawScoringSettings, RawSearchSettings},
    resolve::resolve_data_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to
/// CWD), lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Default-policy entries: merged per key, first definition wins; an empty value
///   removes the entry
/// - Snapshot path: first definition wins, resolved relative to the file defining it
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let search = merge_search_settings(configs);
    let scoring = merge_scoring_settings(configs);
    let defaults = merge_defaults(configs);
    let data = merge_data(configs)?;
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Ok(Config {
        search,
        scoring,
        defaults,
        data,
        config_root,
    })
}

/// Merges search settings, taking first defined value for each field.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(ref v) = raw.mode {
        result.mode = v.clone();
    }
    if let Some(v) = raw.limit {
        result.limit = v;
    }
}

/// Merges scoring weights.
fn merge_scoring_settings(configs: &[ParsedConfig]) -> ScoringSettings {
    let mut result = ScoringSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref scoring) = parsed.config.scoring {
            apply_raw_scoring(&mut result, scoring);
        }
    }

    result
}

/// Applies raw scoring settings to result.
fn apply_raw_scoring(result: &mut ScoringSettings, raw: &RawScoringSettings) {
    if let Some(v) = raw.location_bonus {
        result.location_bonus = v;
    }
    if let Some(v) = raw.semantic_scale {
        result.semantic_scale = v;
    }
    if let Some(v) = raw.blend_weight {
        result.blend_weight = v;
    }
}

/// Merges the default-policy table on top of the built-in entries.
fn merge_defaults(configs: &[ParsedConfig]) -> DefaultsSettings {
    let mut result = DefaultsSettings::default();

    for parsed in configs.iter().rev() {
        let Some(ref table) = parsed.config.defaults else {
            continue;
        };
        for (key, value) in table {
            if value.trim().is_empty() {
                result.values.remove(key);
            } else {
                result.values.insert(key.clone(), value.clone());
            }
        }
    }

    result
}

/// Picks the snapshot path from the highest-precedence config that defines one.
fn merge_data(configs: &[ParsedConfig]) -> Result<DataSettings, ConfigError> {
    for parsed in configs {
        let Some(snapshot) = parsed
            .config
            .data
            .as_ref()
            .and_then(|d| d.snapshot.as_deref())
        else {
            continue;
        };
        let config_dir = parsed.path.parent().unwrap_or_else(|| Path::new("."));
        return Ok(DataSettings {
            snapshot: Some(resolve_data_path(snapshot, config_dir)?),
        });
    }

    Ok(DataSettings::default())
}
