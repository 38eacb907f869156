//! Configuration file parsing.
//!
//! Parses individual `.scout.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Scoring weights section.
    pub scoring: Option<RawScoringSettings>,
    /// Default-policy table: candidate field name -> value used when the field is absent.
    pub defaults: Option<BTreeMap<String, String>>,
    /// Input data section.
    pub data: Option<RawDataSettings>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Scoring mode name.
    pub mode: Option<String>,
    /// Maximum results printed.
    pub limit: Option<usize>,
}

/// Raw scoring settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawScoringSettings {
    /// Bonus added to the keyword score when a location filter matches.
    pub location_bonus: Option<f64>,
    /// Multiplier applied to the semantic score.
    pub semantic_scale: Option<f64>,
    /// Weight of the keyword score in blended mode.
    pub blend_weight: Option<f64>,
}

/// Raw data settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDataSettings {
    /// Snapshot file path, relative to the config file that defines it.
    pub snapshot: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.search.is_none());
        assert!(config.scoring.is_none());
        assert!(config.defaults.is_none());
        assert!(config.data.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
root = true

[search]
mode = "keyword"
limit = 10

[scoring]
location_bonus = 2.0
semantic_scale = 5.0
blend_weight = 0.25

[defaults]
industry = "Fintech"

[data]
snapshot = "./data/candidates.json"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));

        let search = config.search.unwrap();
        assert_eq!(search.mode.as_deref(), Some("keyword"));
        assert_eq!(search.limit, Some(10));

        let scoring = config.scoring.unwrap();
        assert_eq!(scoring.location_bonus, Some(2.0));
        assert_eq!(scoring.semantic_scale, Some(5.0));
        assert_eq!(scoring.blend_weight, Some(0.25));

        let defaults = config.defaults.unwrap();
        assert_eq!(defaults.get("industry").map(String::as_str), Some("Fintech"));

        assert_eq!(
            config.data.unwrap().snapshot.as_deref(),
            Some("./data/candidates.json")
        );
    }

    #[test]
    fn test_parse_partial_section() {
        let config = parse_config_str("[scoring]\nblend_weight = 0.7\n", Path::new("t.toml"))
            .unwrap();
        let scoring = config.scoring.unwrap();
        assert_eq!(scoring.blend_weight, Some(0.7));
        assert!(scoring.location_bonus.is_none());
    }

    #[test]
    fn test_parse_error_includes_path() {
        let err = parse_config_str("[search\n", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        let result = parse_config("[search]\nlimit = \"ten\"\n");
        assert!(result.is_err());
    }
}
