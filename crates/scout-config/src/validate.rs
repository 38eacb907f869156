//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// No snapshot path is configured.
    NoSnapshotConfigured,
    /// The configured snapshot file does not exist.
    SnapshotMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The blend weight is outside `[0, 1]`.
    BlendWeightOutOfRange {
        /// Configured weight.
        value: f64,
    },
    /// A scoring weight that must not be negative is negative.
    NegativeWeight {
        /// Setting name.
        name: &'static str,
        /// Configured value.
        value: f64,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSnapshotConfigured => {
                write!(f, "no snapshot configured; pass --data or set [data] snapshot")
            }
            Self::SnapshotMissing { path } => {
                write!(f, "snapshot file does not exist: {path}")
            }
            Self::BlendWeightOutOfRange { value } => {
                write!(f, "blend_weight {value} is outside 0.0-1.0")
            }
            Self::NegativeWeight { name, value } => {
                write!(f, "{name} {value} is negative")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - A missing or nonexistent snapshot file
/// - A blend weight outside `[0, 1]`
/// - Negative location bonus or semantic scale
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    match &config.data.snapshot {
        None => warnings.push(ConfigWarning::NoSnapshotConfigured),
        Some(path) if !path.is_file() => warnings.push(ConfigWarning::SnapshotMissing {
            path: path.display().to_string(),
        }),
        Some(_) => {}
    }

    let scoring = &config.scoring;
    if !(0.0..=1.0).contains(&scoring.blend_weight) {
        warnings.push(ConfigWarning::BlendWeightOutOfRange {
            value: scoring.blend_weight,
        });
    }
    for (name, value) in [
        ("location_bonus", scoring.location_bonus),
        ("semantic_scale", scoring.semantic_scale),
    ] {
        if value < 0.0 {
            warnings.push(ConfigWarning::NegativeWeight { name, value });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::*;
    use crate::{DataSettings, ScoringSettings};

    #[test]
    fn test_validate_default_config() {
        let warnings = Config::default().validate();
        assert_eq!(warnings, vec![ConfigWarning::NoSnapshotConfigured]);
    }

    #[test]
    fn test_validate_snapshot_missing() {
        let config = Config {
            data: DataSettings {
                snapshot: Some(PathBuf::from("/nonexistent/path/12345.json")),
            },
            ..Default::default()
        };

        let warnings = config.validate();
        assert!(
            warnings
                .iter()
                .any(|w| matches!(w, ConfigWarning::SnapshotMissing { .. }))
        );
    }

    #[test]
    fn test_validate_snapshot_present() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("pool.json");
        fs::write(&path, "{}").unwrap();

        let config = Config {
            data: DataSettings {
                snapshot: Some(path),
            },
            ..Default::default()
        };

        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_weights() {
        let config = Config {
            scoring: ScoringSettings {
                location_bonus: -1.0,
                semantic_scale: 10.0,
                blend_weight: 1.5,
            },
            ..Default::default()
        };

        let warnings = config.validate();
        assert!(warnings.contains(&ConfigWarning::BlendWeightOutOfRange { value: 1.5 }));
        assert!(warnings.contains(&ConfigWarning::NegativeWeight {
            name: "location_bonus",
            value: -1.0
        }));
    }

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::SnapshotMissing {
            path: "/some/path.json".into(),
        };
        assert_eq!(
            warning.to_string(),
            "snapshot file does not exist: /some/path.json"
        );
        assert_eq!(
            ConfigWarning::BlendWeightOutOfRange { value: 2.0 }.to_string(),
            "blend_weight 2 is outside 0.0-1.0"
        );
    }
}
