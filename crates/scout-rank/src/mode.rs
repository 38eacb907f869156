//! Scoring modes and the score combiner.

use std::{fmt, str};

use scout_config::{
    DEFAULT_BLEND_WEIGHT, DEFAULT_LOCATION_BONUS, DEFAULT_SEMANTIC_SCALE, ScoringSettings,
};
use serde::Serialize;

/// How keyword and semantic scores are turned into the ranking score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Rank by keyword overlap only.
    Keyword,
    /// Rank by term-vector similarity only.
    Semantic,
    /// Weighted mix of both.
    #[default]
    Blended,
}

impl Mode {
    /// All modes, in display order.
    pub const ALL: [Self; 3] = [Self::Keyword, Self::Semantic, Self::Blended];

    /// Returns a brief description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Keyword => "Distinct query terms found in the profile, plus location bonus",
            Self::Semantic => "Cosine similarity of term-frequency vectors",
            Self::Blended => "Weighted mix of keyword and scaled semantic scores",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword => write!(f, "keyword"),
            Self::Semantic => write!(f, "semantic"),
            Self::Blended => write!(f, "blended"),
        }
    }
}

impl str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keyword" | "keyword-only" | "keywords" => Ok(Self::Keyword),
            "semantic" | "semantic-only" => Ok(Self::Semantic),
            "blended" | "blend" => Ok(Self::Blended),
            _ => Err(format!(
                "unknown mode '{s}', expected one of: keyword, semantic, blended"
            )),
        }
    }
}

/// Weights used when scoring and combining.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    /// Added to the keyword score when a location filter matches.
    pub location_bonus: f64,
    /// Multiplier applied to the semantic score.
    pub semantic_scale: f64,
    /// Keyword share of the blended score.
    pub blend_weight: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            location_bonus: DEFAULT_LOCATION_BONUS,
            semantic_scale: DEFAULT_SEMANTIC_SCALE,
            blend_weight: DEFAULT_BLEND_WEIGHT,
        }
    }
}

impl From<&ScoringSettings> for ScoringParams {
    fn from(settings: &ScoringSettings) -> Self {
        Self {
            location_bonus: settings.location_bonus,
            semantic_scale: settings.semantic_scale,
            blend_weight: settings.blend_weight,
        }
    }
}

impl ScoringParams {
    /// Combines a keyword and a semantic score for `mode`, rounded to 3 decimals.
    pub fn combine(&self, keyword: f64, semantic: f64, mode: Mode) -> f64 {
        let scaled = semantic * self.semantic_scale;
        let raw = match mode {
            Mode::Keyword => keyword,
            Mode::Semantic => scaled,
            Mode::Blended => keyword * self.blend_weight + scaled * (1.0 - self.blend_weight),
        };
        round3(raw)
    }
}

/// Combines scores with the default weights.
pub fn combine(keyword: f64, semantic: f64, mode: Mode) -> f64 {
    ScoringParams::default().combine(keyword, semantic, mode)
}

/// Rounds to 3 decimal places.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
