#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Scoring weights, thresholds, and run configuration.
//!
//! A [`RunConfig`] is loaded once per run (from TOML or defaults), validated,
//! and then passed by shared reference into every stage. Nothing in the
//! engine mutates it.

use std::path::Path;

use iuu_risk_vessel_models::PatrolAsset;
use serde::{Deserialize, Serialize};

/// Default configuration embedded at compile time.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the config file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// TOML parse error.
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is outside its allowed range.
    #[error("Invalid config value for {field}: {message}")]
    Invalid {
        /// Dotted name of the offending field.
        field: &'static str,
        /// Description of what went wrong.
        message: String,
    },
}

/// Weight added to the score when each indicator triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeights {
    /// Flag state is on the high-risk list.
    pub flag: u32,
    /// Extended time since last port call.
    pub days_since_port: u32,
    /// Significant loitering.
    pub loitering: u32,
    /// Long AIS silence.
    pub ais_gap: u32,
    /// Very low speed.
    pub low_speed: u32,
}

impl RiskWeights {
    /// Highest score a vessel can reach under these weights.
    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.flag
            .saturating_add(self.days_since_port)
            .saturating_add(self.loitering)
            .saturating_add(self.ais_gap)
            .saturating_add(self.low_speed)
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            flag: 25,
            days_since_port: 15,
            loitering: 20,
            ais_gap: 20,
            low_speed: 10,
        }
    }
}

/// Trigger thresholds for the behavioural indicators.
///
/// `speed_knots` triggers when the vessel is *below* it; every other
/// threshold triggers when the vessel is strictly *above* it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub days_since_port: f64,
    pub loitering_hours: f64,
    pub ais_gap_hours: f64,
    pub speed_knots: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            days_since_port: 30.0,
            loitering_hours: 12.0,
            ais_gap_hours: 24.0,
            speed_knots: 2.0,
        }
    }
}

/// Everything the risk scorer needs to evaluate one vessel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Flag states considered higher risk. Membership test only; order is
    /// preserved for display.
    pub high_risk_flags: Vec<String>,
    pub weights: RiskWeights,
    pub thresholds: RiskThresholds,
}

impl ScoringConfig {
    /// Whether `flag_state` is on the high-risk list (exact match).
    #[must_use]
    pub fn is_high_risk_flag(&self, flag_state: &str) -> bool {
        self.high_risk_flags.iter().any(|f| f == flag_state)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            high_risk_flags: [
                "Panama",
                "Honduras",
                "Cambodia",
                "Belize",
                "St. Kitts & Nevis",
                "Sierra Leone",
                "Togo",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            weights: RiskWeights::default(),
            thresholds: RiskThresholds::default(),
        }
    }
}

/// Output shaping: distance filter and how many rows/narratives to render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Distance filter radius in nautical miles (inclusive).
    pub range_nm: f64,
    /// Number of top-ranked vessels that get a narrative.
    pub top_n: usize,
    /// Maximum rows in the ranked table.
    pub table_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            range_nm: 100.0,
            top_n: 3,
            table_limit: 10,
        }
    }
}

/// Complete configuration for one prioritization run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub scoring: ScoringConfig,
    pub patrol: PatrolAsset,
    pub output: OutputConfig,
}

impl RunConfig {
    /// Parses and validates a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML is malformed and
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or any error
    /// from [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks every numeric value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.scoring.thresholds;
        for (field, value) in [
            ("scoring.thresholds.days_since_port", thresholds.days_since_port),
            ("scoring.thresholds.loitering_hours", thresholds.loitering_hours),
            ("scoring.thresholds.ais_gap_hours", thresholds.ais_gap_hours),
            ("scoring.thresholds.speed_knots", thresholds.speed_knots),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    message: format!("must be a finite number, got {value}"),
                });
            }
        }

        if !self.output.range_nm.is_finite() || self.output.range_nm < 0.0 {
            return Err(ConfigError::Invalid {
                field: "output.range_nm",
                message: format!(
                    "must be a non-negative distance, got {}",
                    self.output.range_nm
                ),
            });
        }

        if !(-90.0..=90.0).contains(&self.patrol.latitude) {
            return Err(ConfigError::Invalid {
                field: "patrol.latitude",
                message: format!("must be within -90..=90, got {}", self.patrol.latitude),
            });
        }

        if !(-180.0..=180.0).contains(&self.patrol.longitude) {
            return Err(ConfigError::Invalid {
                field: "patrol.longitude",
                message: format!("must be within -180..=180, got {}", self.patrol.longitude),
            });
        }

        if self.scoring.weights.max_score() < iuu_risk_vessel_models::CRITICAL_SCORE {
            log::warn!(
                "Configured weights sum to {}; no vessel can reach the Critical level",
                self.scoring.weights.max_score()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_default_impl() {
        let parsed = RunConfig::from_toml_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed, RunConfig::default());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let parsed = RunConfig::from_toml_str("").unwrap();
        assert_eq!(parsed, RunConfig::default());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let parsed = RunConfig::from_toml_str(
            "[scoring.weights]\nflag = 40\n\n[output]\nrange_nm = 250.0\n",
        )
        .unwrap();
        assert_eq!(parsed.scoring.weights.flag, 40);
        assert_eq!(parsed.scoring.weights.low_speed, 10);
        assert!((parsed.output.range_nm - 250.0).abs() < f64::EPSILON);
        assert_eq!(parsed.output.top_n, 3);
        assert_eq!(parsed.scoring.high_risk_flags.len(), 7);
    }

    #[test]
    fn default_weights_sum_to_ninety() {
        assert_eq!(RiskWeights::default().max_score(), 90);
    }

    #[test]
    fn max_score_saturates() {
        let weights = RiskWeights {
            flag: u32::MAX,
            ..RiskWeights::default()
        };
        assert_eq!(weights.max_score(), u32::MAX);
    }

    #[test]
    fn rejects_negative_weight() {
        assert!(matches!(
            RunConfig::from_toml_str("[scoring.weights]\nflag = -5\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_negative_range() {
        let err = RunConfig::from_toml_str("[output]\nrange_nm = -1.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "output.range_nm",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_finite_threshold() {
        let err =
            RunConfig::from_toml_str("[scoring.thresholds]\nspeed_knots = nan\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "scoring.thresholds.speed_knots",
                ..
            }
        ));
    }

    #[test]
    fn rejects_out_of_range_patrol() {
        let err = RunConfig::from_toml_str("[patrol]\nlatitude = 91.0\nlongitude = 0.0\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "patrol.latitude",
                ..
            }
        ));
    }

    #[test]
    fn zero_range_is_allowed() {
        let parsed = RunConfig::from_toml_str("[output]\nrange_nm = 0.0\n").unwrap();
        assert!(parsed.output.range_nm.abs() < f64::EPSILON);
    }

    #[test]
    fn toml_output_parses_back() {
        let mut config = RunConfig::default();
        config.scoring.high_risk_flags.push("Vanuatu".to_owned());
        config.patrol = PatrolAsset::new(12.5, 140.25);
        let rendered = config.to_toml_string().unwrap();
        assert_eq!(RunConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn flag_membership_is_exact() {
        let config = ScoringConfig::default();
        assert!(config.is_high_risk_flag("Panama"));
        assert!(!config.is_high_risk_flag("panama"));
        assert!(!config.is_high_risk_flag("Liberia"));
    }
}
