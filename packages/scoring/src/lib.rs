#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Weighted rule-based vessel risk scorer.
//!
//! Evaluates the [`indicators::INDICATORS`] table against one vessel and a
//! [`ScoringConfig`], summing the weights of every triggered indicator and
//! collecting their reasons in table order.

pub mod indicators;

use iuu_risk_scoring_models::ScoringConfig;
use iuu_risk_vessel_models::{RiskLevel, VesselRecord};

use crate::indicators::INDICATORS;

/// Reason reported when no indicator triggers.
pub const ROUTINE_REASON: &str = "Routine behavior within configured thresholds.";

/// Result of scoring one vessel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
    /// Triggered reasons in indicator order, or [`ROUTINE_REASON`] alone.
    pub reasons: Vec<String>,
}

/// Scores a single vessel against `config`.
///
/// The score is always within `0..=config.weights.max_score()`.
#[must_use]
pub fn score_vessel(record: &VesselRecord, config: &ScoringConfig) -> RiskAssessment {
    let mut score = 0u32;
    let mut reasons = Vec::new();

    for indicator in INDICATORS {
        if indicator.is_triggered(record, config) {
            score = score.saturating_add(indicator.weight(&config.weights));
            reasons.push(indicator.reason(record));
        }
    }

    if reasons.is_empty() {
        reasons.push(ROUTINE_REASON.to_owned());
    }

    log::trace!(
        "Scored {} (MMSI {}): {score} from {} reason(s)",
        record.name,
        record.mmsi,
        reasons.len()
    );

    RiskAssessment {
        score,
        level: RiskLevel::from_score(score),
        reasons,
    }
}
