//! Ordered table of behavioural risk indicators.
//!
//! Each [`Indicator`] pairs a predicate with the weight it contributes and
//! the reason text it produces. The scorer walks [`INDICATORS`] in order, so
//! adding a new indicator means adding a table entry and a weight, not
//! touching control flow.

use iuu_risk_scoring_models::{RiskWeights, ScoringConfig};
use iuu_risk_vessel_models::VesselRecord;
use strum_macros::{AsRefStr, Display, EnumString};

/// Identifies an indicator in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum IndicatorKind {
    HighRiskFlag,
    DaysSincePort,
    Loitering,
    AisGap,
    LowSpeed,
}

/// A single weighted predicate with its reason template.
pub struct Indicator {
    pub kind: IndicatorKind,
    weight: fn(&RiskWeights) -> u32,
    triggered: fn(&VesselRecord, &ScoringConfig) -> bool,
    reason: fn(&VesselRecord) -> String,
}

impl Indicator {
    /// Weight this indicator contributes under `weights`.
    #[must_use]
    pub fn weight(&self, weights: &RiskWeights) -> u32 {
        (self.weight)(weights)
    }

    /// Whether the indicator holds for `record`.
    #[must_use]
    pub fn is_triggered(&self, record: &VesselRecord, config: &ScoringConfig) -> bool {
        (self.triggered)(record, config)
    }

    /// Human-readable justification for a triggered indicator.
    #[must_use]
    pub fn reason(&self, record: &VesselRecord) -> String {
        (self.reason)(record)
    }
}

/// All indicators in evaluation order. Reason lists follow this order.
pub const INDICATORS: &[Indicator] = &[
    Indicator {
        kind: IndicatorKind::HighRiskFlag,
        weight: |w| w.flag,
        triggered: |r, c| c.is_high_risk_flag(&r.flag_state),
        reason: |r| format!("Flagged to higher-risk state ({})", r.flag_state),
    },
    Indicator {
        kind: IndicatorKind::DaysSincePort,
        weight: |w| w.days_since_port,
        triggered: |r, c| r.days_since_port > c.thresholds.days_since_port,
        reason: |r| {
            format!(
                "Extended time at sea: {} days since last port",
                r.days_since_port
            )
        },
    },
    Indicator {
        kind: IndicatorKind::Loitering,
        weight: |w| w.loitering,
        triggered: |r, c| r.loitering_hours > c.thresholds.loitering_hours,
        reason: |r| format!("Significant loitering: {} hours", r.loitering_hours),
    },
    Indicator {
        kind: IndicatorKind::AisGap,
        weight: |w| w.ais_gap,
        triggered: |r, c| r.ais_gap_hours > c.thresholds.ais_gap_hours,
        reason: |r| format!("Long AIS silence: {} hours offline", r.ais_gap_hours),
    },
    Indicator {
        kind: IndicatorKind::LowSpeed,
        weight: |w| w.low_speed,
        triggered: |r, c| r.speed_knots < c.thresholds.speed_knots,
        reason: |r| format!("Very low speed: {} knots", r.speed_knots),
    },
];
