#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Boarding justification narratives and the operational summary.
//!
//! Per-vessel narratives are rendered for the top of the ranked list; the
//! [`summary`] covers every vessel around the patrol regardless of the
//! configured distance filter.

pub mod summary;

use iuu_risk_ranking::Ranking;
use iuu_risk_vessel_models::{RiskLevel, ScoredVessel};
use serde::Serialize;

pub use summary::operational_summary;

/// Separator between reasons in a justification.
pub const REASON_SEPARATOR: &str = "; ";

/// Joins scorer reasons, preserving their order.
#[must_use]
pub fn justification(reasons: &[String]) -> String {
    reasons.join(REASON_SEPARATOR)
}

/// Boarding justification for one ranked vessel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselNarrative {
    pub name: String,
    pub mmsi: String,
    pub imo: String,
    pub flag_state: String,
    pub score: u32,
    pub level: RiskLevel,
    pub distance_nm: f64,
    /// Triggered reasons joined with [`REASON_SEPARATOR`].
    pub justification: String,
    pub recommendation: &'static str,
}

impl From<&ScoredVessel> for VesselNarrative {
    fn from(vessel: &ScoredVessel) -> Self {
        Self {
            name: vessel.record.name.clone(),
            mmsi: vessel.record.mmsi.clone(),
            imo: vessel.record.imo.clone(),
            flag_state: vessel.record.flag_state.clone(),
            score: vessel.score,
            level: vessel.level,
            distance_nm: vessel.distance_nm,
            justification: justification(&vessel.reasons),
            recommendation: vessel.level.recommendation(),
        }
    }
}

impl std::fmt::Display for VesselNarrative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} (MMSI: {}, IMO: {}, Flag: {})",
            self.name, self.mmsi, self.imo, self.flag_state
        )?;
        writeln!(
            f,
            "  Risk Score: {} ({}), {:.2} nm from patrol",
            self.score, self.level, self.distance_nm
        )?;
        writeln!(f, "  Reason: {}", self.justification)?;
        write!(f, "  Recommendation: {}", self.recommendation)
    }
}

/// Narratives for the first `n` ranked vessels. Empty when the ranking is.
#[must_use]
pub fn narrate_top(ranking: &Ranking, n: usize) -> Vec<VesselNarrative> {
    ranking.top(n).iter().map(VesselNarrative::from).collect()
}

#[cfg(test)]
mod tests {
    use iuu_risk_ranking::filter_and_rank;
    use iuu_risk_vessel_models::VesselRecord;

    use super::*;

    fn scored(name: &str, score: u32, reasons: &[&str]) -> ScoredVessel {
        ScoredVessel {
            record: VesselRecord {
                name: name.to_owned(),
                mmsi: "412000001".to_owned(),
                imo: "9000001".to_owned(),
                flag_state: "Panama".to_owned(),
                latitude: 0.0,
                longitude: 0.0,
                days_since_port: 45.0,
                speed_knots: 0.5,
                loitering_hours: 5.0,
                ais_gap_hours: 10.0,
            },
            score,
            level: RiskLevel::from_score(score),
            distance_nm: 12.3456,
            reasons: reasons.iter().map(|r| (*r).to_owned()).collect(),
        }
    }

    #[test]
    fn justification_joins_in_order() {
        let reasons = vec![
            "Flagged to higher-risk state (Panama)".to_owned(),
            "Extended time at sea: 45 days since last port".to_owned(),
            "Very low speed: 0.5 knots".to_owned(),
        ];
        assert_eq!(
            justification(&reasons),
            "Flagged to higher-risk state (Panama); Extended time at sea: 45 days since last port; Very low speed: 0.5 knots"
        );
    }

    #[test]
    fn narrative_block_renders() {
        let narrative = VesselNarrative::from(&scored(
            "Sea Wolf",
            50,
            &["Flagged to higher-risk state (Panama)", "Very low speed: 0.5 knots"],
        ));
        assert_eq!(
            narrative.to_string(),
            "Sea Wolf (MMSI: 412000001, IMO: 9000001, Flag: Panama)\n\
             \x20 Risk Score: 50 (Medium), 12.35 nm from patrol\n\
             \x20 Reason: Flagged to higher-risk state (Panama); Very low speed: 0.5 knots\n\
             \x20 Recommendation: Monitor real-time movement via AIS."
        );
    }

    #[test]
    fn narrates_only_top_n() {
        let vessels = vec![
            scored("a", 10, &["x"]),
            scored("b", 90, &["y"]),
            scored("c", 40, &["z"]),
            scored("d", 60, &["w"]),
        ];
        let ranking = filter_and_rank(&vessels, 100.0);
        let narratives = narrate_top(&ranking, 3);
        let names: Vec<&str> = narratives.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "c"]);
        assert_eq!(narratives[0].level, RiskLevel::Critical);
    }

    #[test]
    fn empty_ranking_has_no_narratives() {
        let ranking = filter_and_rank(&[scored("far", 90, &["x"])], 1.0);
        assert!(narrate_top(&ranking, 3).is_empty());
    }
}
