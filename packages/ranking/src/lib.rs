#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Proximity filter and stable score ranking.
//!
//! Vessels arrive with their distance from the patrol already computed.
//! Filtering keeps everything within the radius (inclusive) and ranking is a
//! stable descending sort on score, so ties keep their input order.

use std::borrow::Borrow;

use iuu_risk_vessel_models::ScoredVessel;
use serde::Serialize;

/// Filtering left no vessels. Not an error: callers should suggest widening
/// the distance filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyResultNotice {
    /// The distance filter that was active, in nautical miles.
    pub range_nm: f64,
}

impl std::fmt::Display for EmptyResultNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No vessels found within {} nm of the patrol position. Try widening the distance filter.",
            self.range_nm
        )
    }
}

/// Outcome of filtering and ranking a vessel collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Ranking {
    /// At least one vessel is within range, highest score first.
    Ranked {
        /// Ranked vessels.
        vessels: Vec<ScoredVessel>,
    },
    /// No vessel is within range.
    Empty(EmptyResultNotice),
}

impl Ranking {
    /// The ranked vessels, or an empty slice.
    #[must_use]
    pub fn vessels(&self) -> &[ScoredVessel] {
        match self {
            Self::Ranked { vessels } => vessels,
            Self::Empty(_) => &[],
        }
    }

    /// The first `n` ranked vessels.
    #[must_use]
    pub fn top(&self, n: usize) -> &[ScoredVessel] {
        let vessels = self.vessels();
        &vessels[..n.min(vessels.len())]
    }

    /// The empty-result notice, if filtering removed every vessel.
    #[must_use]
    pub const fn notice(&self) -> Option<&EmptyResultNotice> {
        match self {
            Self::Ranked { .. } => None,
            Self::Empty(notice) => Some(notice),
        }
    }
}

/// Whether a vessel lies within `range_nm` (inclusive).
#[must_use]
pub fn is_within(vessel: &ScoredVessel, range_nm: f64) -> bool {
    vessel.distance_nm <= range_nm
}

/// Stable sort by score, highest first.
pub fn rank_by_score<V: Borrow<ScoredVessel>>(vessels: &mut [V]) {
    vessels.sort_by(|a, b| b.borrow().score.cmp(&a.borrow().score));
}

/// Keeps vessels within `range_nm` and ranks them by score.
#[must_use]
pub fn filter_and_rank(vessels: &[ScoredVessel], range_nm: f64) -> Ranking {
    let mut kept: Vec<ScoredVessel> = vessels
        .iter()
        .filter(|v| is_within(v, range_nm))
        .cloned()
        .collect();

    log::debug!(
        "{} of {} vessel(s) within {range_nm} nm",
        kept.len(),
        vessels.len()
    );

    if kept.is_empty() {
        return Ranking::Empty(EmptyResultNotice { range_nm });
    }

    rank_by_score(&mut kept);
    Ranking::Ranked { vessels: kept }
}

#[cfg(test)]
mod tests {
    use iuu_risk_vessel_models::{RiskLevel, VesselRecord};

    use super::*;

    fn scored(name: &str, score: u32, distance_nm: f64) -> ScoredVessel {
        ScoredVessel {
            record: VesselRecord {
                name: name.to_owned(),
                mmsi: String::new(),
                imo: String::new(),
                flag_state: String::new(),
                latitude: 0.0,
                longitude: 0.0,
                days_since_port: 0.0,
                speed_knots: 0.0,
                loitering_hours: 0.0,
                ais_gap_hours: 0.0,
            },
            score,
            level: RiskLevel::from_score(score),
            distance_nm,
            reasons: Vec::new(),
        }
    }

    fn names(vessels: &[ScoredVessel]) -> Vec<&str> {
        vessels.iter().map(|v| v.record.name.as_str()).collect()
    }

    #[test]
    fn ranks_descending_and_stable() {
        let vessels = vec![
            scored("a", 20, 1.0),
            scored("b", 50, 2.0),
            scored("c", 20, 3.0),
            scored("d", 50, 4.0),
            scored("e", 0, 5.0),
        ];
        let ranking = filter_and_rank(&vessels, 100.0);
        assert_eq!(names(ranking.vessels()), vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn boundary_is_inclusive() {
        let vessels = vec![scored("edge", 10, 100.0), scored("out", 90, 100.000_001)];
        let ranking = filter_and_rank(&vessels, 100.0);
        assert_eq!(names(ranking.vessels()), vec!["edge"]);
    }

    #[test]
    fn zero_threshold_keeps_colocated_vessel() {
        let vessels = vec![scored("here", 0, 0.0), scored("near", 90, 0.5)];
        let ranking = filter_and_rank(&vessels, 0.0);
        assert_eq!(names(ranking.vessels()), vec!["here"]);
    }

    #[test]
    fn empty_result_carries_filter() {
        let vessels = vec![scored("far", 90, 500.0)];
        let ranking = filter_and_rank(&vessels, 25.0);
        let notice = ranking.notice().unwrap();
        assert!((notice.range_nm - 25.0).abs() < f64::EPSILON);
        assert!(ranking.vessels().is_empty());
        assert!(ranking.top(3).is_empty());
        assert_eq!(
            notice.to_string(),
            "No vessels found within 25 nm of the patrol position. Try widening the distance filter."
        );
    }

    #[test]
    fn empty_input_is_empty_result() {
        assert!(filter_and_rank(&[], 100.0).notice().is_some());
    }

    #[test]
    fn top_truncates() {
        let vessels = vec![scored("a", 1, 0.0), scored("b", 2, 0.0)];
        let ranking = filter_and_rank(&vessels, 1.0);
        assert_eq!(names(ranking.top(1)), vec!["b"]);
        assert_eq!(ranking.top(10).len(), 2);
    }

    #[test]
    fn ranks_borrowed_vessels() {
        let vessels = [scored("a", 1, 0.0), scored("b", 2, 0.0), scored("c", 2, 0.0)];
        let mut refs: Vec<&ScoredVessel> = vessels.iter().collect();
        rank_by_score(&mut refs);
        let ranked: Vec<&str> = refs.iter().map(|v| v.record.name.as_str()).collect();
        assert_eq!(ranked, vec!["b", "c", "a"]);
    }
}
