//! Aggregate operational summary around the patrol position.
//!
//! Uses fixed radii that are independent of the user's distance filter:
//! [`SITUATION_RADIUS_NM`] for the vessel count and majority bearing, and
//! [`PRIORITY_RADIUS_NM`] for naming the vessels to approach first.

use iuu_risk_geodesy::direction_from_patrol;
use iuu_risk_ranking::{is_within, rank_by_score};
use iuu_risk_vessel_models::{CardinalDirection, OperationalSummary, PatrolAsset, ScoredVessel};

/// Radius for the vessel count and majority bearing.
pub const SITUATION_RADIUS_NM: f64 = 100.0;
/// Radius for priority vessels.
pub const PRIORITY_RADIUS_NM: f64 = 50.0;
/// Maximum number of priority vessels named.
pub const MAX_PRIORITY_VESSELS: usize = 3;

/// Direction holding the most vessels. Ties go to the direction whose first
/// vessel appears earliest in `vessels`.
fn majority_bearing(
    vessels: &[&ScoredVessel],
    patrol: &PatrolAsset,
) -> Option<CardinalDirection> {
    // (direction, count) in first-seen order.
    let mut counts: Vec<(CardinalDirection, usize)> = Vec::with_capacity(4);
    for vessel in vessels {
        let direction = direction_from_patrol(patrol, &vessel.record);
        match counts.iter_mut().find(|(d, _)| *d == direction) {
            Some((_, count)) => *count += 1,
            None => counts.push((direction, 1)),
        }
    }

    let mut best: Option<(CardinalDirection, usize)> = None;
    for (direction, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((direction, count)),
        }
    }
    best.map(|(direction, _)| direction)
}

fn situation_sentence(count: usize, bearing: CardinalDirection) -> String {
    if count == 1 {
        format!("There is 1 vessel within {SITUATION_RADIUS_NM} nm, mostly to the {bearing}.")
    } else {
        format!(
            "There are {count} vessels within {SITUATION_RADIUS_NM} nm, mostly to the {bearing}."
        )
    }
}

fn priority_sentence(names: &[String]) -> String {
    match names {
        [] => format!("No vessels are within {PRIORITY_RADIUS_NM} nm for immediate priority."),
        [only] => format!("Priority vessel within {PRIORITY_RADIUS_NM} nm: {only}."),
        [first, second] => {
            format!("Priority vessels within {PRIORITY_RADIUS_NM} nm: {first} and {second}.")
        }
        [init @ .., last] => format!(
            "Priority vessels within {PRIORITY_RADIUS_NM} nm: {}, and {last}.",
            init.join(", ")
        ),
    }
}

/// Builds the operational summary over the unfiltered vessel set.
///
/// Each vessel's `distance_nm` must already be measured from `patrol`.
#[must_use]
pub fn operational_summary(vessels: &[ScoredVessel], patrol: &PatrolAsset) -> OperationalSummary {
    let in_range: Vec<&ScoredVessel> = vessels
        .iter()
        .filter(|v| is_within(v, SITUATION_RADIUS_NM))
        .collect();

    let Some(bearing) = majority_bearing(&in_range, patrol) else {
        return OperationalSummary {
            vessels_in_range: 0,
            majority_bearing: None,
            priority_vessels: Vec::new(),
            text: format!("No vessels detected within {SITUATION_RADIUS_NM} nm of your position."),
        };
    };

    let mut priority: Vec<&ScoredVessel> = in_range
        .iter()
        .copied()
        .filter(|v| is_within(v, PRIORITY_RADIUS_NM))
        .collect();
    rank_by_score(&mut priority);
    let priority_vessels: Vec<String> = priority
        .iter()
        .take(MAX_PRIORITY_VESSELS)
        .map(|v| v.record.name.clone())
        .collect();

    let text = format!(
        "{} {}",
        situation_sentence(in_range.len(), bearing),
        priority_sentence(&priority_vessels)
    );
    log::debug!("Operational summary: {text}");

    OperationalSummary {
        vessels_in_range: in_range.len(),
        majority_bearing: Some(bearing),
        priority_vessels,
        text,
    }
}
