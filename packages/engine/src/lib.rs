#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Single-pass patrol prioritization engine.
//!
//! [`run`] takes a validated [`VesselBatch`] and an immutable [`RunConfig`]
//! and produces a [`PrioritizationReport`]. The pass is pure: the same
//! inputs always give the same report, and nothing outside the returned
//! value is modified, so concurrent runs only need their own inputs.
//!
//! Scoring and distance are computed per vessel; ranking, narratives and
//! the operational summary run once the whole fleet is scored.

pub mod progress;
pub mod report;
pub mod tracks;

use iuu_risk_geodesy::distance_from_patrol;
use iuu_risk_ingest::VesselBatch;
use iuu_risk_narrative::{narrate_top, operational_summary};
use iuu_risk_ranking::{Ranking, filter_and_rank};
use iuu_risk_scoring::score_vessel;
use iuu_risk_scoring_models::{RunConfig, ScoringConfig};
use iuu_risk_vessel_models::{PatrolAsset, ScoredVessel, VesselRecord};

use crate::progress::{NullProgress, ProgressCallback};
use crate::report::{MapLayer, PrioritizationReport, TableRow};

/// Scores one vessel and measures its distance from the patrol.
#[must_use]
pub fn assess_vessel(
    record: &VesselRecord,
    scoring: &ScoringConfig,
    patrol: &PatrolAsset,
) -> ScoredVessel {
    let assessment = score_vessel(record, scoring);
    ScoredVessel {
        record: record.clone(),
        score: assessment.score,
        level: assessment.level,
        distance_nm: distance_from_patrol(patrol, record),
        reasons: assessment.reasons,
    }
}

/// Scores every vessel, preserving input order.
#[must_use]
pub fn assess_fleet(
    vessels: &[VesselRecord],
    scoring: &ScoringConfig,
    patrol: &PatrolAsset,
    progress: &dyn ProgressCallback,
) -> Vec<ScoredVessel> {
    progress.set_total(vessels.len() as u64);

    let scored = vessels
        .iter()
        .map(|record| {
            progress.set_message(record.name.clone());
            let vessel = assess_vessel(record, scoring, patrol);
            progress.inc(1);
            vessel
        })
        .collect::<Vec<_>>();

    progress.finish(format!("Scored {} vessel(s)", scored.len()));
    scored
}

/// Runs the full prioritization pass without progress reporting.
#[must_use]
pub fn run(batch: &VesselBatch, config: &RunConfig) -> PrioritizationReport {
    run_with_progress(batch, config, &NullProgress)
}

/// Runs the full prioritization pass.
#[must_use]
pub fn run_with_progress(
    batch: &VesselBatch,
    config: &RunConfig,
    progress: &dyn ProgressCallback,
) -> PrioritizationReport {
    let patrol = config.patrol;
    let output = config.output;

    log::info!(
        "Prioritizing {} vessel(s) around ({}, {}) within {} nm",
        batch.vessels.len(),
        patrol.latitude,
        patrol.longitude,
        output.range_nm
    );

    let scored = assess_fleet(&batch.vessels, &config.scoring, &patrol, progress);
    let ranking = filter_and_rank(&scored, output.range_nm);

    let table = ranking
        .top(output.table_limit)
        .iter()
        .enumerate()
        .map(|(i, vessel)| TableRow::new(i + 1, vessel))
        .collect();
    let narratives = narrate_top(&ranking, output.top_n);
    let summary = operational_summary(&scored, &patrol);
    let map = MapLayer::new(&scored, &patrol);

    let (vessels_in_filter, notice) = match &ranking {
        Ranking::Ranked { vessels } => (vessels.len(), None),
        Ranking::Empty(notice) => {
            log::info!("{notice}");
            (0, Some(*notice))
        }
    };

    PrioritizationReport {
        patrol,
        range_nm: output.range_nm,
        table,
        vessels_in_filter,
        notice,
        scored,
        narratives,
        summary,
        map,
        warnings: batch.warnings.clone(),
    }
}
