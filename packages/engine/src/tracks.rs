//! Per-vessel reports over position tracks.
//!
//! A vessel file may carry several rows for the same vessel, one per
//! reported position. Rows are grouped by vessel name and each vessel is
//! reported from its last row, its last known position. The distance
//! filter does not apply here: a requested vessel is always reported.

use std::collections::HashMap;
use std::fmt;

use iuu_risk_ingest::VesselBatch;
use iuu_risk_narrative::VesselNarrative;
use iuu_risk_scoring_models::RunConfig;
use iuu_risk_vessel_models::VesselRecord;
use serde::Serialize;

use crate::assess_vessel;

/// Errors from building per-vessel reports.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    /// One or more requested vessel names have no rows in the batch.
    #[error("Vessel(s) not found in input: {}", .names.join(", "))]
    UnknownVessels {
        /// Requested names with no matching rows, in request order.
        names: Vec<String>,
    },
}

/// A vessel's track reduced to its last known position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselTrack<'a> {
    /// Last row seen for this vessel.
    pub latest: &'a VesselRecord,
    /// Number of rows carrying this vessel's name.
    pub points: usize,
}

/// Groups rows by vessel name, keeping the last row of each.
///
/// Tracks are returned in order of each name's first appearance.
#[must_use]
pub fn latest_positions(vessels: &[VesselRecord]) -> Vec<VesselTrack<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tracks: Vec<VesselTrack<'_>> = Vec::new();

    for record in vessels {
        if let Some(&i) = index.get(record.name.as_str()) {
            tracks[i].latest = record;
            tracks[i].points += 1;
        } else {
            index.insert(record.name.as_str(), tracks.len());
            tracks.push(VesselTrack {
                latest: record,
                points: 1,
            });
        }
    }

    tracks
}

/// Report for one vessel at its last known position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselReport {
    pub latitude: f64,
    pub longitude: f64,
    pub track_points: usize,
    pub narrative: VesselNarrative,
}

impl fmt::Display for VesselReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.narrative)?;
        write!(
            f,
            "  Last known position: {:.4}, {:.4} ({} track point(s))",
            self.latitude, self.longitude, self.track_points
        )
    }
}

/// Builds a report for each vessel in `names`, or for every vessel when
/// `names` is empty.
///
/// Reports follow the order of `names` (or first appearance in the batch).
///
/// # Errors
///
/// Returns [`TrackError::UnknownVessels`] listing every requested name
/// with no rows in `batch`.
pub fn vessel_reports(
    batch: &VesselBatch,
    config: &RunConfig,
    names: &[String],
) -> Result<Vec<VesselReport>, TrackError> {
    let tracks = latest_positions(&batch.vessels);

    let selected: Vec<VesselTrack<'_>> = if names.is_empty() {
        tracks
    } else {
        let mut unknown = Vec::new();
        let selected = names
            .iter()
            .filter_map(|name| {
                let track = tracks.iter().find(|t| t.latest.name == *name).copied();
                if track.is_none() {
                    unknown.push(name.clone());
                }
                track
            })
            .collect();
        if !unknown.is_empty() {
            return Err(TrackError::UnknownVessels { names: unknown });
        }
        selected
    };

    log::debug!("Reporting {} vessel track(s)", selected.len());

    Ok(selected
        .into_iter()
        .map(|track| {
            let scored = assess_vessel(track.latest, &config.scoring, &config.patrol);
            VesselReport {
                latitude: track.latest.latitude,
                longitude: track.latest.longitude,
                track_points: track.points,
                narrative: VesselNarrative::from(&scored),
            }
        })
        .collect())
}
