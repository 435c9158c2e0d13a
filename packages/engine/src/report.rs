//! Output artifacts of a prioritization run.

use iuu_risk_ingest::CoercionWarning;
use iuu_risk_narrative::VesselNarrative;
use iuu_risk_ranking::EmptyResultNotice;
use iuu_risk_vessel_models::{
    MapPoint, MarkerColor, OperationalSummary, PatrolAsset, RiskLevel, ScoredVessel,
};
use serde::Serialize;

/// Label on the patrol asset's map marker.
pub const PATROL_LABEL: &str = "Your Vessel (Patrol Ship)";

/// One row of the ranked table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub rank: usize,
    pub name: String,
    pub mmsi: String,
    pub imo: String,
    pub flag_state: String,
    pub score: u32,
    pub level: RiskLevel,
    pub distance_nm: f64,
    pub days_since_port: f64,
    pub speed_knots: f64,
    pub loitering_hours: f64,
    pub ais_gap_hours: f64,
}

impl TableRow {
    /// Builds a row for the vessel at 1-based `rank`.
    #[must_use]
    pub fn new(rank: usize, vessel: &ScoredVessel) -> Self {
        let record = &vessel.record;
        Self {
            rank,
            name: record.name.clone(),
            mmsi: record.mmsi.clone(),
            imo: record.imo.clone(),
            flag_state: record.flag_state.clone(),
            score: vessel.score,
            level: vessel.level,
            distance_nm: vessel.distance_nm,
            days_since_port: record.days_since_port,
            speed_knots: record.speed_knots,
            loitering_hours: record.loitering_hours,
            ais_gap_hours: record.ais_gap_hours,
        }
    }
}

/// Map-ready points for every vessel plus the patrol asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLayer {
    /// Initial view centre: mean vessel position, or the patrol when there
    /// are no vessels.
    pub center: PatrolAsset,
    pub vessels: Vec<MapPoint>,
    pub patrol: MapPoint,
}

impl MapLayer {
    /// Builds the layer from the full scored dataset.
    #[must_use]
    pub fn new(scored: &[ScoredVessel], patrol: &PatrolAsset) -> Self {
        let vessels: Vec<MapPoint> = scored
            .iter()
            .map(|v| MapPoint {
                latitude: v.record.latitude,
                longitude: v.record.longitude,
                color: MarkerColor::from_score(v.score),
                label: format!("{}: Score {}", v.record.name, v.score),
            })
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let center = if vessels.is_empty() {
            *patrol
        } else {
            let n = vessels.len() as f64;
            PatrolAsset::new(
                vessels.iter().map(|p| p.latitude).sum::<f64>() / n,
                vessels.iter().map(|p| p.longitude).sum::<f64>() / n,
            )
        };

        Self {
            center,
            vessels,
            patrol: MapPoint {
                latitude: patrol.latitude,
                longitude: patrol.longitude,
                color: MarkerColor::Blue,
                label: PATROL_LABEL.to_owned(),
            },
        }
    }
}

/// Everything a presentation layer needs from one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizationReport {
    pub patrol: PatrolAsset,
    /// Active distance filter in nautical miles.
    pub range_nm: f64,
    /// Ranked vessels within range, truncated to the table limit.
    pub table: Vec<TableRow>,
    /// Number of vessels within range before truncation.
    pub vessels_in_filter: usize,
    /// Set when no vessel passed the distance filter.
    pub notice: Option<EmptyResultNotice>,
    /// Every vessel in input order, for export.
    pub scored: Vec<ScoredVessel>,
    pub narratives: Vec<VesselNarrative>,
    pub summary: OperationalSummary,
    pub map: MapLayer,
    pub warnings: Vec<CoercionWarning>,
}
