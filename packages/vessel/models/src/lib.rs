#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Vessel record, scored vessel, and map-layer types.
//!
//! These types are shared by every stage of a prioritization run: the
//! ingest validator produces [`VesselRecord`]s, the scorer and distance
//! calculator turn them into [`ScoredVessel`]s, and the narrative and
//! engine stages render [`OperationalSummary`] and [`MapPoint`] output.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Score at or above which a vessel is [`RiskLevel::Critical`].
pub const CRITICAL_SCORE: u32 = 80;
/// Score at or above which a vessel is [`RiskLevel::High`].
pub const HIGH_SCORE: u32 = 60;
/// Score at or above which a vessel is [`RiskLevel::Medium`].
pub const MEDIUM_SCORE: u32 = 40;

/// One vessel row after schema validation and numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselRecord {
    /// Human-readable vessel name.
    pub name: String,
    /// Maritime Mobile Service Identity.
    pub mmsi: String,
    /// International Maritime Organization number.
    pub imo: String,
    /// Flag state the vessel is registered under.
    pub flag_state: String,
    /// Last reported latitude in degrees.
    pub latitude: f64,
    /// Last reported longitude in degrees.
    pub longitude: f64,
    /// Days since the vessel's last port call.
    pub days_since_port: f64,
    /// Speed over ground in knots.
    pub speed_knots: f64,
    /// Hours spent loitering.
    pub loitering_hours: f64,
    /// Hours without a received AIS broadcast.
    pub ais_gap_hours: f64,
}

/// Position of the evaluating patrol vessel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatrolAsset {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl PatrolAsset {
    /// Creates a patrol position from latitude/longitude degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for PatrolAsset {
    fn default() -> Self {
        Self::new(-10.0, -170.0)
    }
}

/// Discrete risk level derived from a numeric score.
///
/// The cut points are fixed and do not depend on the configured weights, so
/// a configuration whose weights sum below [`CRITICAL_SCORE`] can never
/// produce a critical vessel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum RiskLevel {
    /// Below [`MEDIUM_SCORE`].
    Low,
    /// [`MEDIUM_SCORE`] up to [`HIGH_SCORE`].
    Medium,
    /// [`HIGH_SCORE`] up to [`CRITICAL_SCORE`].
    High,
    /// [`CRITICAL_SCORE`] and above.
    Critical,
}

impl RiskLevel {
    /// Maps a score onto its risk level.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= CRITICAL_SCORE {
            Self::Critical
        } else if score >= HIGH_SCORE {
            Self::High
        } else if score >= MEDIUM_SCORE {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Recommended enforcement action for a vessel at this level.
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Critical => {
                "Intercept if vessel re-enters EEZ or lands catch. Notify RFMO and flag state."
            }
            Self::High => "Notify RFMO and initiate flag-state inquiry. Monitor real-time.",
            Self::Medium => "Monitor real-time movement via AIS.",
            Self::Low => "No action required beyond routine surveillance.",
        }
    }
}

/// A vessel after scoring and distance computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredVessel {
    /// The validated source record.
    pub record: VesselRecord,
    /// Sum of the weights of every triggered indicator.
    pub score: u32,
    /// Level derived from [`Self::score`].
    pub level: RiskLevel,
    /// Great-circle distance from the patrol position, in nautical miles.
    pub distance_nm: f64,
    /// Triggered indicator reasons in evaluation order.
    pub reasons: Vec<String>,
}

/// Cardinal direction bucket for the planar bearing approximation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CardinalDirection {
    North,
    East,
    South,
    West,
}

/// Aggregate picture of the vessels around the patrol position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalSummary {
    /// Vessels within the fixed situational-awareness radius.
    pub vessels_in_range: usize,
    /// Direction holding the most in-range vessels, `None` when there are none.
    pub majority_bearing: Option<CardinalDirection>,
    /// Names of up to three highest-scoring vessels within the priority radius.
    pub priority_vessels: Vec<String>,
    /// Rendered summary text.
    pub text: String,
}

/// Marker colour for a map point.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarkerColor {
    DarkRed,
    Red,
    Orange,
    Green,
    /// Reserved for the patrol asset.
    Blue,
}

impl MarkerColor {
    /// Maps a vessel score onto its marker band.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= CRITICAL_SCORE {
            Self::DarkRed
        } else if score >= HIGH_SCORE {
            Self::Red
        } else if score >= MEDIUM_SCORE {
            Self::Orange
        } else {
            Self::Green
        }
    }
}

/// A single point on the map layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub color: MarkerColor,
    /// Popup label (vessel name and score, or the patrol label).
    pub label: String,
}
