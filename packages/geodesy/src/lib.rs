#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Great-circle distance and planar bearing helpers.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_NM`] with the `atan2` central-angle form, which stays
//! well-conditioned near antipodal points and the poles.
//!
//! Bearings are a planar approximation (`atan2` of the raw latitude and
//! longitude deltas), not a true initial great-circle bearing. The summary
//! relies on their exact quadrant boundaries.

use iuu_risk_vessel_models::{CardinalDirection, PatrolAsset, VesselRecord};

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.07;

/// Great-circle distance between two points, in nautical miles.
///
/// Symmetric and exactly zero for identical points: both deltas are taken
/// as absolute values so swapping the arguments yields the same bits.
#[must_use]
pub fn distance_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).abs().to_radians();
    let delta_lambda = (lon2 - lon1).abs().to_radians();

    let sin_phi = (delta_phi / 2.0).sin();
    let sin_lambda = (delta_lambda / 2.0).sin();
    let a = (sin_phi * sin_phi + phi1.cos() * phi2.cos() * sin_lambda * sin_lambda).clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_NM * c
}

/// Distance from the patrol asset to a vessel's reported position.
#[must_use]
pub fn distance_from_patrol(patrol: &PatrolAsset, vessel: &VesselRecord) -> f64 {
    distance_nm(
        patrol.latitude,
        patrol.longitude,
        vessel.latitude,
        vessel.longitude,
    )
}

/// Planar bearing from the patrol asset to a point, in degrees within
/// `[-180, 180]`. Zero points east, positive angles turn north.
#[must_use]
pub fn planar_bearing_degrees(patrol: &PatrolAsset, latitude: f64, longitude: f64) -> f64 {
    let lat_delta = latitude - patrol.latitude;
    let lon_delta = longitude - patrol.longitude;
    lat_delta.atan2(lon_delta).to_degrees()
}

/// Buckets a planar bearing into a cardinal direction.
///
/// `[-45, 45]` is East, `(45, 135)` North, `(-135, -45)` South, and
/// everything else (including +/-135 exactly) West.
#[must_use]
pub fn cardinal_direction(angle_degrees: f64) -> CardinalDirection {
    if (-45.0..=45.0).contains(&angle_degrees) {
        CardinalDirection::East
    } else if angle_degrees > 45.0 && angle_degrees < 135.0 {
        CardinalDirection::North
    } else if angle_degrees > -135.0 && angle_degrees < -45.0 {
        CardinalDirection::South
    } else {
        CardinalDirection::West
    }
}

/// Cardinal direction of a vessel relative to the patrol asset.
#[must_use]
pub fn direction_from_patrol(patrol: &PatrolAsset, vessel: &VesselRecord) -> CardinalDirection {
    cardinal_direction(planar_bearing_degrees(
        patrol,
        vessel.latitude,
        vessel.longitude,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero() {
        for &(lat, lon) in &[(0.0, 0.0), (-10.0, -170.0), (89.9, 179.9), (-90.0, 0.0)] {
            assert!(distance_nm(lat, lon, lat, lon) == 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let points = [
            (0.0, 0.0),
            (-10.0, -170.0),
            (-9.3, 175.2),
            (45.123, -33.5),
            (-89.0, 12.0),
            (0.0, 180.0),
        ];
        for &(lat1, lon1) in &points {
            for &(lat2, lon2) in &points {
                let ab = distance_nm(lat1, lon1, lat2, lon2);
                let ba = distance_nm(lat2, lon2, lat1, lon1);
                assert!(ab.to_bits() == ba.to_bits(), "{ab} != {ba}");
                assert!(ab >= 0.0);
            }
        }
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = distance_nm(0.0, 0.0, 1.0, 0.0);
        assert!((d - 60.04).abs() < 0.1, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = distance_nm(0.0, 0.0, 0.0, 180.0);
        let half = std::f64::consts::PI * EARTH_RADIUS_NM;
        assert!((d - half).abs() < 1e-6, "got {d}");

        let poles = distance_nm(90.0, 0.0, -90.0, 0.0);
        assert!((poles - half).abs() < 1e-6, "got {poles}");
    }

    #[test]
    fn longitude_wraps_across_antimeridian() {
        let d = distance_nm(0.0, 179.5, 0.0, -179.5);
        assert!((d - 60.04).abs() < 0.1, "got {d}");
    }

    #[test]
    fn near_pole_longitude_change_is_small() {
        let d = distance_nm(89.999, 0.0, 89.999, 90.0);
        assert!(d < 0.2, "got {d}");
    }

    #[test]
    fn cardinal_boundaries() {
        assert_eq!(cardinal_direction(0.0), CardinalDirection::East);
        assert_eq!(cardinal_direction(45.0), CardinalDirection::East);
        assert_eq!(cardinal_direction(-45.0), CardinalDirection::East);
        assert_eq!(cardinal_direction(45.1), CardinalDirection::North);
        assert_eq!(cardinal_direction(134.9), CardinalDirection::North);
        assert_eq!(cardinal_direction(135.0), CardinalDirection::West);
        assert_eq!(cardinal_direction(-134.9), CardinalDirection::South);
        assert_eq!(cardinal_direction(-135.0), CardinalDirection::West);
        assert_eq!(cardinal_direction(180.0), CardinalDirection::West);
        assert_eq!(cardinal_direction(-180.0), CardinalDirection::West);
    }

    #[test]
    fn planar_bearing_quadrants() {
        let patrol = PatrolAsset::new(0.0, 0.0);
        assert!((planar_bearing_degrees(&patrol, 1.0, 0.0) - 90.0).abs() < 1e-9);
        assert!((planar_bearing_degrees(&patrol, 0.0, 1.0)).abs() < 1e-9);
        assert!((planar_bearing_degrees(&patrol, -1.0, 0.0) + 90.0).abs() < 1e-9);
        assert!((planar_bearing_degrees(&patrol, 0.0, -1.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn planar_bearing_ignores_antimeridian() {
        // The planar approximation does not wrap longitude: a vessel just
        // across the antimeridian to the east reads as far to the west.
        let patrol = PatrolAsset::new(-10.0, 179.5);
        let angle = planar_bearing_degrees(&patrol, -10.0, -179.5);
        assert_eq!(cardinal_direction(angle), CardinalDirection::West);
    }
}
