//! Geographic positions and great-circle distance.
//!
//! Per-sample distance deltas use the haversine formula over a spherical
//! Earth with the IUGG mean radius. At the scale of consecutive GPS fixes
//! the spherical error is far below fix accuracy.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_008.771_415_06;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Position {
    /// Create a position from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two positions, in meters.
pub fn distance_meters(from: Position, to: Position) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    EARTH_RADIUS_M * 2.0 * h.sqrt().asin()
}

/// Project a position along a bearing (degrees clockwise from north) for a
/// distance in meters.
pub fn destination(from: Position, bearing_deg: f64, distance_m: f64) -> Position {
    let angular = distance_m / EARTH_RADIUS_M;
    let bearing = bearing_deg.to_radians();
    let lat1 = from.latitude.to_radians();
    let lon1 = from.longitude.to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

    Position::new(lat2.to_degrees(), lon2.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_known_points() {
        // Two points in Vinnytsia roughly 628 m apart
        let a = Position::new(49.235835445219784, 28.48586563389628);
        let b = Position::new(49.23297532196681, 28.493329182275833);

        let d = distance_meters(a, b);
        assert!((d - 628.33).abs() < 0.5, "distance was {d}");
    }

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = Position::new(51.5007, -0.1246);
        assert_eq!(distance_meters(p, p), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Position::new(48.137154, 11.576124);
        let b = Position::new(48.139, 11.58);
        assert!((distance_meters(a, b) - distance_meters(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_destination_round_trips_through_distance() {
        let start = Position::new(48.0, 11.0);
        for bearing in [0.0, 45.0, 90.0, 180.0, 270.0, 315.0] {
            let end = destination(start, bearing, 500.0);
            let d = distance_meters(start, end);
            assert!((d - 500.0).abs() < 0.01, "bearing {bearing}: distance {d}");
        }
    }

    #[test]
    fn test_destination_zero_distance_is_identity() {
        let start = Position::new(-33.8688, 151.2093);
        let end = destination(start, 123.0, 0.0);
        assert!((end.latitude - start.latitude).abs() < 1e-12);
        assert!((end.longitude - start.longitude).abs() < 1e-12);
    }
}
