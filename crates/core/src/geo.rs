//! Geographic coordinates and the straight-line distance preview.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`.
/// Values come from the destination picker, which only produces valid
/// coordinates, so the range is not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub lat: f64,

    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate from decimal degrees.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Render the coordinate as the `"lat, lng"` string the payment
    /// endpoint expects, fixed to five decimal places.
    #[must_use]
    pub fn wire_format(&self) -> String {
        format!("{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Great-circle distance between two points in kilometres.
///
/// This backs the preview shown while the shopper picks a destination.
/// It is informational only: the tariff service computes the
/// authoritative distance server-side, and the preview is never sent
/// over the wire or used for pricing.
#[must_use]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAREHOUSE: Coordinate = Coordinate {
        lat: 14.6349,
        lng: -90.5069,
    };

    const ANTIGUA: Coordinate = Coordinate {
        lat: 14.5586,
        lng: -90.7295,
    };

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(
            haversine_km(WAREHOUSE, ANTIGUA),
            haversine_km(ANTIGUA, WAREHOUSE)
        );
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(haversine_km(WAREHOUSE, WAREHOUSE), 0.0);
    }

    #[test]
    fn warehouse_to_antigua_is_about_25_km() {
        let distance = haversine_km(WAREHOUSE, ANTIGUA);

        assert!(
            (25.0..26.0).contains(&distance),
            "expected ~25.4 km, got {distance}"
        );
    }

    #[test]
    fn wire_format_uses_five_decimals() {
        assert_eq!(WAREHOUSE.wire_format(), "14.63490, -90.50690");
    }

    #[test]
    fn wire_format_truncates_long_fractions() {
        let point = Coordinate::new(14.123_456_78, -90.987_654_32);

        assert_eq!(point.wire_format(), "14.12346, -90.98765");
    }
}
