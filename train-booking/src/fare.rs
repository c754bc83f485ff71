//! Fare estimation.
//!
//! Fares are a pure function of the two endpoints: great-circle distance
//! via the haversine formula, multiplied by a flat per-kilometre rate and
//! rounded to two decimal places. Quotes are recomputed on every endpoint
//! change and never persisted.

use crate::domain::{GeoPoint, Station};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Flat rate charged per kilometre of great-circle distance.
pub const DEFAULT_RATE_PER_KM: f64 = 10.0;

/// Great-circle distance between two points in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Fare between two stations at the given rate, in currency units.
///
/// Travelling from a station to itself costs exactly 0. Otherwise the
/// result is the haversine distance times `rate_per_km`, rounded to two
/// decimal places; it is non-negative and symmetric in the two stations.
pub fn estimate(origin: &Station, destination: &Station, rate_per_km: f64) -> f64 {
    if origin.id == destination.id {
        return 0.0;
    }

    round_to_cents(haversine_km(origin.coords, destination.coords) * rate_per_km)
}

/// Round a currency amount to two decimal places.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::StationId;
    use proptest::prelude::*;

    fn coord() -> impl Strategy<Value = GeoPoint> {
        (-90.0f64..90.0, -180.0f64..180.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
    }

    fn station_at(id: &str, coords: GeoPoint) -> Station {
        Station {
            id: StationId::new(id),
            name: id.to_string(),
            code: id.to_uppercase(),
            city: String::new(),
            region: String::new(),
            coords,
        }
    }

    proptest! {
        /// Distance is symmetric in its endpoints.
        #[test]
        fn distance_symmetric(a in coord(), b in coord()) {
            let d1 = haversine_km(a, b);
            let d2 = haversine_km(b, a);
            prop_assert!((d1 - d2).abs() < 1e-9);
        }

        /// Fares are symmetric in the two stations.
        #[test]
        fn fare_symmetric(a in coord(), b in coord()) {
            let origin = station_at("s1", a);
            let destination = station_at("s2", b);
            let out = estimate(&origin, &destination, DEFAULT_RATE_PER_KM);
            let back = estimate(&destination, &origin, DEFAULT_RATE_PER_KM);
            prop_assert!((out - back).abs() < 1e-9);
        }

        /// Fares are never negative.
        #[test]
        fn fare_non_negative(a in coord(), b in coord()) {
            let origin = station_at("s1", a);
            let destination = station_at("s2", b);
            prop_assert!(estimate(&origin, &destination, DEFAULT_RATE_PER_KM) >= 0.0);
        }

        /// Along the equator, a wider longitude gap never costs less.
        #[test]
        fn fare_monotonic_in_distance(g1 in 0.0f64..90.0, g2 in 0.0f64..90.0) {
            let (near, far) = if g1 <= g2 { (g1, g2) } else { (g2, g1) };
            let origin = station_at("s0", GeoPoint::new(0.0, 0.0));
            let a = station_at("s1", GeoPoint::new(0.0, near));
            let b = station_at("s2", GeoPoint::new(0.0, far));
            prop_assert!(
                estimate(&origin, &a, DEFAULT_RATE_PER_KM)
                    <= estimate(&origin, &b, DEFAULT_RATE_PER_KM)
            );
        }
    }
}
