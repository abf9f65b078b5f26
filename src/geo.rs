//! Great-circle distance between coordinates

use crate::models::Coordinates;

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers, using
/// the haversine formula.
///
/// Pure and deterministic; identical points yield exactly 0.
#[must_use]
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    // Rounding can push h a hair outside [0, 1]; asin would then return
    // NaN for antipodal or near-antipodal inputs.
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use haversine::{Location as HaversineLocation, Units, distance};
    use rstest::rstest;

    const VIENNA: Coordinates = Coordinates {
        lat: 48.2082,
        lng: 16.3738,
    };

    #[rstest]
    #[case(VIENNA, Coordinates { lat: 48.2100, lng: 16.3800 })]
    #[case(VIENNA, Coordinates { lat: -33.8688, lng: 151.2093 })]
    #[case(Coordinates { lat: 0.0, lng: 0.0 }, Coordinates { lat: 0.0, lng: 180.0 })]
    #[case(Coordinates { lat: 89.9, lng: 12.0 }, Coordinates { lat: -89.9, lng: -168.0 })]
    fn test_distance_is_symmetric(#[case] a: Coordinates, #[case] b: Coordinates) {
        assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    #[rstest]
    #[case(VIENNA)]
    #[case(Coordinates { lat: 0.0, lng: 0.0 })]
    #[case(Coordinates { lat: -90.0, lng: 0.0 })]
    fn test_identical_points_yield_zero(#[case] p: Coordinates) {
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn test_close_vienna_points_under_one_km() {
        let nearby = Coordinates::new(48.2100, 16.3800);
        let d = distance_km(VIENNA, nearby);
        assert!(d > 0.0);
        assert!(d < 1.0, "expected < 1 km, got {d}");
    }

    #[test]
    fn test_antipodal_points_do_not_produce_nan() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 180.0);
        let d = distance_km(a, b);
        assert!(d.is_finite());
        // Half the circumference of a 6371 km sphere
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 0.5);
    }

    #[rstest]
    #[case(VIENNA, Coordinates { lat: 48.8566, lng: 2.3522 })]
    #[case(VIENNA, Coordinates { lat: 40.7128, lng: -74.0060 })]
    #[case(Coordinates { lat: -33.8688, lng: 151.2093 }, Coordinates { lat: 35.6762, lng: 139.6503 })]
    fn test_agrees_with_haversine_crate(#[case] a: Coordinates, #[case] b: Coordinates) {
        let ours = distance_km(a, b);
        let theirs = distance(
            HaversineLocation {
                latitude: a.lat,
                longitude: a.lng,
            },
            HaversineLocation {
                latitude: b.lat,
                longitude: b.lng,
            },
            Units::Kilometers,
        );
        // Implementations may assume a slightly different Earth radius
        assert!((ours / theirs - 1.0).abs() < 0.005, "{ours} vs {theirs}");
    }
}
