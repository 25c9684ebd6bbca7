//! Location proximity sub-score: haversine distance → linear falloff.

use crate::models::job::GeoPoint;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance beyond which a commute scores 0. Linear falloff below it, so
/// 1 km scores ≈0.98 and the midpoint 25 km scores 0.5.
pub const MAX_COMMUTE_KM: f64 = 50.0;

/// Great-circle distance between two coordinates in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Maps a distance to [0, 1], monotonically decreasing.
pub fn location_score(distance_km: f64) -> f64 {
    (1.0 - distance_km / MAX_COMMUTE_KM).clamp(0.0, 1.0)
}

/// Distance and score for a job/candidate pair, `None` when either side has
/// no coordinates. Missing coordinates mean "unknown", not 0.
pub fn evaluate_location(
    job: Option<GeoPoint>,
    candidate: Option<GeoPoint>,
) -> Option<(f64, f64)> {
    let (job, candidate) = (job?, candidate?);
    let distance_km = haversine_km(job, candidate);
    Some((distance_km, location_score(distance_km)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_identical_coordinates_score_one() {
        let p = point(10.7769, 106.7009);
        let (distance, score) = evaluate_location(Some(p), Some(p)).unwrap();
        assert!(distance < 1e-9);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Ho Chi Minh City center → Tan Son Nhat airport, roughly 7 km.
        let district_1 = point(10.7769, 106.7009);
        let airport = point(10.8188, 106.6519);
        let d = haversine_km(district_1, airport);
        assert!((d - 7.0).abs() < 1.0, "distance was {d}");
    }

    #[test]
    fn test_one_km_scores_near_one() {
        let score = location_score(1.0);
        assert!(score > 0.95, "score was {score}");
    }

    #[test]
    fn test_fifty_km_scores_zero() {
        assert_eq!(location_score(50.0), 0.0);
        assert_eq!(location_score(120.0), 0.0);
    }

    #[test]
    fn test_score_is_monotonic() {
        assert!(location_score(5.0) > location_score(10.0));
        assert!(location_score(10.0) > location_score(30.0));
    }

    #[test]
    fn test_missing_either_side_is_unknown() {
        let p = point(10.0, 106.0);
        assert!(evaluate_location(None, Some(p)).is_none());
        assert!(evaluate_location(Some(p), None).is_none());
        assert!(evaluate_location(None, None).is_none());
    }
}
