//! Great-circle distance and point-to-polyline proximity.

use crate::domain::GeoPoint;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle (haversine) distance between two points, in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Minimum distance from a point to a polyline, in kilometres.
///
/// For each segment the closest point is found by planar projection in
/// (lat, lng) space, clamped to the segment endpoints, and the great-circle
/// distance to that closest point is taken; the result is the minimum over
/// all segments.
///
/// Returns `f64::INFINITY` when the polyline has fewer than two points:
/// callers treat that as "not near any route".
pub fn min_distance_to_polyline(point: GeoPoint, polyline: &[GeoPoint]) -> f64 {
    if polyline.len() < 2 {
        return f64::INFINITY;
    }

    polyline
        .windows(2)
        .map(|segment| {
            let closest = closest_point_on_segment(point, segment[0], segment[1]);
            haversine_km(point, closest)
        })
        .fold(f64::INFINITY, f64::min)
}

/// Closest point to `p` on the segment from `a` to `b`, by planar projection.
///
/// The projection parameter is clamped to `[0, 1]`; a degenerate segment
/// (coincident endpoints) clamps to the start.
fn closest_point_on_segment(p: GeoPoint, a: GeoPoint, b: GeoPoint) -> GeoPoint {
    let ap_lat = p.lat - a.lat;
    let ap_lng = p.lng - a.lng;
    let ab_lat = b.lat - a.lat;
    let ab_lng = b.lng - a.lng;

    let len_sq = ab_lat * ab_lat + ab_lng * ab_lng;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((ap_lat * ab_lat + ap_lng * ab_lng) / len_sq).clamp(0.0, 1.0)
    };

    GeoPoint::new(a.lat + t * ab_lat, a.lng + t * ab_lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_known_distance() {
        // London to Paris, roughly 344 km.
        let london = GeoPoint::new(51.5074, -0.1278);
        let paris = GeoPoint::new(48.8566, 2.3522);

        let d = haversine_km(london, paris);
        assert!((d - 344.0).abs() < 2.0, "got {d}");
    }

    #[test]
    fn haversine_zero_for_same_point() {
        let p = GeoPoint::new(51.5, -0.1);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn empty_polyline_is_infinitely_far() {
        let p = GeoPoint::new(51.5, -0.1);
        assert_eq!(min_distance_to_polyline(p, &[]), f64::INFINITY);
    }

    #[test]
    fn single_point_polyline_is_infinitely_far() {
        let p = GeoPoint::new(51.5, -0.1);
        assert_eq!(min_distance_to_polyline(p, &[p]), f64::INFINITY);
    }

    #[test]
    fn point_on_segment_is_at_distance_zero() {
        let line = [GeoPoint::new(51.0, -1.0), GeoPoint::new(51.0, 1.0)];
        let on_line = GeoPoint::new(51.0, 0.25);

        let d = min_distance_to_polyline(on_line, &line);
        assert!(d < 1e-6, "got {d}");
    }

    #[test]
    fn endpoint_clamping_beyond_segment_end() {
        // Point past the far end of the segment: distance is to the endpoint.
        let line = [GeoPoint::new(51.0, 0.0), GeoPoint::new(51.0, 1.0)];
        let beyond = GeoPoint::new(51.0, 2.0);

        let d = min_distance_to_polyline(beyond, &line);
        let to_endpoint = haversine_km(beyond, line[1]);
        assert!((d - to_endpoint).abs() < 1e-9);
    }

    #[test]
    fn degenerate_segment_measures_to_its_start() {
        let line = [GeoPoint::new(51.0, 0.0), GeoPoint::new(51.0, 0.0)];
        let p = GeoPoint::new(52.0, 0.0);

        let d = min_distance_to_polyline(p, &line);
        assert!((d - haversine_km(p, line[0])).abs() < 1e-9);
    }

    #[test]
    fn nearest_of_several_segments_wins() {
        let line = [
            GeoPoint::new(50.0, 0.0),
            GeoPoint::new(51.0, 0.0),
            GeoPoint::new(51.0, 5.0),
        ];
        // Sits just off the second segment.
        let p = GeoPoint::new(51.1, 2.5);

        let d = min_distance_to_polyline(p, &line);
        assert!(d < 15.0, "got {d}");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn point() -> impl Strategy<Value = GeoPoint> {
        (-80.0f64..80.0, -179.0f64..179.0).prop_map(|(lat, lng)| GeoPoint::new(lat, lng))
    }

    proptest! {
        /// Distance is never negative.
        #[test]
        fn non_negative(p in point(), line in prop::collection::vec(point(), 2..10)) {
            prop_assert!(min_distance_to_polyline(p, &line) >= 0.0);
        }

        /// A polyline's own vertices are on the polyline.
        #[test]
        fn vertices_are_near(line in prop::collection::vec(point(), 2..10)) {
            for &v in &line {
                prop_assert!(min_distance_to_polyline(v, &line) < 1e-6);
            }
        }

        /// Haversine is symmetric.
        #[test]
        fn haversine_symmetric(a in point(), b in point()) {
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            prop_assert!((ab - ba).abs() < 1e-9);
        }
    }
}
