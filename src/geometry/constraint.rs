//! Radius-constrained plot placement.

use crate::domain::{Distance, GeoPoint};

use super::geodesic::{bearing_between, destination, distance};

/// Constrain `candidate` to lie within `max_radius` meters of `origin`.
///
/// A candidate already inside the radius passes through unchanged; one
/// outside is pulled back onto the circle of radius `max_radius` along
/// the bearing from `origin` toward `candidate`. The function is total
/// over valid inputs and idempotent, so re-clamping the stream of
/// positions from a drag handler is harmless.
pub fn clamp_to_radius(origin: GeoPoint, candidate: GeoPoint, max_radius: Distance) -> GeoPoint {
    if distance(origin, candidate) <= max_radius {
        return candidate;
    }

    destination(origin, max_radius, bearing_between(origin, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn meters(m: f64) -> Distance {
        Distance::new(m).unwrap()
    }

    #[test]
    fn test_inside_radius_unchanged() {
        let origin = point(-4.2156, -69.9406);
        let nearby = point(-4.2157, -69.9405);
        assert_eq!(clamp_to_radius(origin, nearby, meters(100.0)), nearby);
    }

    #[test]
    fn test_clamps_to_100m_due_east() {
        // candidate is ~1112 m due east; the clamp lands 100 m due east
        let origin = point(0.0, 0.0);
        let candidate = point(0.0, 0.01);
        let clamped = clamp_to_radius(origin, candidate, meters(100.0));

        assert!(clamped.lat().abs() < 1e-9);
        assert!((clamped.lon() - 0.0008993216).abs() < 1e-6);
        assert!((distance(origin, clamped).meters() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_result_always_within_radius() {
        let origin = point(-4.2156, -69.9406);
        let candidates = [
            point(-4.2156, -69.9406),
            point(-4.2160, -69.9410),
            point(-4.25, -69.95),
            point(-3.0, -69.0),
        ];

        for candidate in candidates {
            for radius in [0.0, 50.0, 500.0, 5000.0] {
                let clamped = clamp_to_radius(origin, candidate, meters(radius));
                assert!(
                    distance(origin, clamped).meters() <= radius + 1e-6,
                    "clamp exceeded radius {radius}"
                );
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let origin = point(-4.2156, -69.9406);
        let candidate = point(-4.2000, -69.9200);
        let radius = meters(250.0);

        let once = clamp_to_radius(origin, candidate, radius);
        let twice = clamp_to_radius(origin, once, radius);
        assert!((once.lat() - twice.lat()).abs() < 1e-9);
        assert!((once.lon() - twice.lon()).abs() < 1e-9);
    }

    #[test]
    fn test_zero_radius_collapses_to_origin() {
        let origin = point(0.0, 0.0);
        let clamped = clamp_to_radius(origin, point(0.5, 0.5), meters(0.0));
        assert!(distance(origin, clamped).meters() < 1e-6);
    }
}
