//! Polygon area estimation on the sphere.

use crate::domain::GeoPoint;

use super::geodesic::EARTH_RADIUS_M;

const M2_PER_HECTARE: f64 = 10_000.0;

/// Approximate area of a simple polygon, in hectares, by
/// spherical-excess summation over consecutive vertex pairs.
///
/// Polygons with fewer than three vertices enclose nothing and return
/// 0.0. The approximation holds for polygons up to a few square
/// kilometers, which covers the fixed 0.1 ha plots this engine produces
/// with a wide margin; it is not a general ellipsoidal area.
pub fn polygon_area_hectares(points: &[GeoPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for (i, p1) in points.iter().enumerate() {
        let p2 = &points[(i + 1) % points.len()];
        sum += (p2.lon() - p1.lon()).to_radians()
            * (2.0 + p1.lat().to_radians().sin() + p2.lat().to_radians().sin());
    }

    sum.abs() * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0 / M2_PER_HECTARE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rotation;
    use crate::geometry::plot::generate_vertices;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_degenerate_polygons_are_zero() {
        assert_eq!(polygon_area_hectares(&[]), 0.0);
        assert_eq!(polygon_area_hectares(&[point(0.0, 0.0)]), 0.0);
        assert_eq!(
            polygon_area_hectares(&[point(0.0, 0.0), point(0.0, 0.01)]),
            0.0
        );
    }

    #[test]
    fn test_plot_is_a_tenth_of_a_hectare() {
        let center = point(-4.2156, -69.9406);
        for rot in [0.0, 37.5, 90.0, 210.0] {
            let polygon = generate_vertices(center, Rotation::new(rot).unwrap());
            let area = polygon_area_hectares(polygon.corners());
            assert!(
                (area - 0.1).abs() < 0.001,
                "area {area} at rotation {rot}"
            );
        }
    }

    #[test]
    fn test_triangle_has_positive_area() {
        let triangle = [point(0.0, 0.0), point(0.001, 0.0), point(0.0, 0.001)];
        assert!(polygon_area_hectares(&triangle) > 0.0);
    }

    #[test]
    fn test_winding_direction_does_not_matter() {
        let mut corners = vec![
            point(0.0, 0.0),
            point(0.001, 0.0),
            point(0.001, 0.001),
            point(0.0, 0.001),
        ];
        let forward = polygon_area_hectares(&corners);
        corners.reverse();
        assert!((forward - polygon_area_hectares(&corners)).abs() < 1e-12);
    }

    #[test]
    fn test_matches_geo_chamberlain_duquette() {
        use geo::{ChamberlainDuquetteArea, LineString, Polygon};

        let plot = generate_vertices(point(-4.2156, -69.9406), Rotation::new(25.0).unwrap());
        let exterior: LineString<f64> = plot
            .corners()
            .iter()
            .map(|c| geo::coord! { x: c.lon(), y: c.lat() })
            .collect();
        let reference =
            Polygon::new(exterior, vec![]).chamberlain_duquette_unsigned_area() / 10_000.0;

        let ours = polygon_area_hectares(plot.corners());
        // geo runs the same summation on a different Earth radius
        assert!((ours - reference).abs() / reference < 0.005);
    }
}
