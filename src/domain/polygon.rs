use super::GeoPoint;

/// The four corners of a placed sampling rectangle.
///
/// Corners are ordered clockwise starting at the corner reached toward
/// the positive length and width axes: NE, SE, SW, NW under zero
/// rotation. The labels rotate rigidly with the rectangle, and
/// consecutive edges alternate between the 50 m and 20 m sides, long
/// edge first. Consumers that need the opposite winding can reverse the
/// corner sequence they receive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlotPolygon {
    corners: [GeoPoint; 4],
}

impl PlotPolygon {
    pub(crate) fn new(corners: [GeoPoint; 4]) -> Self {
        Self { corners }
    }

    pub fn corners(&self) -> &[GeoPoint; 4] {
        &self.corners
    }

    /// Consecutive corner pairs, wrapping back to the first corner.
    pub fn edges(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        (0..4).map(move |i| (self.corners[i], self.corners[(i + 1) % 4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> PlotPolygon {
        PlotPolygon::new([
            GeoPoint::new(1.0, 1.0).unwrap(),
            GeoPoint::new(-1.0, 1.0).unwrap(),
            GeoPoint::new(-1.0, -1.0).unwrap(),
            GeoPoint::new(1.0, -1.0).unwrap(),
        ])
    }

    #[test]
    fn test_corner_order_preserved() {
        let polygon = square();
        assert_eq!(polygon.corners()[0], GeoPoint::new(1.0, 1.0).unwrap());
        assert_eq!(polygon.corners()[3], GeoPoint::new(1.0, -1.0).unwrap());
    }

    #[test]
    fn test_edges_wrap_around() {
        let polygon = square();
        let edges: Vec<_> = polygon.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].0, polygon.corners()[3]);
        assert_eq!(edges[3].1, polygon.corners()[0]);
    }
}
