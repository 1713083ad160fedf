//! Fixed-size sampling-rectangle corner generation.

use crate::domain::{Bearing, Distance, GeoPoint, PlotPolygon, Rotation};

use super::geodesic::destination;

/// Rectangle side across the plot axis, in meters.
pub const PLOT_WIDTH_M: f64 = 20.0;
/// Rectangle side along the plot axis, in meters.
pub const PLOT_LENGTH_M: f64 = 50.0;

/// Corner sign table as `(sign_length, sign_width)`, clockwise from the
/// (+length, +width) corner: NE, SE, SW, NW at zero rotation.
const CORNER_SIGNS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// Compute the four corners of the 20 m x 50 m sampling rectangle
/// centered at `center` and rotated clockwise by `rotation`.
///
/// Every corner lies one diagonal half-distance from the center; only
/// its bearing varies, driven by the sign table plus the rotation, so
/// the four corners cannot drift out of sync with each other. At zero
/// rotation the long axis runs north-south.
///
/// Centers within ~0.1 degree of a pole or adjacent to the anti-meridian
/// produce in-range but unverified coordinates (see `destination`).
pub fn generate_vertices(center: GeoPoint, rotation: Rotation) -> PlotPolygon {
    let half_width = PLOT_WIDTH_M / 2.0;
    let half_length = PLOT_LENGTH_M / 2.0;
    let diagonal = Distance::from_meters(half_width.hypot(half_length));
    let rotation_rad = rotation.degrees().to_radians();

    let corners = CORNER_SIGNS.map(|(sign_length, sign_width)| {
        let base = (sign_width * half_width).atan2(sign_length * half_length);
        destination(center, diagonal, Bearing::from_radians(base + rotation_rad))
    });

    PlotPolygon::new(corners)
}
