pub mod area;
pub mod constraint;
pub mod geodesic;
pub mod plot;

pub use area::polygon_area_hectares;
pub use constraint::clamp_to_radius;
pub use geodesic::{EARTH_RADIUS_M, bearing_between, destination, distance};
pub use plot::{PLOT_LENGTH_M, PLOT_WIDTH_M, generate_vertices};

/// Clamp an inverse-trig argument into [-1, 1].
///
/// Floating-point rounding can push haversine and forward-geodesic
/// intermediate terms marginally outside the domain of `asin`/`sqrt`,
/// e.g. for coincident or antipodal point pairs. Every such call site in
/// the crate goes through this one helper.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::clamp_unit;

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(1.0 + f64::EPSILON), 1.0);
        assert_eq!(clamp_unit(-1.0 - f64::EPSILON), -1.0);
        assert_eq!(clamp_unit(0.5), 0.5);
        assert_eq!(clamp_unit(-1.0), -1.0);
    }
}
