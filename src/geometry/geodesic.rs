//! Direct and inverse geodesic problems on a spherical Earth.
//!
//! Uses the great-circle model with a fixed mean radius. At plot scale
//! (tens of meters) the error stays well under the field-survey
//! tolerance. Behavior within ~0.1 degree of the poles is a documented
//! limitation.

use crate::domain::{Bearing, Distance, GeoPoint};

use super::clamp_unit;

/// Earth radius in meters for the spherical model.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points (haversine formula).
///
/// Symmetric in its arguments; ~0 for coincident points.
pub fn distance(a: GeoPoint, b: GeoPoint) -> Distance {
    let phi1 = a.lat().to_radians();
    let phi2 = b.lat().to_radians();
    let d_phi = (b.lat() - a.lat()).to_radians();
    let d_lam = (b.lon() - a.lon()).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lam / 2.0).sin().powi(2);
    // h lives in [0, 1]; rounding can overshoot either end
    let h = clamp_unit(h).max(0.0);
    let central_angle = 2.0 * h.sqrt().asin();

    Distance::from_meters(EARTH_RADIUS_M * central_angle)
}

/// Forward geodesic problem: the point reached by traveling `distance`
/// meters along `bearing` from `origin`.
///
/// The result longitude is normalized into (-180, 180]. The latitude
/// comes straight out of `asin` and is not re-clamped beyond its natural
/// range; departures from near-polar origins are out of scope.
pub fn destination(origin: GeoPoint, distance: Distance, bearing: Bearing) -> GeoPoint {
    let phi1 = origin.lat().to_radians();
    let lam1 = origin.lon().to_radians();
    let theta = bearing.radians();
    let delta = distance.meters() / EARTH_RADIUS_M;

    let sin_phi2 = phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos();
    let phi2 = clamp_unit(sin_phi2).asin();
    let lam2 = lam1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    GeoPoint::from_trig(phi2.to_degrees(), normalize_longitude(lam2.to_degrees()))
}

/// Inverse geodesic problem: initial bearing from `a` toward `b`,
/// normalized to [0, 360).
///
/// When the two points (nearly) coincide the result is
/// implementation-defined; callers must not rely on a particular value.
pub fn bearing_between(a: GeoPoint, b: GeoPoint) -> Bearing {
    let phi1 = a.lat().to_radians();
    let phi2 = b.lat().to_radians();
    let d_lam = (b.lon() - a.lon()).to_radians();

    let y = d_lam.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lam.cos();

    Bearing::from_radians(y.atan2(x))
}

/// Wrap a longitude in degrees into (-180, 180].
fn normalize_longitude(lon: f64) -> f64 {
    let wrapped = (lon - 180.0).rem_euclid(360.0);
    if wrapped == 0.0 { 180.0 } else { wrapped - 180.0 }
}
