use super::DomainError;

/// Compass bearing in degrees, clockwise from true north, in [0, 360).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bearing(f64);

impl Bearing {
    /// Create a bearing from degrees.
    ///
    /// Finite input is wrapped into [0, 360), so 450 and -270 both
    /// construct the same bearing as 90. Non-finite input is rejected.
    pub fn new(degrees: f64) -> Result<Self, DomainError> {
        if !degrees.is_finite() {
            return Err(DomainError::Angle(degrees));
        }

        Ok(Self(wrap_degrees(degrees)))
    }

    /// Bearing from an `atan2` result, in radians east of north.
    pub(crate) fn from_radians(radians: f64) -> Self {
        Self(wrap_degrees(radians.to_degrees()))
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub(crate) fn radians(&self) -> f64 {
        self.0.to_radians()
    }
}

/// Rigid rotation of the plot rectangle in degrees, clockwise, in [0, 360).
///
/// Deliberately a separate type from `Bearing` so a rectangle orientation
/// cannot be handed to a function expecting a direction of travel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rotation(f64);

impl Rotation {
    /// Create a rotation from degrees; same wrapping rules as `Bearing`.
    pub fn new(degrees: f64) -> Result<Self, DomainError> {
        if !degrees.is_finite() {
            return Err(DomainError::Angle(degrees));
        }

        Ok(Self(wrap_degrees(degrees)))
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }
}

/// Great-circle distance in meters, finite and non-negative.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub fn new(meters: f64) -> Result<Self, DomainError> {
        if !meters.is_finite() || meters < 0.0 {
            return Err(DomainError::Distance(meters));
        }

        Ok(Self(meters))
    }

    /// Wrap a computed length that is non-negative by construction.
    pub(crate) fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn meters(&self) -> f64 {
        self.0
    }
}

/// Wrap finite degrees into [0, 360).
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0,
/// which is outside the half-open range.
fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
