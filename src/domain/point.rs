use super::DomainError;

/// Bounds-checked latitude and longitude, in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Create a point, validating latitude into [-90, 90] and longitude
    /// into (-180, 180].
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::Latitude(lat));
        }
        if !(lon > -180.0 && lon <= 180.0) {
            return Err(DomainError::Longitude(lon));
        }

        Ok(Self { lat, lon })
    }

    /// Construct from trigonometric output.
    ///
    /// Callers guarantee the values are already in range: an `asin`
    /// latitude and a renormalized longitude always are.
    pub(crate) fn from_trig(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}
