use thiserror::Error;

/// Validation failure for an engine input.
///
/// Raised at construction of the value types; no engine operation
/// produces a sentinel NaN coordinate in place of an error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} out of range (-180, 180]")]
    Longitude(f64),
    #[error("distance {0} is not a finite non-negative number of meters")]
    Distance(f64),
    #[error("angle {0} is not a finite number of degrees")]
    Angle(f64),
}
