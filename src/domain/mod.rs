pub mod error;
pub mod point;
pub mod polygon;
pub mod units;

pub use error::DomainError;
pub use point::GeoPoint;
pub use polygon::PlotPolygon;
pub use units::{Bearing, Distance, Rotation};
