//! plotgeo - Geodetic placement and area estimation for forestry survey
//! sampling plots

pub mod config;
pub mod domain;
pub mod geometry;
pub mod survey;
