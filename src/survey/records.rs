//! Plain-number plot records for downstream storage.
//!
//! The engine produces coordinates; whatever schema the survey backend
//! wants is its own concern. These records are the CLI's JSON rendering
//! of those numbers.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{GeoPoint, PlotPolygon, Rotation};

/// One placed plot: center, rotation, corner coordinates, estimated area.
#[derive(Debug, Clone, Serialize)]
pub struct PlotRecord {
    /// Center as a (lat, lon) pair in degrees.
    pub center: [f64; 2],
    pub rotation_deg: f64,
    /// Corner (lat, lon) pairs, clockwise from the (+length, +width)
    /// corner.
    pub corners: [[f64; 2]; 4],
    pub area_ha: f64,
}

impl PlotRecord {
    pub fn new(center: GeoPoint, rotation: Rotation, polygon: &PlotPolygon, area_ha: f64) -> Self {
        Self {
            center: [center.lat(), center.lon()],
            rotation_deg: rotation.degrees(),
            corners: polygon.corners().map(|c| [c.lat(), c.lon()]),
            area_ha,
        }
    }
}

/// Write records to a pretty-printed JSON file.
pub fn write_records(path: &Path, records: &[PlotRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records).context("Failed to encode plot records")?;
    writer.flush()?;

    Ok(())
}
