//! Operator-entered plot lists.
//!
//! One plot per line as `lat,lon` or `lat,lon,rotation`, all in degrees.
//! Blank lines and `#` comments are skipped.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use crate::domain::{GeoPoint, Rotation};

/// A parsed batch line: a plot center and its rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchEntry {
    pub center: GeoPoint,
    pub rotation: Rotation,
}

/// Read and parse a batch file.
pub fn read_batch(path: &Path) -> Result<Vec<BatchEntry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file: {}", path.display()))?;

    parse_batch(&contents).with_context(|| format!("Failed to parse batch file: {}", path.display()))
}

/// Parse batch entries from text, one entry per line.
pub fn parse_batch(contents: &str) -> Result<Vec<BatchEntry>> {
    let mut entries = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        entries.push(parse_line(line).with_context(|| format!("Line {}: {line:?}", index + 1))?);
    }

    Ok(entries)
}

fn parse_line(line: &str) -> Result<BatchEntry> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 2 && fields.len() != 3 {
        bail!("expected `lat,lon` or `lat,lon,rotation`");
    }

    let lat: f64 = fields[0].parse().context("invalid latitude")?;
    let lon: f64 = fields[1].parse().context("invalid longitude")?;
    let rotation_deg: f64 = match fields.get(2) {
        Some(field) => field.parse().context("invalid rotation")?,
        None => 0.0,
    };

    Ok(BatchEntry {
        center: GeoPoint::new(lat, lon)?,
        rotation: Rotation::new(rotation_deg)?,
    })
}
