use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use plotgeo::config::FileConfig;
use plotgeo::domain::{Bearing, Distance, GeoPoint, PlotPolygon, Rotation};
use plotgeo::geometry::{
    clamp_to_radius, destination, distance, generate_vertices, polygon_area_hectares,
};
use plotgeo::survey::{PlotRecord, read_batch, write_records};

/// Place fixed-size 20 m x 50 m forestry sampling plots on the Earth's
/// surface and estimate their area
///
/// Examples:
///   # Manual entry: plot centered on a surveyed point
///   plotgeo --lat -4.2156 --lon -69.9406
///
///   # Rotated plot with JSON output for the storage backend
///   plotgeo --lat -4.2156 --lon -69.9406 --rotation 30 -o plot.json
///
///   # Derive the center 120 m north-east of a reference tree, capped
///   # at 100 m from it
///   plotgeo --ref-lat -4.2156 --ref-lon -69.9406 --distance 120 --bearing 45 --max-radius 100
///
///   # Batch placement from a plot list (lat,lon[,rotation] per line)
///   plotgeo --batch plots.txt -o plots.json
#[derive(Parser, Debug)]
#[command(name = "plotgeo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches plotgeo.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Plot center latitude in degrees (manual entry; use with --lon)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Plot center longitude in degrees (use with --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Reference point latitude for derived placement (use with --ref-lon)
    #[arg(long, requires = "ref_lon", allow_hyphen_values = true)]
    ref_lat: Option<f64>,

    /// Reference point longitude (use with --ref-lat)
    #[arg(long, requires = "ref_lat", allow_hyphen_values = true)]
    ref_lon: Option<f64>,

    /// Distance from the reference point in meters (use with --bearing)
    #[arg(long, requires = "bearing")]
    distance: Option<f64>,

    /// Bearing from the reference point in degrees clockwise from north
    #[arg(long, requires = "distance")]
    bearing: Option<f64>,

    /// Maximum allowed distance of the center from the reference point, in meters
    #[arg(long)]
    max_radius: Option<f64>,

    /// Plot rotation in degrees clockwise
    #[arg(long, allow_hyphen_values = true)]
    rotation: Option<f64>,

    /// Batch file of `lat,lon[,rotation]` lines, one plot per line
    #[arg(short = 'b', long)]
    batch: Option<PathBuf>,

    /// Output JSON file for the placed plot records
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let rotation_deg = args
        .rotation
        .unwrap_or_else(|| file_config.as_ref().map(|c| c.rotation).unwrap_or(0.0));
    let max_radius_m = args
        .max_radius
        .unwrap_or_else(|| file_config.as_ref().map(|c| c.max_radius).unwrap_or(1000.0));
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()));
    let lat = args.lat.or_else(|| file_config.as_ref().and_then(|c| c.lat));
    let lon = args.lon.or_else(|| file_config.as_ref().and_then(|c| c.lon));

    if args.batch.is_some() && (lat.is_some() || args.ref_lat.is_some()) {
        bail!("--batch is mutually exclusive with --lat/--lon and --ref-lat/--ref-lon");
    }

    println!("plotgeo - Sampling Plot Placement");
    println!("=================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Rotation: {:.1} deg", rotation_deg);
        println!("  Max radius: {:.1} m", max_radius_m);
        if let Some(ref path) = output {
            println!("  Output: {}", path.display());
        }
        println!();
    }

    let rotation = Rotation::new(rotation_deg).context("Invalid rotation")?;

    let records = if let Some(ref batch_path) = args.batch {
        let entries = read_batch(batch_path)?;
        if entries.is_empty() {
            bail!("Batch file contains no plots: {}", batch_path.display());
        }

        let pb = ProgressBar::new(entries.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:40.green} {pos}/{len} {msg}").unwrap(),
        );

        let mut records = Vec::with_capacity(entries.len());
        for entry in &entries {
            let polygon = generate_vertices(entry.center, entry.rotation);
            let area = polygon_area_hectares(polygon.corners());
            records.push(PlotRecord::new(entry.center, entry.rotation, &polygon, area));
            pb.inc(1);
        }
        pb.finish_with_message(format!("Placed {} plots", records.len()));
        records
    } else {
        let center = resolve_center(&args, lat, lon, max_radius_m, verbose)?;
        let polygon = generate_vertices(center, rotation);
        let area = polygon_area_hectares(polygon.corners());
        print_plot(center, rotation, &polygon, area, verbose);
        vec![PlotRecord::new(center, rotation, &polygon, area)]
    };

    if let Some(ref output_path) = output {
        write_records(output_path, &records).context("Failed to write plot records")?;
        println!();
        println!("Output: {}", output_path.display());
    }

    Ok(())
}

/// Resolve the plot center from either the manual-entry flags or the
/// reference + distance + bearing placement flow.
fn resolve_center(
    args: &Args,
    lat: Option<f64>,
    lon: Option<f64>,
    max_radius_m: f64,
    verbose: bool,
) -> Result<GeoPoint> {
    if let (Some(lat), Some(lon)) = (lat, lon) {
        return GeoPoint::new(lat, lon).context("Invalid plot center");
    }

    let (Some(ref_lat), Some(ref_lon)) = (args.ref_lat, args.ref_lon) else {
        bail!(
            "Must provide --lat/--lon, or --ref-lat/--ref-lon with --distance and --bearing, or --batch"
        );
    };
    let (Some(distance_m), Some(bearing_deg)) = (args.distance, args.bearing) else {
        bail!("--ref-lat/--ref-lon require --distance and --bearing");
    };

    let reference = GeoPoint::new(ref_lat, ref_lon).context("Invalid reference point")?;
    let offset = Distance::new(distance_m).context("Invalid distance")?;
    let bearing = Bearing::new(bearing_deg).context("Invalid bearing")?;
    let max_radius = Distance::new(max_radius_m).context("Invalid maximum radius")?;

    let candidate = destination(reference, offset, bearing);
    let center = clamp_to_radius(reference, candidate, max_radius);

    if verbose {
        let placed = distance(reference, center);
        println!(
            "  Reference: ({:.7}, {:.7})",
            reference.lat(),
            reference.lon()
        );
        println!(
            "  Center placed {:.1} m from reference (limit {:.1} m)",
            placed.meters(),
            max_radius.meters()
        );
        if offset > max_radius {
            println!(
                "  Requested distance {:.1} m exceeded the limit; center pulled back",
                offset.meters()
            );
        }
        println!();
    }

    Ok(center)
}

fn print_plot(
    center: GeoPoint,
    rotation: Rotation,
    polygon: &PlotPolygon,
    area_ha: f64,
    verbose: bool,
) {
    println!("Center:   ({:.7}, {:.7})", center.lat(), center.lon());
    println!("Rotation: {:.1} deg", rotation.degrees());
    println!("Area:     {:.4} ha", area_ha);
    println!();
    println!("Corners (lat, lon), clockwise from the north-east corner at zero rotation:");
    for corner in polygon.corners() {
        println!("  {:.7}, {:.7}", corner.lat(), corner.lon());
    }

    if verbose {
        println!();
        println!("Edge lengths:");
        for (a, b) in polygon.edges() {
            println!("  {:.3} m", distance(a, b).meters());
        }
    }
}
