//! Generate command handler
//!
//! Generates call detail records around an origin, optionally constrained
//! to a GeoJSON boundary.

use crate::boundary::{extract, Boundary};
use crate::cdr::{resolve_origin, Generator, GeneratorOptions};
use crate::config::Config;
use crate::coord::{Coordinates, LongitudeCorrection};
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::rng::get_source;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Number of call records to create
    #[arg(short = 'n', long)]
    pub records: Option<usize>,

    /// Number of tracking records to create for a single phone
    #[arg(short = 't', long)]
    pub tracking: Option<usize>,

    /// Radius in miles for tracking records
    #[arg(short = 'm', long)]
    pub miles: Option<f64>,

    /// Custom origin as latitude,longitude
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    pub coordinate: Option<Coordinates>,

    /// GeoJSON boundary the locations must fall inside
    #[arg(short = 'b', long)]
    pub boundary: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Apply the longitude correction used by older datasets
    #[arg(long)]
    pub legacy_longitude: bool,

    /// Write output to file
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;

    let format = args.format.unwrap_or_else(|| config.defaults.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    // Loaded once; every location is checked against it
    let boundary: Option<Boundary> = args.boundary.as_deref().map(extract).transpose()?;

    let mut options = GeneratorOptions::from_config(&config);
    if args.legacy_longitude {
        options.correction = LongitudeCorrection::OriginLongitude;
    }

    let rng = get_source(args.seed);
    info!("Using {} random source: {}", rng.name(), rng.description());

    let origin = resolve_origin(
        args.coordinate,
        boundary.as_ref(),
        config.origin()?,
        config.origin.jitter_meters,
        options.correction,
        rng.as_ref(),
    )?;
    info!("Origin {} ({} correction)", origin, options.correction);

    let now = chrono::Local::now().naive_local();
    let generator = Generator::new(origin, boundary.as_ref(), options, now, rng.as_ref());

    let mut records = Vec::new();
    if let Some(count) = args.tracking {
        let miles = args.miles.unwrap_or(config.defaults.tracking_radius_miles);
        records.extend(generator.tracking(count, miles)?);
    }
    records.extend(generator.records(args.records.unwrap_or(config.defaults.records))?);
    info!("Generated {} records", records.len());

    let output = formatter.format(&records)?;
    super::emit(&output, args.output.as_deref())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:8} - {}", format.name, format.description);
    }
}
