//! Map command handler
//!
//! Turns a CSV file with latitude/longitude columns into a GeoJSON
//! FeatureCollection of points, e.g. for viewing on geojson.io.

use crate::error::Result;
use crate::format::geojson::points_from_csv;
use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Map command arguments
#[derive(Args)]
pub struct MapArgs {
    /// Input CSV file with a header row
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Zero-based position of the latitude column
    #[arg(short = 'x', long = "lat-column")]
    pub lat_column: usize,

    /// Zero-based position of the longitude column
    #[arg(short = 'y', long = "lng-column")]
    pub lng_column: usize,

    /// Minimise the GeoJSON output
    #[arg(short = 'm', long)]
    pub minimise: bool,

    /// Write output to file
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Run the map command
pub fn run(args: MapArgs) -> Result<()> {
    let input = BufReader::new(File::open(&args.input)?);
    let collection = points_from_csv(input, args.lat_column, args.lng_column)?;

    let output = if args.minimise {
        serde_json::to_string(&collection)?
    } else {
        serde_json::to_string_pretty(&collection)?
    };

    super::emit(&output, args.output.as_deref())
}
