//! Boundary command handler
//!
//! Reports the rings and coordinate counts of GeoJSON boundary files.

use crate::boundary::{extract, Boundary};
use crate::error::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Boundary command arguments
#[derive(Args)]
pub struct BoundaryArgs {
    /// GeoJSON files to inspect
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Run the boundary command
///
/// A file that fails to load is reported and the rest are still checked.
pub fn run(args: BoundaryArgs) -> Result<()> {
    report(&args.files, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Summaries go to `out`, load failures to `err`
fn report(paths: &[PathBuf], out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    for path in paths {
        match extract(path) {
            Ok(boundary) => writeln!(out, "{} in {}", summary(&boundary), path.display())?,
            Err(e) => writeln!(err, "{}: {}", path.display(), e)?,
        }
    }
    Ok(())
}

fn summary(boundary: &Boundary) -> String {
    let label = match (&boundary.code, &boundary.country) {
        (Some(code), Some(country)) => format!("{} {} ", code, country),
        (None, Some(name)) | (Some(name), None) => format!("{} ", name),
        (None, None) => String::new(),
    };
    format!(
        "{}{} rings, {} coordinates",
        label,
        boundary.len(),
        boundary.coordinate_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_with_labels() {
        let boundary = Boundary::from_geojson_str(
            r#"{"features": [{"properties": {"COUNTRY": "Shetland", "CODE": "SHE"},
                "geometry": {"coordinates": [[[-1, 60], [-0.8, 60], [-0.8, 60.2], [-1, 60]]]}}]}"#,
        )
        .unwrap();
        assert_eq!(summary(&boundary), "SHE Shetland 1 rings, 3 coordinates");
    }

    #[test]
    fn test_report_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.geojson");
        let missing = dir.path().join("missing.geojson");
        let malformed = dir.path().join("malformed.geojson");
        let last = dir.path().join("last.geojson");

        let doc = r#"{"features": [{"geometry": {"coordinates": [[[0, 0], [1, 0], [1, 1]]]}}]}"#;
        std::fs::write(&first, doc).unwrap();
        std::fs::write(&malformed, "{ not json").unwrap();
        std::fs::write(&last, doc).unwrap();

        let paths = vec![first.clone(), missing.clone(), malformed.clone(), last.clone()];
        let (mut out, mut err) = (Vec::new(), Vec::new());
        report(&paths, &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        let out_lines: Vec<&str> = out.lines().collect();
        let err_lines: Vec<&str> = err.lines().collect();

        assert_eq!(
            out_lines,
            vec![
                format!("1 rings, 3 coordinates in {}", first.display()),
                format!("1 rings, 3 coordinates in {}", last.display()),
            ]
        );
        assert_eq!(err_lines.len(), 2);
        assert_eq!(
            err_lines[0],
            format!("{}: Boundary file {} not found", missing.display(), missing.display())
        );
        assert!(err_lines[1].starts_with(&format!(
            "{}: Boundary is not a valid JSON document",
            malformed.display()
        )));
    }

    #[test]
    fn test_summary_without_labels() {
        let boundary = Boundary::from_geojson_str(
            r#"{"features": [{"geometry": {"coordinates": [[[0, 0], [1, 0], [1, 1]]]}}]}"#,
        )
        .unwrap();
        assert_eq!(summary(&boundary), "1 rings, 3 coordinates");
    }
}
