//! Geographic boundaries
//!
//! Loads polygon rings from GeoJSON boundary files and answers containment
//! queries against them. A boundary is loaded once per run and then queried
//! for every generated location.

mod geojson;
pub mod polygon;

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use geojson::FeatureCollection;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A closed polygon ring of (latitude, longitude) points
///
/// The last point connects back to the first; the closing point is never
/// stored twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Coordinates>,
}

impl Ring {
    /// Build a ring, dropping a trailing point equal to the first
    pub fn new(mut points: Vec<Coordinates>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::InvalidRing("a ring needs at least one point".to_string()));
        }
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Ok(Self { points })
    }

    /// Parse a ring from `"latitude,longitude"` strings
    ///
    /// Fails on the first entry that is not exactly two numbers or that is
    /// out of range.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self> {
        let points = pairs
            .iter()
            .map(|pair| {
                let pair = pair.as_ref();
                let (lat, lng) = pair.split_once(',').ok_or_else(|| {
                    Error::InvalidRing(format!("\"{}\" is not a latitude,longitude pair", pair))
                })?;
                let parse = |v: &str| {
                    v.trim().parse::<f64>().map_err(|_| {
                        Error::InvalidRing(format!("\"{}\" in \"{}\" is not a number", v, pair))
                    })
                };
                Coordinates::new(parse(lat)?, parse(lng)?)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(points)
    }

    /// Render the ring as `"latitude,longitude"` strings
    pub fn to_pairs(&self) -> Vec<String> {
        self.points.iter().map(Coordinates::to_string).collect()
    }

    pub fn points(&self) -> &[Coordinates] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the ring contains `point` (even-odd rule)
    pub fn contains(&self, point: Coordinates) -> bool {
        polygon::contains(point.lat(), point.lng(), &self.points)
    }
}

/// An ordered set of rings, e.g. the islands of an archipelago
#[derive(Debug, Clone, Default)]
pub struct Boundary {
    rings: Vec<Ring>,
    /// `COUNTRY` property of the first feature
    pub country: Option<String>,
    /// `CODE` property of the first feature
    pub code: Option<String>,
    /// File the boundary was loaded from
    pub source: Option<PathBuf>,
}

impl Boundary {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self {
            rings,
            ..Self::default()
        }
    }

    /// Parse a GeoJSON FeatureCollection
    ///
    /// Every ring of every feature is flattened into one list, in document
    /// order, with positions swapped from `[lon, lat]` to (lat, lon).
    pub fn from_geojson_str(source: &str) -> Result<Self> {
        let collection = FeatureCollection::parse(source)?;
        Ok(Self {
            rings: collection.rings()?,
            country: collection.first_property("COUNTRY"),
            code: collection.first_property("CODE"),
            source: None,
        })
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Total number of points across all rings
    pub fn coordinate_count(&self) -> usize {
        self.rings.iter().map(Ring::len).sum()
    }

    /// Whether any ring contains `point`
    pub fn contains(&self, point: Coordinates) -> bool {
        self.rings.iter().any(|ring| ring.contains(point))
    }

    /// The source file, or the country code or name when built in memory
    pub fn label(&self) -> String {
        match (&self.source, &self.code, &self.country) {
            (Some(path), _, _) => path.display().to_string(),
            (None, Some(name), _) | (None, None, Some(name)) => name.clone(),
            (None, None, None) => format!("{} rings", self.rings.len()),
        }
    }
}

/// Load a boundary from a GeoJSON file
///
/// A missing file is `SourceNotFound`, unparseable JSON `MalformedSource`,
/// and a document without the expected keys `MissingField`.
pub fn extract(path: impl AsRef<Path>) -> Result<Boundary> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::SourceNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    let mut boundary = Boundary::from_geojson_str(&source)?;
    boundary.source = Some(path.to_path_buf());
    info!(
        "Loaded boundary {} ({} rings, {} coordinates)",
        path.display(),
        boundary.len(),
        boundary.coordinate_count()
    );
    for (i, ring) in boundary.rings().iter().enumerate() {
        debug!(ring = i, points = ring.len(), "boundary ring");
    }

    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn c(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const ONE_RING: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"COUNTRY": "Test", "CODE": "TST"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-1.0, 50.0], [1.0, 50.0], [1.0, 52.0], [-1.0, 52.0], [-1.0, 50.0]]]
            }
        }]
    }"#;

    #[test]
    fn test_extract_swaps_and_drops_closing_point() {
        let file = write_temp(ONE_RING);
        let boundary = extract(file.path()).unwrap();

        assert_eq!(boundary.len(), 1);
        let ring = &boundary.rings()[0];
        assert_eq!(
            ring.points(),
            &[c(50.0, -1.0), c(50.0, 1.0), c(52.0, 1.0), c(52.0, -1.0)]
        );
        assert_eq!(boundary.country.as_deref(), Some("Test"));
        assert_eq!(boundary.code.as_deref(), Some("TST"));
    }

    #[test]
    fn test_extract_four_pairs_without_closing_point() {
        let doc = r#"{"features": [{"geometry": {"coordinates":
            [[[10, 0], [10, 10], [0, 10], [0, 0]]]}}]}"#;
        let boundary = Boundary::from_geojson_str(doc).unwrap();
        assert_eq!(
            boundary.rings()[0].points(),
            &[c(0.0, 10.0), c(10.0, 10.0), c(10.0, 0.0), c(0.0, 0.0)]
        );
    }

    #[test]
    fn test_extract_flattens_features_in_order() {
        let doc = r#"{"features": [
            {"geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1]]]}},
            {"geometry": {"type": "MultiPolygon", "coordinates": [
                [[[10, 10], [11, 10], [11, 11]]],
                [[[20, 20], [21, 20], [21, 21]]]
            ]}}
        ]}"#;
        let boundary = Boundary::from_geojson_str(doc).unwrap();
        let firsts: Vec<Coordinates> = boundary.rings().iter().map(|r| r.points()[0]).collect();
        assert_eq!(firsts, vec![c(0.0, 0.0), c(10.0, 10.0), c(20.0, 20.0)]);
        assert_eq!(boundary.coordinate_count(), 9);
    }

    #[test]
    fn test_extract_records_source_path() {
        let file = write_temp(r#"{"features": [{"geometry": {"coordinates": [[[0, 0], [1, 0], [1, 1]]]}}]}"#);
        let boundary = extract(file.path()).unwrap();
        assert_eq!(boundary.source.as_deref(), Some(file.path()));
        assert_eq!(boundary.label(), file.path().display().to_string());
    }

    #[test]
    fn test_label_without_source() {
        let mut boundary = Boundary::new(vec![Ring::from_pairs(&["0,0", "0,1", "1,1"]).unwrap()]);
        assert_eq!(boundary.label(), "1 rings");

        boundary.country = Some("Shetland".to_string());
        assert_eq!(boundary.label(), "Shetland");

        boundary.code = Some("SHE".to_string());
        assert_eq!(boundary.label(), "SHE");
    }

    #[test]
    fn test_extract_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.geojson");
        match extract(&path) {
            Err(Error::SourceNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected SourceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_malformed_file() {
        let file = write_temp("this is not { json");
        assert!(matches!(extract(file.path()), Err(Error::MalformedSource(_))));
    }

    #[test]
    fn test_extract_missing_keys() {
        let file = write_temp(r#"{"features": [{"geometry": {}}]}"#);
        assert!(matches!(extract(file.path()), Err(Error::MissingField(_))));

        let file = write_temp(r#"{"type": "FeatureCollection"}"#);
        assert!(matches!(extract(file.path()), Err(Error::MissingField(_))));
    }

    #[test]
    fn test_extract_rejects_out_of_range_positions() {
        // Projected (metre) coordinates are not WGS 84
        let doc = r#"{"features": [{"geometry": {"coordinates":
            [[[530000, 180000], [531000, 180000], [531000, 181000]]]}}]}"#;
        assert!(matches!(
            Boundary::from_geojson_str(doc),
            Err(Error::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_boundary_contains_any_ring() {
        let boundary = Boundary::from_geojson_str(
            r#"{"features": [{"geometry": {"type": "MultiPolygon", "coordinates": [
                [[[0, 0], [2, 0], [2, 2], [0, 2]]],
                [[[10, 10], [12, 10], [12, 12], [10, 12]]]
            ]}}]}"#,
        )
        .unwrap();

        assert!(boundary.contains(c(1.0, 1.0)));
        assert!(boundary.contains(c(11.0, 11.0)));
        assert!(!boundary.contains(c(5.0, 5.0)));
        assert!(!Boundary::default().contains(c(1.0, 1.0)));
    }

    #[test]
    fn test_ring_pairs_round_trip() {
        let ring = Ring::new(vec![c(60.673332, -0.835), c(60.7, -0.8), c(60.65, -0.75)]).unwrap();
        let pairs = ring.to_pairs();
        assert_eq!(pairs[0], "60.673332,-0.835");
        assert_eq!(Ring::from_pairs(&pairs).unwrap(), ring);
    }

    #[test]
    fn test_ring_from_malformed_pairs() {
        assert!(matches!(
            Ring::from_pairs(&["60.6,-0.8", "60.7"]),
            Err(Error::InvalidRing(_))
        ));
        assert!(matches!(
            Ring::from_pairs(&["60.6,-0.8", "sixty,-0.8"]),
            Err(Error::InvalidRing(_))
        ));
        assert!(matches!(
            Ring::from_pairs(&["60.6,-0.8,12"]),
            Err(Error::InvalidRing(_))
        ));
        assert!(matches!(
            Ring::from_pairs(&["95.0,0.0"]),
            Err(Error::InvalidCoordinate(_))
        ));
        let empty: [&str; 0] = [];
        assert!(matches!(Ring::from_pairs(&empty), Err(Error::InvalidRing(_))));
    }

    #[test]
    fn test_ring_contains() {
        let ring = Ring::from_pairs(&["0,0", "0,10", "10,10", "10,0", "0,0"]).unwrap();
        assert_eq!(ring.len(), 4);
        assert!(ring.contains(c(5.0, 5.0)));
        assert!(!ring.contains(c(15.0, 15.0)));
    }
}
