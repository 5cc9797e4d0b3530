//! GeoJSON point output
//!
//! Renders generated records, or the rows of any CSV file with coordinate
//! columns, as a FeatureCollection of Points for plotting on a map.
//! GeoJSON orders positions longitude first.

use crate::cdr::CallRecord;
use crate::coord::is_valid;
use crate::error::{Error, Result};
use crate::format::OutputFormatter;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Read;
use tracing::debug;

/// A FeatureCollection of Point features
#[derive(Debug, Serialize)]
pub struct PointCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    pub features: Vec<PointFeature>,
}

#[derive(Debug, Serialize)]
pub struct PointFeature {
    #[serde(rename = "type")]
    kind: &'static str,
    pub properties: Map<String, Value>,
    pub geometry: PointGeometry,
}

#[derive(Debug, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    kind: &'static str,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

impl PointCollection {
    pub fn new(features: Vec<PointFeature>) -> Self {
        Self {
            kind: "FeatureCollection",
            features,
        }
    }
}

impl PointFeature {
    pub fn new(lat: f64, lng: f64, properties: Map<String, Value>) -> Self {
        Self {
            kind: "Feature",
            properties,
            geometry: PointGeometry {
                kind: "Point",
                coordinates: [lng, lat],
            },
        }
    }
}

/// GeoJSON formatter - one Point feature per record
pub struct GeoJsonFormatter;

impl OutputFormatter for GeoJsonFormatter {
    fn name(&self) -> &str {
        "geojson"
    }

    fn description(&self) -> &str {
        "GeoJSON FeatureCollection of cell locations"
    }

    fn format(&self, records: &[CallRecord]) -> Result<String> {
        let features = records
            .iter()
            .map(|record| -> Result<PointFeature> {
                let mut properties = match serde_json::to_value(record)? {
                    Value::Object(map) => map,
                    _ => Map::new(),
                };
                properties.remove("Cell Lat");
                properties.remove("Cell Long");
                Ok(PointFeature::new(record.cell_lat, record.cell_lng, properties))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(serde_json::to_string_pretty(&PointCollection::new(features))?)
    }
}

/// Convert CSV rows into Point features
///
/// `lat_col` and `lng_col` are zero-based column indexes. Every row is
/// checked before anything is built: a non-numeric coordinate stops at once,
/// out-of-range coordinates are collected and reported together. The other
/// columns become string properties named after the header row.
pub fn points_from_csv<R: Read>(input: R, lat_col: usize, lng_col: usize) -> Result<PointCollection> {
    let mut reader = ::csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();

    for col in [lat_col, lng_col] {
        if col >= headers.len() {
            return Err(Error::InvalidInput(format!(
                "column {} does not exist; the file has {} columns",
                col,
                headers.len()
            )));
        }
    }

    let mut rows = Vec::new();
    let mut invalid = Vec::new();

    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let raw_lat = row.get(lat_col).unwrap_or_default();
        let raw_lng = row.get(lng_col).unwrap_or_default();

        let parse = |v: &str| {
            v.trim().parse::<f64>().map_err(|_| {
                Error::InvalidInput(format!(
                    "check the coordinate columns: row {} has column {} = \"{}\" and column {} = \"{}\"",
                    line, lat_col, raw_lat, lng_col, raw_lng
                ))
            })
        };
        let (lat, lng) = (parse(raw_lat)?, parse(raw_lng)?);

        if !is_valid(lat, lng) {
            invalid.push(format!(
                "Row {} invalid WGS 84 coordinate {}, {}",
                line, raw_lat, raw_lng
            ));
            continue;
        }
        rows.push((lat, lng, row));
    }

    if !invalid.is_empty() {
        return Err(Error::InvalidCoordinate(invalid.join("\n")));
    }

    let features: Vec<PointFeature> = rows
        .into_iter()
        .map(|(lat, lng, row)| {
            let properties = headers
                .iter()
                .zip(row.iter())
                .enumerate()
                .filter(|(i, _)| *i != lat_col && *i != lng_col)
                .map(|(_, (name, value))| (name.to_string(), Value::String(value.to_string())))
                .collect();
            PointFeature::new(lat, lng, properties)
        })
        .collect();

    debug!(features = features.len(), "built point features from CSV");
    Ok(PointCollection::new(features))
}
