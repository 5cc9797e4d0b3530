//! GeoJSON boundary documents
//!
//! Only the parts needed to pull polygon rings out of a FeatureCollection are
//! modelled. Positions are `[longitude, latitude, ...]`; any extra ordinates
//! (elevation, measures) are ignored.

use crate::boundary::Ring;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub(crate) struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub coordinates: Nested,
}

/// Arbitrarily nested coordinate arrays
///
/// Polygon geometries nest positions two deep, MultiPolygons three deep.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Nested {
    Position(Vec<f64>),
    List(Vec<Nested>),
}

impl FeatureCollection {
    /// Parse a document, separating syntax problems from structural ones
    pub fn parse(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| {
            if e.is_data() {
                Error::MissingField(e.to_string())
            } else {
                Error::MalformedSource(e.to_string())
            }
        })
    }

    /// All rings of all features, in document order
    pub fn rings(&self) -> Result<Vec<Ring>> {
        let mut rings = Vec::new();
        for (index, feature) in self.features.iter().enumerate() {
            let before = rings.len();
            collect_rings(&feature.geometry.coordinates, &mut rings)?;
            if rings.len() == before {
                return Err(Error::MissingField(format!(
                    "feature {} has no coordinate rings",
                    index
                )));
            }
        }
        Ok(rings)
    }

    /// A string property of the first feature, if present
    pub fn first_property(&self, key: &str) -> Option<String> {
        self.features
            .first()
            .and_then(|f| f.properties.as_ref())
            .and_then(|p| p.get(key))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

fn collect_rings(node: &Nested, rings: &mut Vec<Ring>) -> Result<()> {
    match node {
        Nested::Position(p) if p.is_empty() => {
            warn!("Skipping empty coordinate array");
            Ok(())
        }
        Nested::Position(_) => Err(Error::MissingField(
            "coordinates must hold rings of positions, found a bare position".to_string(),
        )),
        Nested::List(children) if children.iter().all(is_position) => {
            rings.push(ring_from_positions(children)?);
            Ok(())
        }
        Nested::List(children) => {
            for child in children {
                collect_rings(child, rings)?;
            }
            Ok(())
        }
    }
}

fn is_position(node: &Nested) -> bool {
    matches!(node, Nested::Position(p) if !p.is_empty())
}

fn ring_from_positions(positions: &[Nested]) -> Result<Ring> {
    let points = positions
        .iter()
        .map(|node| match node {
            Nested::Position(p) if p.len() >= 2 => Coordinates::new(p[1], p[0]),
            _ => Err(Error::MissingField(
                "position needs a longitude and a latitude".to_string(),
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    Ring::new(points)
}
