//! Coordinates and the numeric core
//!
//! This module handles:
//! - Validating WGS 84 latitude/longitude pairs
//! - Great-circle distance between two coordinates
//! - Sampling random points within a radius of an origin

pub mod distance;
pub mod sampler;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Check that a latitude/longitude pair is a valid WGS 84 coordinate
///
/// Latitude: -90 to 90
/// Longitude: -180 to 180
///
/// NaN and infinities are never valid.
pub fn is_valid(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
}

/// A validated geographic coordinate (latitude, longitude)
///
/// The only way to build one is through [`Coordinates::new`], so a value of
/// this type is always within WGS 84 ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Create new coordinates, rejecting out-of-range or non-finite values
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidCoordinate(format!(
                "Latitude {} is out of range [-90, 90]",
                lat
            )));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(Error::InvalidCoordinate(format!(
                "Longitude {} is out of range [-180, 180]",
                lng
            )));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parses `"lat,lng"` (whitespace around either number is allowed)
impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(',');
        let (lat, lng) = match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lng), None) => (lat.trim(), lng.trim()),
            _ => {
                return Err(Error::InvalidCoordinate(format!(
                    "expected \"latitude,longitude\", got \"{}\"",
                    s
                )))
            }
        };
        let parse = |v: &str| {
            v.parse::<f64>()
                .map_err(|_| Error::InvalidCoordinate(format!("\"{}\" is not a number", v)))
        };
        Self::new(parse(lat)?, parse(lng)?)
    }
}

/// How sampling compensates for meridians converging away from the equator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongitudeCorrection {
    /// Stretch the east-west offset by 1 / cos(latitude)
    #[default]
    Latitude,
    /// Legacy: divide the north-south offset by cos(longitude), with the
    /// longitude in degrees fed straight to cosine. Reproduces datasets made
    /// by earlier generator versions; geometrically wrong.
    OriginLongitude,
}

impl fmt::Display for LongitudeCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude => write!(f, "latitude"),
            Self::OriginLongitude => write!(f, "origin_longitude"),
        }
    }
}

impl FromStr for LongitudeCorrection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latitude" => Ok(Self::Latitude),
            "origin_longitude" | "origin-longitude" | "legacy" => Ok(Self::OriginLongitude),
            _ => Err(format!("Unknown longitude correction: {}", s)),
        }
    }
}

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
