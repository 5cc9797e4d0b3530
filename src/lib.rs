//! cdr-gen: Synthetic Call Detail Record Generator
//!
//! A library and CLI tool for generating realistic but fake mobile call
//! records, with cell locations sampled around an origin and optionally
//! constrained to a country boundary.
//!
//! ## Features
//!
//! - Coordinate validation and great-circle distance in miles
//! - Uniform point-in-disc sampling with sqrt correction
//! - GeoJSON boundary extraction and even-odd point-in-polygon tests
//! - CSV, JSON and GeoJSON output
//!
//! ## Quick Start
//!
//! ```rust
//! use cdr_gen::coord::{sampler, Coordinates, LongitudeCorrection};
//! use cdr_gen::rng::get_source;
//!
//! let rng = get_source(Some(42));
//! let origin = Coordinates::new(51.5074, -0.1278).unwrap(); // London
//!
//! // A random point within 1 km
//! let point = sampler::sample_point(origin, 1000.0, LongitudeCorrection::Latitude, rng.as_ref()).unwrap();
//! println!("Random point: {}", point);
//!
//! let miles = cdr_gen::coord::distance::distance_miles(origin, point);
//! assert!(miles <= 0.7);
//! ```

pub mod boundary;
pub mod cdr;
pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod rng;

// Re-export commonly used types
pub use boundary::{Boundary, Ring};
pub use cdr::{CallRecord, Generator};
pub use config::Config;
pub use coord::{Coordinates, LongitudeCorrection};
pub use error::{Error, Result};
