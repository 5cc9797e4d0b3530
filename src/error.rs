//! Error types for cdr-gen

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cdr-gen operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid radius: {0}")]
    InvalidRadius(String),

    #[error("Boundary file {} not found", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Boundary is not a valid JSON document: {0}")]
    MalformedSource(String),

    #[error("Boundary has an invalid key: {0}")]
    MissingField(String),

    #[error("Invalid ring: {0}")]
    InvalidRing(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Specified coordinate must be within boundary of {0}")]
    OutsideBoundary(String),

    #[error("No location inside the boundary after {attempts} attempts")]
    SamplingExhausted { attempts: usize },

    #[error("Random source error: {0}")]
    Rng(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for cdr-gen operations
pub type Result<T> = std::result::Result<T, Error>;
