//! Output formatters
//!
//! Provides trait-based output formatting for generated call records.

pub mod csv;
pub mod geojson;
pub mod json;

use crate::cdr::CallRecord;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the generated records
    fn format(&self, records: &[CallRecord]) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "csv" => Some(Box::new(csv::CsvFormatter)),
        "json" => Some(Box::new(json::JsonFormatter)),
        "geojson" => Some(Box::new(geojson::GeoJsonFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    ["csv", "json", "geojson"]
        .iter()
        .filter_map(|name| get_formatter(name))
        .map(|f| FormatInfo {
            name: f.name().to_string(),
            description: f.description().to_string(),
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("csv").is_some());
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("geojson").is_some());
        assert!(get_formatter("gpx").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("CSV").is_some());
        assert!(get_formatter("GeoJSON").is_some());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 3);
        assert!(formats.iter().any(|f| f.name == "csv"));
        assert!(formats.iter().any(|f| f.name == "json"));
        assert!(formats.iter().any(|f| f.name == "geojson"));
    }
}
