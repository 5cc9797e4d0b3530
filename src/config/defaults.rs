//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default number of call records to generate
pub const DEFAULT_RECORDS: usize = 100;

/// Default output format
pub const DEFAULT_FORMAT: &str = "csv";

/// Default country of origin written to records
pub const DEFAULT_COUNTRY: &str = "GBR";

/// Default radius in miles for tracking records
pub const DEFAULT_TRACKING_RADIUS_MILES: f64 = 5.0;

/// Default radius in meters around the previous location for call records
pub const DEFAULT_RECORD_RADIUS_METERS: f64 = 8000.0;

/// Default origin (London) latitude
pub const DEFAULT_ORIGIN_LAT: f64 = 51.5074;

/// Default origin (London) longitude
pub const DEFAULT_ORIGIN_LNG: f64 = -0.1278;

/// Meters the default origin is jittered by when no coordinate is given
pub const DEFAULT_ORIGIN_JITTER_METERS: f64 = 8000.0;

/// Default number of draws before giving up on finding an in-boundary point
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "cdr-gen";
