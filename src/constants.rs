//! Centralized constants for the cdr-gen crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in miles used for great-circle distances
    pub const EARTH_RADIUS_MILES: f64 = 3958.756;

    /// Approximate meters per degree used when sampling around an origin
    pub const METERS_PER_DEGREE: f64 = 111_139.0;

    /// Meters per statute mile
    pub const METERS_PER_MILE: f64 = 1609.344;

    /// Decimal places kept on sampled coordinates (enough to pick out a device)
    pub const COORDINATE_DECIMALS: i32 = 6;

    /// Decimal places kept on distances in miles
    pub const DISTANCE_DECIMALS: i32 = 1;
}

/// Call detail record generation
pub mod cdr {
    /// Days either side of "now" that call dates are drawn from
    pub const CALL_WINDOW_DAYS: i64 = 30;

    /// Call type written to every record (mobile)
    pub const CALL_TYPE: &str = "M";

    /// Phone numbers are truncated to this many characters
    pub const PHONE_NUMBER_LEN: usize = 13;
}
