//! Synthetic call detail records
//!
//! This module handles:
//! - Subscriber and device identifiers (phone numbers, IMEIs, record IDs)
//! - Random call dates and times around "now"
//! - Generating records whose cell locations walk around an origin,
//!   optionally constrained to a boundary

pub mod data;
pub mod generator;
pub mod identity;

use crate::constants::cdr::CALL_WINDOW_DAYS;
use crate::error::Result;
use crate::rng::{below, RandomSource};
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

pub use generator::{resolve_origin, Generator, GeneratorOptions};

/// One call detail record
///
/// Serialized field names are the CSV column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallRecord {
    #[serde(rename = "Call Type")]
    pub call_type: String,
    #[serde(rename = "Customer Identifier")]
    pub customer: String,
    #[serde(rename = "IMEI")]
    pub imei: String,
    #[serde(rename = "Telephone Number Dialed")]
    pub dialed: String,
    #[serde(rename = "Call Date")]
    pub date: String,
    #[serde(rename = "Call Time")]
    pub time: String,
    #[serde(rename = "Duration")]
    pub duration: u64,
    #[serde(rename = "Country of Origin")]
    pub country: String,
    #[serde(rename = "Network")]
    pub network: String,
    #[serde(rename = "Ring Time")]
    pub ring_time: u64,
    #[serde(rename = "RecordID")]
    pub record_id: Uuid,
    #[serde(rename = "Cell ID")]
    pub cell_id: usize,
    #[serde(rename = "Cell Lat")]
    pub cell_lat: f64,
    #[serde(rename = "Cell Long")]
    pub cell_lng: f64,
}

impl CallRecord {
    /// Column headers, in serialization order
    pub const HEADERS: [&'static str; 14] = [
        "Call Type",
        "Customer Identifier",
        "IMEI",
        "Telephone Number Dialed",
        "Call Date",
        "Call Time",
        "Duration",
        "Country of Origin",
        "Network",
        "Ring Time",
        "RecordID",
        "Cell ID",
        "Cell Lat",
        "Cell Long",
    ];
}

/// A random moment within 30 days either side of `now`
///
/// Picks a whole day in the window, then a random hour, minute and second.
pub fn call_time(now: NaiveDateTime, rng: &dyn RandomSource) -> Result<NaiveDateTime> {
    let start = now - Duration::days(CALL_WINDOW_DAYS);
    let days = below(rng, (2 * CALL_WINDOW_DAYS) as u64)? as i64;
    let hours = below(rng, 24)? as i64;
    let minutes = below(rng, 60)? as i64;
    let seconds = below(rng, 60)? as i64;

    Ok(start
        + Duration::days(days)
        + Duration::hours(hours)
        + Duration::minutes(minutes)
        + Duration::seconds(seconds))
}
