//! JSON output formatter

use crate::cdr::CallRecord;
use crate::error::Result;
use crate::format::OutputFormatter;

/// JSON formatter - outputs records as a pretty-printed array
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON array of records"
    }

    fn format(&self, records: &[CallRecord]) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }
}
