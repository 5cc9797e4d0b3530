//! CSV output formatter

use crate::cdr::CallRecord;
use crate::error::{Error, Result};
use crate::format::OutputFormatter;
use csv::{QuoteStyle, WriterBuilder};

/// CSV formatter - header row plus one row per record, every field quoted
pub struct CsvFormatter;

impl OutputFormatter for CsvFormatter {
    fn name(&self) -> &str {
        "csv"
    }

    fn description(&self) -> &str {
        "Quoted CSV with a header row"
    }

    fn format(&self, records: &[CallRecord]) -> Result<String> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .from_writer(Vec::new());

        // Written by hand so an empty run still gets a header
        writer.write_record(CallRecord::HEADERS)?;
        for record in records {
            writer.serialize(record)?;
        }

        let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}
