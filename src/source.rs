//! Reading record rows out of an exported console table.

use crate::error::{ExportError, Result};
use crate::zone::RawRecordRow;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Number of cells a table row needs to describe a record
pub const ROW_FIELDS: usize = 4;

/// Table export formats understood by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceFormat {
    /// Comma-separated cells
    Csv,
    /// Tab-separated cells
    Tsv,
    /// JSON array of `{name, ttl, type, data}` objects
    Json,
}

impl SourceFormat {
    /// Guess the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(SourceFormat::Csv),
            "tsv" | "tab" => Some(SourceFormat::Tsv),
            "json" => Some(SourceFormat::Json),
            _ => None,
        }
    }
}

/// Reads raw record rows from a table export
#[derive(Debug, Clone)]
pub struct RowReader {
    format: SourceFormat,
    has_headers: bool,
}

#[derive(Debug, Deserialize)]
struct JsonRow {
    name: Option<String>,
    #[serde(default)]
    ttl: Option<serde_json::Value>,
    #[serde(rename = "type")]
    rtype: Option<String>,
    #[serde(default)]
    data: Option<String>,
}

impl RowReader {
    pub fn new(format: SourceFormat) -> Self {
        Self {
            format,
            has_headers: true,
        }
    }

    /// Whether the first CSV/TSV row is a header row
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Read all rows. An empty table yields an empty vector.
    pub fn read<R: Read>(&self, reader: R) -> Result<Vec<RawRecordRow>> {
        let rows = match self.format {
            SourceFormat::Csv => self.read_delimited(reader, b',')?,
            SourceFormat::Tsv => self.read_delimited(reader, b'\t')?,
            SourceFormat::Json => Self::read_json(reader)?,
        };
        debug!("Read {} record rows ({:?})", rows.len(), self.format);
        Ok(rows)
    }

    /// Read rows from a file on disk
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<RawRecordRow>> {
        let file = std::fs::File::open(path.as_ref()).map_err(|e| {
            ExportError::ExtractionFailed(format!("{}: {}", path.as_ref().display(), e))
        })?;
        self.read(file)
    }

    fn read_delimited<R: Read>(&self, reader: R, delimiter: u8) -> Result<Vec<RawRecordRow>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            if record.len() < ROW_FIELDS {
                warn!(
                    "Skipping table row {}: {} cells, need {}",
                    index + 1,
                    record.len(),
                    ROW_FIELDS
                );
                continue;
            }
            rows.push(RawRecordRow::new(
                &record[0], &record[1], &record[2], &record[3],
            ));
        }
        Ok(rows)
    }

    fn read_json<R: Read>(mut reader: R) -> Result<Vec<RawRecordRow>> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<JsonRow> = serde_json::from_str(&contents)?;
        let mut rows = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let (Some(name), Some(rtype)) = (entry.name, entry.rtype) else {
                warn!("Skipping JSON row {}: missing name or type", index + 1);
                continue;
            };
            let ttl = match entry.ttl {
                Some(serde_json::Value::String(ttl)) => ttl,
                Some(serde_json::Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            };
            rows.push(RawRecordRow::new(
                name,
                ttl,
                rtype,
                entry.data.unwrap_or_default(),
            ));
        }
        Ok(rows)
    }
}
