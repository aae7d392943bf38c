// ============================================================
// CSV PARSER
// ============================================================
// Parse the menu dataset into ordered records keyed by header

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::error::{AppError, Result};
use crate::domain::menu::{MenuField, MenuRecord};

/// Strict CSV parser: every row must have as many columns as the header
#[derive(Debug, Default)]
pub struct CsvParser;

impl CsvParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a CSV file and return rows
    pub fn parse_file(&self, path: &Path) -> Result<Vec<MenuRecord>> {
        let content = read_with_encoding_fallback(path)?;
        self.parse_content(&content)
    }

    /// Parse CSV content from string. Values are returned as written;
    /// use [`MenuRecord::clean`] to strip whitespace.
    pub fn parse_content(&self, content: &str) -> Result<Vec<MenuRecord>> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::None)
            .flexible(false)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(AppError::ParseError("CSV header row is missing".to_string()));
        }

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            rows.push(Self::parse_row(index, &headers, &record));
        }

        Ok(rows)
    }

    /// Parse and clean in one step
    pub fn parse_clean(&self, content: &str) -> Result<Vec<MenuRecord>> {
        Ok(self
            .parse_content(content)?
            .iter()
            .map(MenuRecord::clean)
            .collect())
    }

    fn parse_row(index: usize, headers: &StringRecord, record: &StringRecord) -> MenuRecord {
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| MenuField::new(header, value))
            .collect();

        MenuRecord::new(index, fields)
    }
}

/// Read a file as UTF-8, falling back to Windows-1252 for legacy exports
fn read_with_encoding_fallback(path: &Path) -> Result<String> {
    let buffer = std::fs::read(path).map_err(|e| {
        AppError::ParseError(format!("Failed to read CSV file {}: {}", path.display(), e))
    })?;

    match String::from_utf8(buffer) {
        Ok(content) => Ok(content),
        Err(err) => {
            tracing::warn!(path = %path.display(), "CSV file is not valid UTF-8, decoding as Windows-1252");
            let (content, _, _) = encoding_rs::WINDOWS_1252.decode(err.as_bytes());
            Ok(content.into_owned())
        }
    }
}
