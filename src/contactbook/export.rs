//! Spreadsheet-style export.
//!
//! Exporters only ever see a slice of records, so the book stays free of
//! any export dependency. Callers pass `book.entries()` or search results.

use crate::error::{BookError, Result};
use crate::model::Record;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::info;

pub const HEADERS: [&str; 8] = [
    "ID",
    "First name",
    "Last name",
    "Phone",
    "Birth date",
    "Email",
    "Address",
    "Notes",
];

pub trait Exporter {
    /// Write `records` to `target`. With `append`, add to an existing file
    /// instead of replacing it. Returns the number of records written.
    fn export(&self, records: &[&Record], target: &Path, append: bool) -> Result<usize>;
}

/// Comma-separated output with a header row, readable by any spreadsheet.
#[derive(Debug, Default)]
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn export(&self, records: &[&Record], target: &Path, append: bool) -> Result<usize> {
        if target.is_dir() {
            return Err(BookError::Export(format!(
                "{} is a directory",
                target.display()
            )));
        }

        let has_rows = append && target.metadata().map(|m| m.len() > 0).unwrap_or(false);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(target)?;

        let mut writer = csv::Writer::from_writer(file);
        if !has_rows {
            writer.write_record(HEADERS)?;
        }
        for r in records {
            let id = r.id.to_string();
            let row: [&str; 8] = [
                &id,
                &r.first_name,
                &r.last_name,
                &r.phone_number,
                &r.birth_date,
                &r.email,
                &r.address,
                &r.notes,
            ];
            writer.write_record(row)?;
        }
        writer.flush()?;

        info!(path = %target.display(), count = records.len(), append, "exported contacts");
        Ok(records.len())
    }
}
