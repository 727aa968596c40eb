//! # Codecs
//!
//! Pure conversions between an ordered slice of [`Record`]s and bytes.
//!
//! Two formats are supported:
//!
//! - [`Format::Json`]: pretty-printed array of objects, camelCase keys. This
//!   is what the default `contacts.json` file uses.
//! - [`Format::Text`]: the legacy interchange format. UTF-8 with a BOM, one
//!   record per line, eight tab-separated fields, no header.
//!
//! The format is picked from the file extension once, at the call boundary,
//! via [`Format::from_path`]. There is no content sniffing.

use crate::error::Result;
use crate::model::Record;
use std::fs;
use std::path::Path;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Text,
}

impl Format {
    /// `.json` (any case) selects JSON, anything else the legacy text codec.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Text,
        }
    }

    pub fn encode(self, records: &[Record]) -> Result<Vec<u8>> {
        match self {
            Format::Json => json::encode(records),
            Format::Text => Ok(text::encode(records)),
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Result<Vec<Record>> {
        match self {
            Format::Json => json::decode(bytes),
            Format::Text => text::decode(bytes),
        }
    }
}

/// Read and decode a file. A missing file is an I/O `NotFound` error.
pub fn read_records(path: &Path, format: Format) -> Result<Vec<Record>> {
    let bytes = fs::read(path)?;
    format.decode(&bytes)
}

pub fn write_records(path: &Path, format: Format, records: &[Record]) -> Result<()> {
    let bytes = format.encode(records)?;
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::from_path(Path::new("a/contacts.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("BACKUP.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("contacts.txt")), Format::Text);
        assert_eq!(Format::from_path(Path::new("contacts.json.bak")), Format::Text);
        assert_eq!(Format::from_path(Path::new("contacts")), Format::Text);
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_records(&dir.path().join("absent.json"), Format::Json).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn text_file_keeps_order_and_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.txt");
        let records = vec![
            Record::new(2, "Grace", "Hopper", "5550001111").with_notes("COBOL"),
            Record::new(1, "Alan", "Turing", "5550002222").with_address("Bletchley"),
        ];

        write_records(&path, Format::Text, &records).unwrap();
        let loaded = read_records(&path, Format::Text).unwrap();
        assert_eq!(loaded, records);
    }
}
