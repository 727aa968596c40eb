use super::{Repository, DEFAULT_DATA_FILE};
use crate::codec::json;
use crate::error::{BookError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Keeps the book in a single JSON file.
pub struct FileRepository {
    path: PathBuf,
}

impl Default for FileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_DATA_FILE);
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl Repository for FileRepository {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet");
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path).map_err(BookError::Io)?;
        let records = json::decode(&bytes)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded data file");
        Ok(records)
    }

    fn persist(&self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;
        let bytes = json::encode(records)?;

        // Atomic write
        let tmp = self.tmp_path();
        fs::write(&tmp, bytes).map_err(BookError::Io)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(BookError::Io(e));
        }

        debug!(path = %self.path.display(), count = records.len(), "persisted data file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let repo = FileRepository::new(dir.path().join("contacts.json"));
        assert!(repo.load().unwrap().is_empty());
        assert!(!repo.path().exists());
    }

    #[test]
    fn persist_then_load() {
        let dir = TempDir::new().unwrap();
        let repo = FileRepository::new(dir.path().join("contacts.json"));
        let records = vec![
            Record::new(3, "C", "Three", "333"),
            Record::new(1, "A", "One", "111"),
        ];

        repo.persist(&records).unwrap();
        assert_eq!(repo.load().unwrap(), records);
    }

    #[test]
    fn persist_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let repo = FileRepository::new(dir.path().join("nested/deeper/contacts.json"));
        repo.persist(&[Record::new(1, "A", "B", "C")]).unwrap();
        assert!(repo.path().exists());
    }

    #[test]
    fn persist_leaves_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let repo = FileRepository::new(dir.path().join("contacts.json"));
        repo.persist(&[Record::new(1, "A", "B", "C")]).unwrap();
        repo.persist(&[]).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "{ definitely not json").unwrap();
        let err = FileRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, BookError::Serialization(_)));
    }

    #[test]
    fn default_points_at_contacts_json() {
        assert_eq!(FileRepository::default().path(), Path::new("contacts.json"));
    }
}
