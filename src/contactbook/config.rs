use crate::error::{BookError, Result};
use crate::store::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXTENSION: &str = ".json";

/// Settings stored in `config.json` under the platform config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// File the book auto-loads at startup and rewrites on every change
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Extension appended by `save` when the target has none
    #[serde(default = "default_extension")]
    pub default_extension: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_extension: default_extension(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let mut config: BookConfig = serde_json::from_str(&content).map_err(|e| {
            BookError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        let ext = config.default_extension.clone();
        config.set_default_extension(&ext);
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookError::Serialization)?;
        fs::write(config_path, content).map_err(BookError::Io)?;
        Ok(())
    }

    /// Normalizes to a leading dot
    pub fn set_default_extension(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.default_extension = ext.to_string();
        } else {
            self.default_extension = format!(".{}", ext);
        }
    }

    /// `path` as given if it already has an extension, otherwise with the
    /// default one appended.
    pub fn with_default_extension(&self, path: &Path) -> PathBuf {
        if path.extension().is_some() {
            return path.to_path_buf();
        }
        let mut name = path.as_os_str().to_owned();
        name.push(&self.default_extension);
        PathBuf::from(name)
    }
}
