use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Invalid record: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed record on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Failed to {action} {}: {source}", path.display())]
    Persistence {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: Box<BookError>,
    },

    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl BookError {
    pub(crate) fn persistence(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: BookError,
    ) -> Self {
        BookError::Persistence {
            action,
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// True when the error (or the error it wraps) is a missing file.
    pub fn is_not_found(&self) -> bool {
        match self {
            BookError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            BookError::Persistence { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, BookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_message_names_the_file() {
        let inner = BookError::Parse {
            line: 3,
            reason: "bad id".to_string(),
        };
        let err = BookError::persistence("load", "people.txt", inner);
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to load people.txt"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn not_found_is_seen_through_persistence_wrapper() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = BookError::persistence("load", "x.json", BookError::Io(io));
        assert!(err.is_not_found());
        assert!(!BookError::Store("nope".into()).is_not_found());
    }
}
