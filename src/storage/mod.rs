//! Persistent storage
//!
//! Local key/value storage and the services built on it: plans, favorites,
//! response history, settings and markdown documents.

pub mod documents;
pub mod favorites;
pub mod history;
pub mod plans;
pub mod settings;
pub mod store;

use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

pub use favorites::FavoritesStore;
pub use history::ResponseHistory;
pub use plans::PlanService;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "MARKPAD_DATA_DIR";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine a data directory")]
    NoDataDir,
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Directory holding the store, settings and documents
///
/// `MARKPAD_DATA_DIR` wins over the platform data directory.
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    data_dir_from(std::env::var_os(DATA_DIR_ENV))
}

fn data_dir_from(override_dir: Option<OsString>) -> Result<PathBuf, StorageError> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    // Linux: ~/.local/share/markpad
    // macOS: ~/Library/Application Support/com.Markpad.markpad
    // Windows: %APPDATA%\Markpad\markpad\data
    directories::ProjectDirs::from("com", "Markpad", "markpad")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StorageError::NotFound {
            kind: "Plan",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Plan with ID 42 not found");
    }

    #[test]
    fn test_validation_message_joins() {
        let err = StorageError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "a, b");
    }

    #[test]
    fn test_data_dir_override() {
        let dir = data_dir_from(Some(OsString::from("/tmp/markpad-data"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/markpad-data"));
    }

    #[test]
    fn test_blank_override_falls_back_to_platform_dir() {
        let fallback = data_dir_from(Some(OsString::new()));
        let platform = data_dir_from(None);
        assert_eq!(fallback.ok(), platform.ok());
    }
}
