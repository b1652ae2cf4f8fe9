//! Markdown documents on disk

use crate::storage::StorageError;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when the caller does not pick one
pub const DEFAULT_DOCUMENT_NAME: &str = "document.md";

/// Write `content` to `dir/name` (or `dir/document.md`) and return the path
pub fn save_markdown(dir: &Path, name: Option<&str>, content: &str) -> Result<PathBuf, StorageError> {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_DOCUMENT_NAME);

    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    fs::write(&path, content)?;

    tracing::info!("Saved markdown to {}", path.display());
    Ok(path)
}

pub fn load_markdown(path: &Path) -> Result<String, StorageError> {
    let content = fs::read_to_string(path)?;
    tracing::debug!("Loaded {} bytes from {}", content.len(), path.display());
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_markdown(dir.path(), None, "# Title").unwrap();
        assert_eq!(path.file_name().unwrap(), DEFAULT_DOCUMENT_NAME);
        assert_eq!(load_markdown(&path).unwrap(), "# Title");
    }

    #[test]
    fn test_blank_name_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_markdown(dir.path(), Some("  "), "x").unwrap();
        assert_eq!(path.file_name().unwrap(), DEFAULT_DOCUMENT_NAME);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_markdown(&dir.path().join("absent.md")).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
