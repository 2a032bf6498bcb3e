//! Storage infrastructure: file-backed stores and the app config file.
//!
//! - `ini_file`  – the emulator's INI configuration as a
//!   [`BackendConfigStore`](prefbridge_core::BackendConfigStore).
//! - `pref_file` – the flat TOML preference file as a
//!   [`PreferenceStore`](prefbridge_core::PreferenceStore).
//! - `config`    – where those two files live and the default log level.
//!
//! Both stores load fully into memory, take their writes there, and only
//! touch disk again on `persist`, which replaces the file in one rename.

pub mod config;
pub mod ini_file;
pub mod pref_file;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use ini_file::IniFileStore;
pub use pref_file::PreferenceFile;

/// Error type for store file operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference file is not a valid TOML table.
    #[error("failed to parse preferences at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The preferences could not be serialized to TOML.
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Reads `path` to a string, returning `None` if the file does not exist.
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes `content` to a sibling temp file and renames it over `path`.
///
/// Readers see either the old file or the new one, never a partial write.
pub(crate) fn write_atomically(path: &Path, content: &str) -> Result<(), StorageError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| StorageError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));

    std::fs::write(&tmp, content).map_err(|source| StorageError::Io {
        path: tmp.clone(),
        source,
    })?;
    std::fs::rename(&tmp, path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("prefbridge_storage_{}", Uuid::new_v4()))
    }

    #[test]
    fn test_read_optional_returns_none_for_missing_file() {
        let path = scratch_dir().join("absent.ini");
        assert!(read_optional(&path).unwrap().is_none());
    }

    #[test]
    fn test_write_atomically_creates_parent_and_leaves_no_temp_file() {
        // Arrange
        let dir = scratch_dir();
        let path = dir.join("nested").join("Dolphin.ini");

        // Act
        write_atomically(&path, "[Core]\n").unwrap();

        // Assert
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[Core]\n");
        assert!(!dir.join("nested").join(".Dolphin.ini.tmp").exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_atomically_replaces_existing_content() {
        let dir = scratch_dir();
        let path = dir.join("prefs.toml");

        write_atomically(&path, "a = 1\n").unwrap();
        write_atomically(&path, "b = 2\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "b = 2\n");
        std::fs::remove_dir_all(&dir).ok();
    }
}
