//! TOML file adapter for the flat UI preference set.
//!
//! The file is a single top-level table with no sections:
//!
//! ```toml
//! cpuCorePref = "1"
//! dualCorePref = true
//! efbCopyMethod = "RAM (cached)"
//! ```
//!
//! Values that are neither a boolean nor a string are kept on save but read
//! as the caller's default, like a value of the wrong type.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use prefbridge_core::{PrefValue, PreferenceBatch, PreferenceStore};
use tracing::debug;

use super::{read_optional, write_atomically, StorageError};
use crate::application::sync_settings::PersistentStore;

/// The preference file, held in memory between `open` and `persist`.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceFile {
    path: PathBuf,
    values: BTreeMap<String, toml::Value>,
}

impl PreferenceFile {
    /// Loads `path`, or starts empty if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] for file-system errors other than
    /// "not found", and [`StorageError::Parse`] if the TOML is malformed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = match read_optional(&path)? {
            Some(text) => toml::from_str(&text).map_err(|source| StorageError::Parse {
                path: path.clone(),
                source,
            })?,
            None => BTreeMap::new(),
        };
        debug!(path = %path.display(), entries = values.len(), "loaded preferences");
        Ok(Self { path, values })
    }

    /// Creates an empty store that will save to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the typed value stored under `name`, if it is a bool or string.
    pub fn value(&self, name: &str) -> Option<PrefValue> {
        match self.values.get(name)? {
            toml::Value::Boolean(b) => Some(PrefValue::Bool(*b)),
            toml::Value::String(s) => Some(PrefValue::Text(s.clone())),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Renders the current contents as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, StorageError> {
        Ok(toml::to_string_pretty(&self.values)?)
    }

    /// Writes the contents back to [`path`](Self::path).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the write fails.
    pub fn save(&self) -> Result<(), StorageError> {
        write_atomically(&self.path, &self.to_toml_string()?)
    }
}

impl PreferenceStore for PreferenceFile {
    fn get_string(&self, name: &str, default: &str) -> String {
        match self.values.get(name) {
            Some(toml::Value::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.values.get(name) {
            Some(toml::Value::Boolean(b)) => *b,
            _ => default,
        }
    }

    fn set_string(&mut self, name: &str, value: &str) {
        self.values
            .insert(name.to_string(), toml::Value::String(value.to_string()));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.values
            .insert(name.to_string(), toml::Value::Boolean(value));
    }

    fn commit(&mut self, batch: PreferenceBatch) {
        for write in batch {
            let value = match write.value {
                PrefValue::Bool(b) => toml::Value::Boolean(b),
                PrefValue::Text(s) => toml::Value::String(s),
            };
            self.values.insert(write.name.to_string(), value);
        }
    }
}

impl PersistentStore for PreferenceFile {
    type Error = StorageError;

    fn persist(&self) -> Result<(), StorageError> {
        self.save()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
