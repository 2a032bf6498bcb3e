//! In-memory store implementations.
//!
//! Used by unit tests, integration tests and benches in place of the
//! file-backed adapters.  Each store counts its `commit` calls so tests can
//! check that a translator call applies its batch exactly once.

use std::collections::BTreeMap;

use crate::domain::batch::{BackendBatch, PreferenceBatch};
use crate::domain::store::{BackendConfigStore, PreferenceStore};
use crate::domain::value::PrefValue;

/// A `section → key → value` map implementing [`BackendConfigStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBackendStore {
    sections: BTreeMap<String, BTreeMap<String, String>>,
    commits: usize,
}

impl MemoryBackendStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry without counting as a commit.
    pub fn insert(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, section: &str, key: &str, value: &str) -> Self {
        self.insert(section, key, value);
        self
    }

    pub fn entry(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }

    /// Total number of stored entries across all sections.
    pub fn len(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Entries as sorted `(section, key, value)` triples.
    pub fn entries(&self) -> Vec<(&str, &str, &str)> {
        self.sections
            .iter()
            .flat_map(|(section, keys)| {
                keys.iter()
                    .map(move |(key, value)| (section.as_str(), key.as_str(), value.as_str()))
            })
            .collect()
    }
}

impl BackendConfigStore for MemoryBackendStore {
    fn get(&self, section: &str, key: &str, default: &str) -> String {
        self.entry(section, key).unwrap_or(default).to_string()
    }

    fn set(&mut self, section: &str, key: &str, value: &str) {
        self.insert(section, key, value);
    }

    fn commit(&mut self, batch: BackendBatch) {
        for write in batch {
            self.insert(write.key.section, write.key.key, &write.value);
        }
        self.commits += 1;
    }
}

/// A flat `name → value` map implementing [`PreferenceStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, PrefValue>,
    commits: usize,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<PrefValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn value(&self, name: &str) -> Option<&PrefValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_string(&self, name: &str, default: &str) -> String {
        match self.values.get(name) {
            Some(PrefValue::Text(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.values.get(name) {
            Some(PrefValue::Bool(b)) => *b,
            _ => default,
        }
    }

    fn set_string(&mut self, name: &str, value: &str) {
        self.values
            .insert(name.to_string(), PrefValue::Text(value.to_string()));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.values.insert(name.to_string(), PrefValue::Bool(value));
    }

    fn commit(&mut self, batch: PreferenceBatch) {
        for write in batch {
            self.values.insert(write.name.to_string(), write.value);
        }
        self.commits += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::BackendKey;

    #[test]
    fn test_backend_get_returns_default_on_miss() {
        let store = MemoryBackendStore::new().with("Core", "CPUCore", "1");

        assert_eq!(store.get("Core", "CPUCore", "3"), "1");
        assert_eq!(store.get("Core", "CPUThread", "False"), "False");
        assert_eq!(store.get("Missing", "CPUCore", "x"), "x");
    }

    #[test]
    fn test_backend_commit_applies_batch_and_counts() {
        // Arrange
        let mut store = MemoryBackendStore::new();
        let mut batch = BackendBatch::new();
        batch.push(BackendKey::new("Video_Settings", "UseXFB"), "True");
        batch.push(BackendKey::new("Video_Settings", "UseRealXFB"), "False");

        // Act
        store.commit(batch);

        // Assert
        assert_eq!(store.commits(), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.entry("Video_Settings", "UseXFB"), Some("True"));
    }

    #[test]
    fn test_backend_entries_are_sorted() {
        let store = MemoryBackendStore::new()
            .with("Video_Settings", "MSAA", "0")
            .with("Core", "Fastmem", "True");

        assert_eq!(
            store.entries(),
            vec![
                ("Core", "Fastmem", "True"),
                ("Video_Settings", "MSAA", "0")
            ]
        );
    }

    #[test]
    fn test_preference_reads_of_wrong_type_return_default() {
        let store = MemoryPreferenceStore::new()
            .with("showFPS", "yes")
            .with("gpuPref", true);

        assert!(!store.get_bool("showFPS", false));
        assert_eq!(store.get_string("gpuPref", "OGL"), "OGL");
    }

    #[test]
    fn test_preference_commit_overwrites_and_counts() {
        let mut store = MemoryPreferenceStore::new().with("showFPS", false);
        let mut batch = PreferenceBatch::new();
        batch.set_bool("showFPS", true);
        batch.set_string("FSAA", "2");

        store.commit(batch);

        assert_eq!(store.commits(), 1);
        assert_eq!(store.value("showFPS"), Some(&PrefValue::Bool(true)));
        assert_eq!(store.get_string("FSAA", "0"), "2");
    }
}
