//! Write batches produced by one translator call.
//!
//! The translator never writes to a store piecemeal.  It first computes every
//! value, collects them into a batch, and hands the whole batch to the store's
//! `commit` in a single call so that no partial state becomes visible
//! mid-operation.

use super::value::{BackendKey, PrefValue};

/// One pending backend assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendWrite {
    pub key: BackendKey,
    pub value: String,
}

/// Ordered list of backend assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendBatch {
    writes: Vec<BackendWrite>,
}

impl BackendBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.  A later write to the same key wins when the
    /// batch is applied in order.
    pub fn push(&mut self, key: BackendKey, value: impl Into<String>) {
        self.writes.push(BackendWrite {
            key,
            value: value.into(),
        });
    }

    /// Returns the value the batch would leave at `(section, key)`, if any.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|w| w.key.section == section && w.key.key == key)
            .map(|w| w.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BackendWrite> {
        self.writes.iter()
    }
}

impl IntoIterator for BackendBatch {
    type Item = BackendWrite;
    type IntoIter = std::vec::IntoIter<BackendWrite>;

    fn into_iter(self) -> Self::IntoIter {
        self.writes.into_iter()
    }
}

impl<'a> IntoIterator for &'a BackendBatch {
    type Item = &'a BackendWrite;
    type IntoIter = std::slice::Iter<'a, BackendWrite>;

    fn into_iter(self) -> Self::IntoIter {
        self.writes.iter()
    }
}

/// One pending UI preference assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceWrite {
    pub name: &'static str,
    pub value: PrefValue,
}

/// Ordered list of UI preference assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceBatch {
    writes: Vec<PreferenceWrite>,
}

impl PreferenceBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, name: &'static str, value: bool) {
        self.writes.push(PreferenceWrite {
            name,
            value: PrefValue::Bool(value),
        });
    }

    pub fn set_string(&mut self, name: &'static str, value: impl Into<String>) {
        self.writes.push(PreferenceWrite {
            name,
            value: PrefValue::Text(value.into()),
        });
    }

    /// Returns the value the batch would leave at `name`, if any.
    pub fn get(&self, name: &str) -> Option<&PrefValue> {
        self.writes
            .iter()
            .rev()
            .find(|w| w.name == name)
            .map(|w| &w.value)
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PreferenceWrite> {
        self.writes.iter()
    }
}

impl IntoIterator for PreferenceBatch {
    type Item = PreferenceWrite;
    type IntoIter = std::vec::IntoIter<PreferenceWrite>;

    fn into_iter(self) -> Self::IntoIter {
        self.writes.into_iter()
    }
}

impl<'a> IntoIterator for &'a PreferenceBatch {
    type Item = &'a PreferenceWrite;
    type IntoIter = std::slice::Iter<'a, PreferenceWrite>;

    fn into_iter(self) -> Self::IntoIter {
        self.writes.iter()
    }
}
