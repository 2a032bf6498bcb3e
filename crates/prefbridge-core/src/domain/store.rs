//! Store abstractions for both sides of the translation.
//!
//! # Testability
//!
//! Both traits are plain synchronous key/value contracts.  Production code
//! uses file-backed adapters, tests use [`crate::memory`] or the generated
//! `mockall` mocks.

use super::batch::{BackendBatch, PreferenceBatch};
use super::value::PrefValue;

/// The sectioned backend configuration (an INI file in production).
///
/// Reads never fail: a missing entry yields the caller's default.
#[cfg_attr(test, mockall::automock)]
pub trait BackendConfigStore {
    /// Returns the value at `(section, key)`, or `default` when absent.
    fn get(&self, section: &str, key: &str, default: &str) -> String;

    /// Overwrites the value at `(section, key)`.
    fn set(&mut self, section: &str, key: &str, value: &str);

    /// Applies every write of `batch` in order.
    ///
    /// Stores that can make a batch all-or-nothing should override this.
    fn commit(&mut self, batch: BackendBatch) {
        for write in batch {
            self.set(write.key.section, write.key.key, &write.value);
        }
    }
}

/// The flat, name-keyed UI preference set.
///
/// Reads never fail: a missing name, or a value of the other type, yields
/// the caller's default.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    fn get_string(&self, name: &str, default: &str) -> String;
    fn get_bool(&self, name: &str, default: bool) -> bool;
    fn set_string(&mut self, name: &str, value: &str);
    fn set_bool(&mut self, name: &str, value: bool);

    /// Applies every write of `batch` in order.
    ///
    /// Stores that can make a batch all-or-nothing should override this.
    fn commit(&mut self, batch: PreferenceBatch) {
        for write in batch {
            match write.value {
                PrefValue::Bool(b) => self.set_bool(write.name, b),
                PrefValue::Text(s) => self.set_string(write.name, &s),
            }
        }
    }
}
