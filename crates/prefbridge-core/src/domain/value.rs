//! Backend addresses and UI preference values.
//!
//! The backend has no implicit typing: every value is a string, and booleans
//! are conventionally the literals `"True"` and `"False"`.  The UI side is
//! typed, each preference is either a boolean or a string.

use std::fmt;

/// Backend literal for a true flag.
pub const TRUE_LITERAL: &str = "True";
/// Backend literal for a false flag.
pub const FALSE_LITERAL: &str = "False";

/// Returns the backend literal for `value`.
pub const fn bool_literal(value: bool) -> &'static str {
    if value {
        TRUE_LITERAL
    } else {
        FALSE_LITERAL
    }
}

/// A `(section, key)` address in the backend configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BackendKey {
    pub section: &'static str,
    pub key: &'static str,
}

impl BackendKey {
    pub const fn new(section: &'static str, key: &'static str) -> Self {
        Self { section, key }
    }
}

impl fmt::Display for BackendKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.section, self.key)
    }
}

/// A typed UI preference value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefValue {
    Bool(bool),
    Text(String),
}

impl fmt::Display for PrefValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefValue::Bool(b) => write!(f, "{b}"),
            PrefValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for PrefValue {
    fn from(value: bool) -> Self {
        PrefValue::Bool(value)
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        PrefValue::Text(value.to_string())
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        PrefValue::Text(value)
    }
}
