//! Preference mapping tables.
//!
//! The catalogue is the single list of UI preferences and how each one maps
//! onto the backend.  Composite preferences keep their own ordered decode and
//! encode rule lists, see [`composite`].

pub mod catalog;
pub mod choice;
pub mod composite;
pub mod polarity;

use thiserror::Error;

use crate::domain::store::PreferenceStore;
use crate::domain::value::PrefValue;
pub use catalog::{Mapping, SimpleKind, SimpleMapping, CATALOG};
pub use composite::CompositeMapping;
pub use polarity::{FlagCodec, Polarity};

/// Error type for validating a user-supplied preference edit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("unknown preference {0:?}")]
    UnknownName(String),

    #[error("preference {name} expects true or false, got {value:?}")]
    NotABool { name: &'static str, value: String },

    #[error("preference {name} has no choice {value:?} (expected one of: {choices})")]
    UnknownChoice {
        name: &'static str,
        value: String,
        choices: String,
    },
}

/// Statically known UI type of a preference.
#[derive(Debug, Clone, Copy)]
pub enum PreferenceKind {
    Flag { default: bool },
    Text { default: &'static str },
    Choice(&'static CompositeMapping),
}

/// Read-only view over a preference table.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceCatalog {
    mappings: &'static [Mapping],
}

impl Default for PreferenceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceCatalog {
    /// The built-in Dolphin catalogue.
    pub fn new() -> Self {
        Self { mappings: CATALOG }
    }

    pub fn mappings(&self) -> &'static [Mapping] {
        self.mappings
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.mappings.iter().map(Mapping::pref)
    }

    /// Returns the UI type of `name`, or `None` if it is not catalogued.
    pub fn kind_of(&self, name: &str) -> Option<PreferenceKind> {
        let mapping = self.mappings.iter().find(|m| m.pref() == name)?;
        Some(match mapping {
            Mapping::Simple(SimpleMapping {
                kind: SimpleKind::Flag { ui_default, .. },
                ..
            }) => PreferenceKind::Flag {
                default: *ui_default,
            },
            Mapping::Simple(SimpleMapping {
                kind: SimpleKind::Text { ui_default },
                ..
            }) => PreferenceKind::Text {
                default: *ui_default,
            },
            Mapping::Composite(c) => PreferenceKind::Choice(*c),
        })
    }

    /// Parses `raw` as a value for `name`.
    ///
    /// Flags accept `true`/`false` in either capitalisation used by the two
    /// stores.  Choices must match one of the known labels exactly.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] when the name is unknown or the value does
    /// not fit its type.
    pub fn parse_value(
        &self,
        name: &str,
        raw: &str,
    ) -> Result<(&'static str, PrefValue), PreferenceError> {
        let mapping = self
            .mappings
            .iter()
            .find(|m| m.pref() == name)
            .ok_or_else(|| PreferenceError::UnknownName(name.to_string()))?;
        let pref = mapping.pref();

        match self.kind_of(pref) {
            Some(PreferenceKind::Flag { .. }) => match raw {
                "true" | "True" => Ok((pref, PrefValue::Bool(true))),
                "false" | "False" => Ok((pref, PrefValue::Bool(false))),
                _ => Err(PreferenceError::NotABool {
                    name: pref,
                    value: raw.to_string(),
                }),
            },
            Some(PreferenceKind::Choice(composite)) => {
                if composite.choices().any(|c| c == raw) {
                    Ok((pref, PrefValue::Text(raw.to_string())))
                } else {
                    Err(PreferenceError::UnknownChoice {
                        name: pref,
                        value: raw.to_string(),
                        choices: composite.choices().collect::<Vec<_>>().join(", "),
                    })
                }
            }
            Some(PreferenceKind::Text { .. }) | None => {
                Ok((pref, PrefValue::Text(raw.to_string())))
            }
        }
    }

    /// Reads every catalogued preference from `prefs` with its export
    /// default, in catalogue order.
    pub fn read_all<P>(&self, prefs: &P) -> Vec<(&'static str, PrefValue)>
    where
        P: PreferenceStore + ?Sized,
    {
        self.names()
            .filter_map(|name| {
                let value = match self.kind_of(name)? {
                    PreferenceKind::Flag { default } => {
                        PrefValue::Bool(prefs.get_bool(name, default))
                    }
                    PreferenceKind::Text { default } => {
                        PrefValue::Text(prefs.get_string(name, default))
                    }
                    PreferenceKind::Choice(c) => {
                        PrefValue::Text(prefs.get_string(name, c.ui_default))
                    }
                };
                Some((name, value))
            })
            .collect()
    }
}
