//! Typed views of the two composite UI choices.
//!
//! The stores only ever see the label strings.  These enums exist so callers
//! can build and match on choices without spelling the labels by hand.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A label that is not one of the known choices for a composite preference.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} choice {value:?}")]
pub struct ChoiceParseError {
    pub kind: &'static str,
    pub value: String,
}

/// How the emulator copies the embedded frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EfbCopyMethod {
    #[default]
    Off,
    Texture,
    RamUncached,
    RamCached,
}

impl EfbCopyMethod {
    pub const ALL: [EfbCopyMethod; 4] = [
        EfbCopyMethod::Off,
        EfbCopyMethod::Texture,
        EfbCopyMethod::RamUncached,
        EfbCopyMethod::RamCached,
    ];

    /// The label stored in the UI preference set.
    pub const fn label(self) -> &'static str {
        match self {
            EfbCopyMethod::Off => "Off",
            EfbCopyMethod::Texture => "Texture",
            EfbCopyMethod::RamUncached => "RAM (uncached)",
            EfbCopyMethod::RamCached => "RAM (cached)",
        }
    }
}

impl fmt::Display for EfbCopyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EfbCopyMethod {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| ChoiceParseError {
                kind: "EFB copy method",
                value: s.to_string(),
            })
    }
}

/// External frame buffer emulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum XfbMode {
    #[default]
    Disabled,
    Virtual,
    Real,
}

impl XfbMode {
    pub const ALL: [XfbMode; 3] = [XfbMode::Disabled, XfbMode::Virtual, XfbMode::Real];

    pub const fn label(self) -> &'static str {
        match self {
            XfbMode::Disabled => "Disabled",
            XfbMode::Virtual => "Virtual",
            XfbMode::Real => "Real",
        }
    }
}

impl fmt::Display for XfbMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for XfbMode {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| ChoiceParseError {
                kind: "external frame buffer",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_efb_copy_method_parses_every_label() {
        for method in EfbCopyMethod::ALL {
            assert_eq!(method.label().parse::<EfbCopyMethod>(), Ok(method));
        }
    }

    #[test]
    fn test_xfb_mode_parses_every_label() {
        for mode in XfbMode::ALL {
            assert_eq!(mode.to_string().parse::<XfbMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_choice_parse_is_case_sensitive() {
        let err = "ram (cached)".parse::<EfbCopyMethod>().unwrap_err();
        assert_eq!(err.value, "ram (cached)");
        assert!(err.to_string().contains("EFB copy method"));
        assert!("real".parse::<XfbMode>().is_err());
    }

    #[test]
    fn test_defaults_are_off_and_disabled() {
        assert_eq!(EfbCopyMethod::default(), EfbCopyMethod::Off);
        assert_eq!(XfbMode::default(), XfbMode::Disabled);
    }
}
