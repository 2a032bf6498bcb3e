//! The static preference catalogue.
//!
//! One ordered table covering every UI preference the front-end exposes.
//! Import and export both walk it top to bottom.

use super::composite::{CompositeMapping, EFB_COPY_METHOD, EXTERNAL_FRAME_BUFFER};
use super::polarity::{FlagCodec, Polarity};
use crate::domain::value::BackendKey;

/// UI-side type and export default of a 1:1 preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleKind {
    /// Free-form string, passed through unchanged.
    Text { ui_default: &'static str },
    /// Boolean flag with its per-direction polarity.
    Flag { ui_default: bool, codec: FlagCodec },
}

/// A UI preference backed by exactly one backend key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleMapping {
    pub pref: &'static str,
    pub key: BackendKey,
    /// Value assumed when the backend has no entry.
    pub backend_default: &'static str,
    pub kind: SimpleKind,
}

/// One row of the catalogue.
#[derive(Debug, Clone, Copy)]
pub enum Mapping {
    Simple(SimpleMapping),
    Composite(&'static CompositeMapping),
}

impl Mapping {
    pub fn pref(&self) -> &'static str {
        match self {
            Mapping::Simple(m) => m.pref,
            Mapping::Composite(m) => m.pref,
        }
    }
}

const fn text(
    pref: &'static str,
    section: &'static str,
    key: &'static str,
    backend_default: &'static str,
    ui_default: &'static str,
) -> Mapping {
    Mapping::Simple(SimpleMapping {
        pref,
        key: BackendKey::new(section, key),
        backend_default,
        kind: SimpleKind::Text { ui_default },
    })
}

const fn flag(
    pref: &'static str,
    section: &'static str,
    key: &'static str,
    backend_default: &'static str,
    ui_default: bool,
) -> Mapping {
    flag_with(pref, section, key, backend_default, ui_default, FlagCodec::DIRECT)
}

const fn flag_with(
    pref: &'static str,
    section: &'static str,
    key: &'static str,
    backend_default: &'static str,
    ui_default: bool,
    codec: FlagCodec,
) -> Mapping {
    Mapping::Simple(SimpleMapping {
        pref,
        key: BackendKey::new(section, key),
        backend_default,
        kind: SimpleKind::Flag { ui_default, codec },
    })
}

/// Every preference, in the order the settings screen lists them.
pub static CATALOG: &[Mapping] = &[
    // CPU
    text("cpuCorePref", "Core", "CPUCore", "3", "0"),
    flag("dualCorePref", "Core", "CPUThread", "False", true),
    flag("fastmemPref", "Core", "Fastmem", "False", false),
    // General video
    text("gpuPref", "Core", "GFXBackend", "Software Renderer", "Software Renderer"),
    flag("showFPS", "Video_Settings", "ShowFPS", "False", false),
    flag("drawOnscreenControls", "Android", "ScreenControls", "True", true),
    // Enhancements
    text("internalResolution", "Video_Settings", "EFBScale", "2", "2"),
    text("FSAA", "Video_Settings", "MSAA", "0", "0"),
    text("anisotropicFiltering", "Video_Enhancements", "MaxAnisotropy", "0", "0"),
    flag("scaledEFBCopy", "Video_Hacks", "EFBScaledCopy", "True", true),
    flag("perPixelLighting", "Video_Settings", "EnablePixelLighting", "False", false),
    flag("forceTextureFiltering", "Video_Enhancements", "ForceFiltering", "False", false),
    flag("disableFog", "Video_Settings", "DisableFog", "False", false),
    // Hacks
    flag_with(
        "skipEFBAccess",
        "Video_Hacks",
        "EFBAccessEnable",
        "False",
        false,
        FlagCodec::new(Polarity::Direct, Polarity::Inverted),
    ),
    flag_with(
        "ignoreFormatChanges",
        "Video_Hacks",
        "EFBEmulateFormatChanges",
        "False",
        false,
        FlagCodec::new(Polarity::Inverted, Polarity::Direct),
    ),
    Mapping::Composite(&EFB_COPY_METHOD),
    text(
        "textureCacheAccuracy",
        "Video_Settings",
        "SafeTextureCacheColorSamples",
        "128",
        "128",
    ),
    Mapping::Composite(&EXTERNAL_FRAME_BUFFER),
    flag("cacheDisplayLists", "Video_Hacks", "DlistCachingEnable", "False", false),
    flag("disableDestinationAlpha", "Video_Settings", "DstAlphaPass", "False", false),
    flag("fastDepthCalculation", "Video_Settings", "FastDepthCalc", "True", true),
];
