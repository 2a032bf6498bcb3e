//! Composite preferences: one UI choice spread over several backend flags.
//!
//! Decoding is **not** the inverse of encoding, so the two directions are
//! kept as separate ordered rule lists:
//!
//! - decode rules are tried top to bottom and the first rule whose conditions
//!   all hold wins.  Backend states that no rule matches leave the UI
//!   preference untouched.
//! - encode rules are looked up by UI label.  Each rule lists the complete
//!   set of backend writes for its choice.  Unknown labels produce no writes.
//!
//! ```text
//! EFBCopyEnable  EFBToTextureEnable  EFBCopyCacheEnable   → efbCopyMethod
//! ─────────────  ──────────────────  ──────────────────     ─────────────
//! False          *                   *                      Off
//! True           True                *                      Texture
//! True           False               False                  RAM (uncached)
//! True           False               True                   RAM (cached)
//! other          *                   *                      (unchanged)
//! ```

use tracing::trace;

use super::choice::{EfbCopyMethod, XfbMode};
use crate::domain::store::BackendConfigStore;
use crate::domain::value::{BackendKey, FALSE_LITERAL, TRUE_LITERAL};

/// A backend key paired with a literal.
///
/// Used as "must equal" in decode conditions, as "write this" in encode
/// rules, and as "default when absent" in a mapping's input list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagState {
    pub key: BackendKey,
    pub literal: &'static str,
}

impl FlagState {
    pub const fn new(key: BackendKey, literal: &'static str) -> Self {
        Self { key, literal }
    }
}

/// `when` all hold → the UI takes `value`.
#[derive(Debug, Clone, Copy)]
pub struct DecodeRule {
    pub when: &'static [FlagState],
    pub value: &'static str,
}

/// UI holds `value` → apply every entry of `writes`.
#[derive(Debug, Clone, Copy)]
pub struct EncodeRule {
    pub value: &'static str,
    pub writes: &'static [FlagState],
}

/// One composite preference and its two rule lists.
#[derive(Debug, Clone, Copy)]
pub struct CompositeMapping {
    /// UI preference name.
    pub pref: &'static str,
    /// UI value read when the preference store has nothing.
    pub ui_default: &'static str,
    /// Backend flags read on decode, each with its default.
    pub inputs: &'static [FlagState],
    pub decode: &'static [DecodeRule],
    pub encode: &'static [EncodeRule],
}

impl CompositeMapping {
    /// Reads the inputs from `backend` and returns the first matching
    /// rule's UI value, or `None` when no rule matches.
    pub fn decode<B>(&self, backend: &B) -> Option<&'static str>
    where
        B: BackendConfigStore + ?Sized,
    {
        let observed: Vec<(BackendKey, String)> = self
            .inputs
            .iter()
            .map(|input| {
                let raw = backend.get(input.key.section, input.key.key, input.literal);
                (input.key, raw)
            })
            .collect();

        let matched = self.decode.iter().find(|rule| {
            rule.when.iter().all(|cond| {
                observed
                    .iter()
                    .any(|(key, raw)| *key == cond.key && raw == cond.literal)
            })
        });
        if matched.is_none() {
            trace!(pref = self.pref, ?observed, "no decode rule matched");
        }
        matched.map(|rule| rule.value)
    }

    /// Returns the complete backend write set for `ui_value`, or `None` for
    /// an unknown label.
    pub fn encode(&self, ui_value: &str) -> Option<&'static [FlagState]> {
        self.encode
            .iter()
            .find(|rule| rule.value == ui_value)
            .map(|rule| rule.writes)
    }

    /// Every label the encode rules accept, in rule order.
    pub fn choices(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.encode.iter().map(|rule| rule.value)
    }
}

// ── EFB copy method ───────────────────────────────────────────────────────────

const EFB_COPY_ENABLE: BackendKey = BackendKey::new("Video_Hacks", "EFBCopyEnable");
const EFB_TO_TEXTURE: BackendKey = BackendKey::new("Video_Hacks", "EFBToTextureEnable");
const EFB_COPY_CACHE: BackendKey = BackendKey::new("Video_Hacks", "EFBCopyCacheEnable");

const fn on(key: BackendKey) -> FlagState {
    FlagState::new(key, TRUE_LITERAL)
}

const fn off(key: BackendKey) -> FlagState {
    FlagState::new(key, FALSE_LITERAL)
}

/// `efbCopyMethod` ↔ `Video_Hacks/{EFBCopyEnable, EFBToTextureEnable, EFBCopyCacheEnable}`.
pub static EFB_COPY_METHOD: CompositeMapping = CompositeMapping {
    pref: "efbCopyMethod",
    ui_default: EfbCopyMethod::Off.label(),
    inputs: &[off(EFB_COPY_ENABLE), off(EFB_TO_TEXTURE), off(EFB_COPY_CACHE)],
    decode: &[
        DecodeRule {
            when: &[off(EFB_COPY_ENABLE)],
            value: EfbCopyMethod::Off.label(),
        },
        DecodeRule {
            when: &[on(EFB_COPY_ENABLE), on(EFB_TO_TEXTURE)],
            value: EfbCopyMethod::Texture.label(),
        },
        DecodeRule {
            when: &[on(EFB_COPY_ENABLE), off(EFB_TO_TEXTURE), off(EFB_COPY_CACHE)],
            value: EfbCopyMethod::RamUncached.label(),
        },
        DecodeRule {
            when: &[on(EFB_COPY_ENABLE), off(EFB_TO_TEXTURE), on(EFB_COPY_CACHE)],
            value: EfbCopyMethod::RamCached.label(),
        },
    ],
    encode: &[
        EncodeRule {
            value: EfbCopyMethod::Off.label(),
            writes: &[off(EFB_COPY_ENABLE)],
        },
        EncodeRule {
            value: EfbCopyMethod::Texture.label(),
            writes: &[on(EFB_COPY_ENABLE), on(EFB_TO_TEXTURE)],
        },
        EncodeRule {
            value: EfbCopyMethod::RamUncached.label(),
            writes: &[on(EFB_COPY_ENABLE), off(EFB_TO_TEXTURE), off(EFB_COPY_CACHE)],
        },
        EncodeRule {
            value: EfbCopyMethod::RamCached.label(),
            writes: &[on(EFB_COPY_ENABLE), off(EFB_TO_TEXTURE), on(EFB_COPY_CACHE)],
        },
    ],
};

// ── External frame buffer ─────────────────────────────────────────────────────

const USE_XFB: BackendKey = BackendKey::new("Video_Settings", "UseXFB");
const USE_REAL_XFB: BackendKey = BackendKey::new("Video_Settings", "UseRealXFB");

/// `externalFrameBuffer` ↔ `Video_Settings/{UseXFB, UseRealXFB}`.
pub static EXTERNAL_FRAME_BUFFER: CompositeMapping = CompositeMapping {
    pref: "externalFrameBuffer",
    ui_default: XfbMode::Disabled.label(),
    inputs: &[off(USE_XFB), off(USE_REAL_XFB)],
    decode: &[
        DecodeRule {
            when: &[off(USE_XFB)],
            value: XfbMode::Disabled.label(),
        },
        DecodeRule {
            when: &[on(USE_XFB), off(USE_REAL_XFB)],
            value: XfbMode::Virtual.label(),
        },
        DecodeRule {
            when: &[on(USE_XFB), on(USE_REAL_XFB)],
            value: XfbMode::Real.label(),
        },
    ],
    encode: &[
        EncodeRule {
            value: XfbMode::Disabled.label(),
            writes: &[off(USE_XFB)],
        },
        EncodeRule {
            value: XfbMode::Virtual.label(),
            writes: &[on(USE_XFB), off(USE_REAL_XFB)],
        },
        EncodeRule {
            value: XfbMode::Real.label(),
            writes: &[on(USE_XFB), on(USE_REAL_XFB)],
        },
    ],
};
