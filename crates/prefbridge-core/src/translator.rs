//! SettingsTranslator: moves preferences between the backend config and the
//! UI preference set.
//!
//! Both directions work the same way:
//!
//! ```text
//! source store ──read──▶ decode / encode ──▶ batch ──commit──▶ target store
//! ```
//!
//! Every value is computed before anything is written, and the batch is
//! handed to the target store in one `commit` call.  The translator keeps no
//! state between calls and never returns an error: malformed backend values
//! decode as `false` for flags, and composite states with no matching rule
//! are skipped (reported in [`TranslationReport::unmatched`]).

use tracing::{debug, warn};

use crate::domain::batch::{BackendBatch, PreferenceBatch};
use crate::domain::store::{BackendConfigStore, PreferenceStore};
use crate::mapping::{Mapping, PreferenceCatalog, SimpleKind};

/// A computed batch plus the composite preferences that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation<B> {
    pub batch: B,
    /// Names of composite preferences with no matching rule.
    pub unmatched: Vec<&'static str>,
}

/// Outcome of one committed translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationReport {
    /// Number of writes in the committed batch.
    pub written: usize,
    /// Composite preferences left untouched.
    pub unmatched: Vec<&'static str>,
}

/// Stateless translator over a preference catalogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsTranslator {
    catalog: PreferenceCatalog,
}

impl SettingsTranslator {
    /// Creates a translator over the built-in catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &PreferenceCatalog {
        &self.catalog
    }

    /// Computes the UI preference batch for the current backend state.
    ///
    /// Nothing is written.  See [`import_from_backend`](Self::import_from_backend).
    pub fn decode<B>(&self, backend: &B) -> Translation<PreferenceBatch>
    where
        B: BackendConfigStore + ?Sized,
    {
        let mut out = Translation::<PreferenceBatch>::default();

        for mapping in self.catalog.mappings() {
            match mapping {
                Mapping::Simple(m) => {
                    let raw = backend.get(m.key.section, m.key.key, m.backend_default);
                    match m.kind {
                        SimpleKind::Text { .. } => out.batch.set_string(m.pref, raw),
                        SimpleKind::Flag { codec, .. } => {
                            out.batch.set_bool(m.pref, codec.decode.decode(&raw))
                        }
                    }
                }
                Mapping::Composite(c) => match c.decode(backend) {
                    Some(value) => out.batch.set_string(c.pref, value),
                    None => {
                        warn!(
                            pref = c.pref,
                            "backend flags match no known choice; leaving preference unchanged"
                        );
                        out.unmatched.push(c.pref);
                    }
                },
            }
        }

        out
    }

    /// Computes the backend write batch for the current UI preferences.
    ///
    /// Nothing is written.  See [`export_to_backend`](Self::export_to_backend).
    pub fn encode<P>(&self, prefs: &P) -> Translation<BackendBatch>
    where
        P: PreferenceStore + ?Sized,
    {
        let mut out = Translation::<BackendBatch>::default();

        for mapping in self.catalog.mappings() {
            match mapping {
                Mapping::Simple(m) => match m.kind {
                    SimpleKind::Text { ui_default } => {
                        out.batch.push(m.key, prefs.get_string(m.pref, ui_default));
                    }
                    SimpleKind::Flag { ui_default, codec } => {
                        let value = prefs.get_bool(m.pref, ui_default);
                        out.batch.push(m.key, codec.encode.encode(value));
                    }
                },
                Mapping::Composite(c) => {
                    let label = prefs.get_string(c.pref, c.ui_default);
                    match c.encode(&label) {
                        Some(writes) => {
                            for w in writes {
                                out.batch.push(w.key, w.literal);
                            }
                        }
                        None => {
                            warn!(
                                pref = c.pref,
                                value = %label,
                                "unknown choice; backend flags not written"
                            );
                            out.unmatched.push(c.pref);
                        }
                    }
                }
            }
        }

        out
    }

    /// Reads the backend, decodes every preference and commits the result to
    /// `prefs` in a single batch.
    pub fn import_from_backend<B, P>(&self, backend: &B, prefs: &mut P) -> TranslationReport
    where
        B: BackendConfigStore + ?Sized,
        P: PreferenceStore + ?Sized,
    {
        let Translation { batch, unmatched } = self.decode(backend);
        let written = batch.len();
        debug!(written, unmatched = unmatched.len(), "committing imported preferences");
        prefs.commit(batch);
        TranslationReport { written, unmatched }
    }

    /// Reads the UI preferences, encodes every one and commits the result to
    /// `backend` in a single batch.
    pub fn export_to_backend<P, B>(&self, prefs: &P, backend: &mut B) -> TranslationReport
    where
        P: PreferenceStore + ?Sized,
        B: BackendConfigStore + ?Sized,
    {
        let Translation { batch, unmatched } = self.encode(prefs);
        let written = batch.len();
        debug!(written, unmatched = unmatched.len(), "committing exported backend config");
        backend.commit(batch);
        TranslationReport { written, unmatched }
    }
}
