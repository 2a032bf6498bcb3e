//! SyncSettingsUseCase: one import or export pass between the two stores.
//!
//! ```text
//! Import:  backend ──decode──▶ prefs.commit ──▶ prefs.persist
//! Export:  prefs   ──encode──▶ backend.commit ──▶ backend.persist
//! ```
//!
//! Only the store that received the batch is persisted.  The source store
//! is never written, even when the pass reports unmatched preferences.

use std::fmt;

use prefbridge_core::{BackendConfigStore, PreferenceStore, SettingsTranslator};
use thiserror::Error;
use tracing::{info, warn};

/// A store that can write its in-memory state back to where it came from.
pub trait PersistentStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn persist(&self) -> Result<(), Self::Error>;

    /// Human-readable location, used in logs and error messages.
    fn location(&self) -> String;
}

/// Which way a sync pass moves settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    /// Backend config into UI preferences.
    Import,
    /// UI preferences into the backend config.
    Export,
}

impl fmt::Display for SyncDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncDirection::Import => f.write_str("import"),
            SyncDirection::Export => f.write_str("export"),
        }
    }
}

/// Outcome of a completed sync pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    pub direction: SyncDirection,
    /// Number of writes committed to the target store.
    pub written: usize,
    /// Composite preferences skipped because no rule matched.
    pub unmatched: Vec<&'static str>,
    /// Location of the store that was written.
    pub target: String,
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to save {target}: {source}")]
    Persist {
        target: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Runs translation passes with a fixed translator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncSettingsUseCase {
    translator: SettingsTranslator,
}

impl SyncSettingsUseCase {
    /// Translates in `direction` and persists the written store.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Persist`] if the target store cannot be saved.
    /// The in-memory target has already been updated at that point.
    pub fn run<B, P>(
        &self,
        direction: SyncDirection,
        backend: &mut B,
        prefs: &mut P,
    ) -> Result<SyncSummary, SyncError>
    where
        B: BackendConfigStore + PersistentStore,
        P: PreferenceStore + PersistentStore,
    {
        let (report, target) = match direction {
            SyncDirection::Import => {
                let report = self.translator.import_from_backend(&*backend, prefs);
                (report, persist(&*prefs)?)
            }
            SyncDirection::Export => {
                let report = self.translator.export_to_backend(&*prefs, backend);
                (report, persist(&*backend)?)
            }
        };

        if !report.unmatched.is_empty() {
            warn!(
                %direction,
                unmatched = ?report.unmatched,
                "some preferences were left unchanged"
            );
        }
        info!(%direction, written = report.written, %target, "settings synced");

        Ok(SyncSummary {
            direction,
            written: report.written,
            unmatched: report.unmatched,
            target,
        })
    }
}

fn persist<S: PersistentStore + ?Sized>(store: &S) -> Result<String, SyncError> {
    let target = store.location();
    store.persist().map_err(|e| SyncError::Persist {
        target: target.clone(),
        source: Box::new(e),
    })?;
    Ok(target)
}
