//! # prefbridge-core
//!
//! Translation layer between two settings representations of the Dolphin
//! emulator:
//!
//! - a **flat UI preference set** keyed by a single name, holding booleans and
//!   enumerated strings suitable for a settings screen, and
//! - the **backend INI configuration**, organised into `[Section]` blocks of
//!   string key/value pairs.
//!
//! Most preferences map 1:1 onto a backend key.  A few do not: the EFB copy
//! method and the external frame buffer mode are single UI choices encoded as
//! combinations of two or three backend flags, and two boolean preferences
//! carry an inverted polarity in one direction.
//!
//! This crate has no file system access and no process-wide state.  Both
//! stores are passed in as trait objects or generics, see [`domain::store`].
//!
//! - **`domain`** – Store traits, backend keys, preference values and the
//!   write batches handed to a store's `commit`.
//!
//! - **`mapping`** – The static preference catalogue, the composite rule
//!   tables and the typed choice enums.
//!
//! - **`translator`** – [`SettingsTranslator`], exposing
//!   `import_from_backend` and `export_to_backend`.
//!
//! - **`memory`** – In-memory store implementations for tests and embedding.

pub mod domain;
pub mod mapping;
pub mod memory;
pub mod translator;

pub use domain::batch::{BackendBatch, BackendWrite, PreferenceBatch, PreferenceWrite};
pub use domain::store::{BackendConfigStore, PreferenceStore};
pub use domain::value::{BackendKey, PrefValue, FALSE_LITERAL, TRUE_LITERAL};
pub use mapping::choice::{ChoiceParseError, EfbCopyMethod, XfbMode};
pub use mapping::{PreferenceCatalog, PreferenceError, PreferenceKind};
pub use memory::{MemoryBackendStore, MemoryPreferenceStore};
pub use translator::{SettingsTranslator, Translation, TranslationReport};
