//! Domain types shared by the translator and the store adapters.
//!
//! Nothing in here touches the file system.  Concrete stores live in
//! [`crate::memory`] and in the `prefbridge-cli` crate.

pub mod batch;
pub mod store;
pub mod value;

pub use batch::{BackendBatch, BackendWrite, PreferenceBatch, PreferenceWrite};
pub use store::{BackendConfigStore, PreferenceStore};
pub use value::{BackendKey, PrefValue};
