//! Application layer use cases for the `prefbridge` command.
//!
//! Use cases here orchestrate the core translator against store traits.
//! They never open files themselves: the stores they receive are already
//! loaded, and writing back goes through [`sync_settings::PersistentStore`].
//!
//! # Sub-modules
//!
//! - **`sync_settings`** – One import or export pass, including persisting
//!   the store that was written.
//! - **`preferences`**   – Listing the current UI preferences and applying a
//!   single validated edit from the command line.

pub mod preferences;
pub mod sync_settings;
