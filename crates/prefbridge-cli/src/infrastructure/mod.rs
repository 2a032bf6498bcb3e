//! Infrastructure layer for the `prefbridge` command.
//!
//! Contains the file-system adapters: the emulator INI store, the UI
//! preference file and the app config file.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `prefbridge_core`, but MUST NOT be imported by the `application` layer.

pub mod storage;
