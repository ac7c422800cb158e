//! Storage infrastructure: client configuration file persistence.
//!
//! The `config` sub-module reads the TOML file that tells the client where
//! the settings service lives and how verbosely to log.  Nothing about the
//! backup path is persisted locally: a fresh process starts with an empty
//! cache until it loads the value from the service.

pub mod config;
