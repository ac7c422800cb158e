//! Domain layer for amber-settings.
//!
//! Holds plain configuration values with no I/O.  Reading files, environment
//! variables, or CLI flags to fill them in is the infrastructure layer's job
//! (see `infrastructure::storage::config` and `main.rs`).

pub mod config;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
