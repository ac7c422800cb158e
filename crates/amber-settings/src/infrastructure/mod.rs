//! Infrastructure layer for the settings client.
//!
//! Contains the adapters that touch the outside world.
//!
//! **Dependency rule**: this layer may depend on `application`, `domain`, and
//! `amber_core`, but MUST NOT be imported by the `application` or `domain`
//! layers.
//!
//! # Sub-modules
//!
//! - **`http`** – `reqwest` implementation of the settings service and backup
//!   history ports.
//!
//! - **`storage`** – TOML configuration file: where the service lives and the
//!   default log level.
//!
//! - **`ui_bridge`** – Command handlers that expose the store and backup
//!   history to a UI shell through a uniform result envelope.

pub mod http;
pub mod storage;
pub mod ui_bridge;
