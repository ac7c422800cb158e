//! # amber-core
//!
//! Shared library for the AmberDay client containing the domain entities the
//! UI layers exchange and the wire format of the settings service.
//!
//! This crate has zero dependencies on network sockets, async runtimes, or
//! UI frameworks.  It is used by `amber-settings` and by anything else that
//! needs to speak the AmberDay vocabulary.
//!
//! # Architecture overview (for beginners)
//!
//! AmberDay is a reference manager: it tracks documents on disk ("anchors"),
//! groups them into virtual folders, labels them with tags, and can copy them
//! to a user-chosen backup destination.  The backend is an HTTP service; the
//! client only keeps a small amount of cached state.
//!
//! - **`domain`** – Plain data shapes: [`VirtualFolder`], [`TagItem`],
//!   [`AnchorItem`], [`BackupRecord`] and the [`BackupPathSetting`] that the
//!   settings store caches.
//!
//! - **`protocol`** – How those shapes travel over HTTP: the JSON bodies the
//!   settings service sends back and the route paths it serves.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `amber_core::AnchorItem` instead of `amber_core::domain::anchor::AnchorItem`.
pub use domain::anchor::AnchorItem;
pub use domain::backup::{BackupPathSetting, BackupRecord};
pub use domain::folder::VirtualFolder;
pub use domain::tag::TagItem;
pub use protocol::messages::{BackupPathResponse, BackupRecordResponse, ErrorDetail};
