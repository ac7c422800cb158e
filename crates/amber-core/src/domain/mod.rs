//! Domain entities for AmberDay.
//!
//! This module contains pure data shapes with no infrastructure dependencies.
//!
//! # What lives here? (for beginners)
//!
//! The innermost layer of the application describes *what* the program talks
//! about, not *how* it talks.  Every type here:
//!
//! - Derives `Serialize`/`Deserialize` with camelCase field names, because the
//!   UI consumes them as JSON and expects the same keys it declares in
//!   TypeScript.
//! - Omits optional fields from the JSON output when they are absent.
//! - Carries no invariants beyond field presence; validation belongs to the
//!   settings service.

/// Anchors: the tracked documents themselves.
pub mod anchor;
/// Backup destination setting and backup history records.
pub mod backup;
/// User-defined virtual folders.
pub mod folder;
/// Labels attachable to anchors.
pub mod tag;
