//! Anchors: the tracked reference/document items.
//!
//! An *anchor* points at a file somewhere on the user's disk.  The application
//! never moves the file; it only remembers where it is, which folders and tags
//! it belongs to, and whether the file was still present at the last check
//! (`is_valid`).

use serde::{Deserialize, Serialize};

/// A tracked reference or document entry.
///
/// `added_at` and `updated_at` are carried as the ISO-8601 strings the service
/// emits; they are displayed, never compared, so they are not reparsed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorItem {
    pub id: String,
    pub title: String,
    pub creator: String,
    /// Document type label (e.g. `"pdf"`, `"article"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Primary folder association.
    pub folder_id: String,
    /// Every folder association, when the anchor lives in more than one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_ids: Option<Vec<String>>,
    pub added_at: String,
    pub updated_at: String,
    /// Location of the underlying file on disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// `false` when the file was missing at the last validity check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Number of attachments stored alongside the main file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<u32>,
}

impl AnchorItem {
    /// Returns every folder the anchor belongs to.
    ///
    /// Uses the explicit `folder_ids` list when the service sent one, otherwise
    /// falls back to the single primary `folder_id`.
    pub fn folder_ids(&self) -> Vec<&str> {
        match &self.folder_ids {
            Some(ids) if !ids.is_empty() => ids.iter().map(String::as_str).collect(),
            _ => vec![self.folder_id.as_str()],
        }
    }

    /// Returns `true` if the anchor is associated with `folder_id`.
    pub fn belongs_to(&self, folder_id: &str) -> bool {
        self.folder_ids().contains(&folder_id)
    }

    /// Returns `true` if the anchor carries a tag named `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
