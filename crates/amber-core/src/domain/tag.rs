//! Tags: labels attachable to anchors.

use serde::{Deserialize, Serialize};

/// A label attachable to anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// How many anchors currently carry this tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<u32>,
}
