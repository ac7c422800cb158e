//! Virtual folders: user-defined groupings of anchors.

use serde::{Deserialize, Serialize};

/// A user-defined grouping/category shown in the sidebar.
///
/// A folder is *virtual* because it does not exist on disk: an anchor can sit
/// in several folders at once without its file moving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualFolder {
    pub id: String,
    pub name: String,
    /// CSS colour string used for the folder badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Icon identifier understood by the UI icon set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Number of anchors in the folder, when the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// `true` for folders the application reserves (e.g. "All", "Unsorted").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_system: Option<bool>,
}

impl VirtualFolder {
    /// Creates a user folder with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            icon: None,
            count: None,
            is_system: None,
        }
    }

    /// Returns `true` when the folder is reserved by the application.
    ///
    /// An absent flag means an ordinary user folder.
    pub fn is_system_reserved(&self) -> bool {
        self.is_system.unwrap_or(false)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_folder_is_not_system_reserved() {
        let folder = VirtualFolder::new("1", "Papers");
        assert!(!folder.is_system_reserved());
    }

    #[test]
    fn test_system_flag_marks_folder_reserved() {
        let folder = VirtualFolder {
            is_system: Some(true),
            ..VirtualFolder::new("all", "All")
        };
        assert!(folder.is_system_reserved());
    }

    #[test]
    fn test_serializes_with_camel_case_and_omits_absent_fields() {
        // Arrange
        let folder = VirtualFolder {
            is_system: Some(false),
            ..VirtualFolder::new("7", "Drafts")
        };

        // Act
        let json = serde_json::to_value(&folder).unwrap();

        // Assert
        assert_eq!(json["isSystem"], false);
        assert!(json.get("color").is_none());
        assert!(json.get("count").is_none());
    }

    #[test]
    fn test_deserializes_minimal_ui_payload() {
        let folder: VirtualFolder =
            serde_json::from_str(r##"{"id":"3","name":"Reading","color":"#f59e0b","count":12}"##)
                .unwrap();
        assert_eq!(folder.name, "Reading");
        assert_eq!(folder.color.as_deref(), Some("#f59e0b"));
        assert_eq!(folder.count, Some(12));
        assert_eq!(folder.icon, None);
    }
}
