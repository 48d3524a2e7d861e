//! Shared types between the editor host and the toolbar UI
//!
//! These types are used by both:
//! - the host page that owns the save/publish workflow
//! - Dioxus components (WASM) that render the toolbar
//!
//! Serializable with serde so the host can hand them over as JSON.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest snack name accepted by the metadata editor, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Creator username used for snacks imported from a git repository.
pub const GIT_IMPORT_CREATOR: &str = "git";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorTypesError {
    #[error("unknown save status: {0}")]
    UnknownSaveStatus(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("name cannot be empty")]
    EmptyName,

    #[error("name is longer than {max} characters")]
    NameTooLong { max: usize },
}

// ============================================================================
// Save lifecycle
// ============================================================================

/// Lifecycle of the current save/publish operation, owned by the host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SaveStatus {
    #[default]
    Idle,
    Unsaved,
    Edited,
    SavingDraft,
    SavedDraft,
    Publishing,
    Published,
    Changed,
}

impl SaveStatus {
    pub const ALL: [SaveStatus; 8] = [
        SaveStatus::Idle,
        SaveStatus::Unsaved,
        SaveStatus::Edited,
        SaveStatus::SavingDraft,
        SaveStatus::SavedDraft,
        SaveStatus::Publishing,
        SaveStatus::Published,
        SaveStatus::Changed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SaveStatus::Idle => "idle",
            SaveStatus::Unsaved => "unsaved",
            SaveStatus::Edited => "edited",
            SaveStatus::SavingDraft => "saving-draft",
            SaveStatus::SavedDraft => "saved-draft",
            SaveStatus::Publishing => "publishing",
            SaveStatus::Published => "published",
            SaveStatus::Changed => "changed",
        }
    }

    pub fn is_publishing(&self) -> bool {
        matches!(self, SaveStatus::Publishing)
    }

    pub fn is_published(&self) -> bool {
        matches!(self, SaveStatus::Published)
    }

    /// True when the editor holds changes that no save has captured yet.
    pub fn has_unsaved_changes(&self) -> bool {
        matches!(
            self,
            SaveStatus::Unsaved | SaveStatus::Edited | SaveStatus::Changed
        )
    }
}

impl fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaveStatus {
    type Err = EditorTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SaveStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| EditorTypesError::UnknownSaveStatus(s.to_string()))
    }
}

/// One previous save of the snack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveRecord {
    pub id: String,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub is_draft: bool,
}

/// Ordered sequence of previous saves. The toolbar only passes it through.
pub type SaveHistory = Vec<SaveRecord>;

/// Most recent save in the history, regardless of the order it was given in.
pub fn latest_save(history: &[SaveRecord]) -> Option<&SaveRecord> {
    history.iter().max_by_key(|record| record.saved_at)
}

// ============================================================================
// Identity
// ============================================================================

/// The signed-in user. Absent for anonymous sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Viewer {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl Viewer {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: None,
            picture: None,
        }
    }

    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// Uppercase first letter of the label, used when there is no picture.
    pub fn initial(&self) -> String {
        self.label()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Name and description of a snack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SnackDetails {
    pub name: String,
    pub description: String,
}

impl SnackDetails {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Trimmed copy that passes validation.
    pub fn validate(&self) -> Result<SnackDetails, EditorTypesError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EditorTypesError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(EditorTypesError::NameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }
        Ok(SnackDetails {
            name: name.to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

/// Payload of the metadata callback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataSubmission {
    pub details: SnackDetails,
    #[serde(default)]
    pub draft: bool,
}

// ============================================================================
// Theme
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = EditorTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(EditorTypesError::UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_save_status_wire_names() {
        assert_eq!(SaveStatus::SavingDraft.to_string(), "saving-draft");
        assert_eq!(
            "published".parse::<SaveStatus>().unwrap(),
            SaveStatus::Published
        );
        for status in SaveStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_unknown_save_status_is_rejected() {
        let err = "resolving".parse::<SaveStatus>().unwrap_err();
        assert_eq!(err, EditorTypesError::UnknownSaveStatus("resolving".into()));
        assert_eq!(err.to_string(), "unknown save status: resolving");
    }

    #[test]
    fn test_default_save_status_is_idle() {
        assert_eq!(SaveStatus::default(), SaveStatus::Idle);
        assert!(!SaveStatus::Idle.is_publishing());
        assert!(SaveStatus::Publishing.is_publishing());
        assert!(SaveStatus::Published.is_published());
        assert!(SaveStatus::Changed.has_unsaved_changes());
        assert!(!SaveStatus::SavedDraft.has_unsaved_changes());
    }

    #[test]
    fn test_latest_save_ignores_order() {
        let older = SaveRecord {
            id: "a".into(),
            saved_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            is_draft: false,
        };
        let newer = SaveRecord {
            id: "b".into(),
            saved_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            is_draft: true,
        };
        let history = vec![older.clone(), newer.clone()];
        assert_eq!(latest_save(&history), Some(&newer));
        let reversed = vec![newer.clone(), older];
        assert_eq!(latest_save(&reversed), Some(&newer));
        assert_eq!(latest_save(&[]), None);
    }

    #[test]
    fn test_save_record_draft_defaults_to_false() {
        let record: SaveRecord = serde_json::from_value(serde_json::json!({
            "id": "xyz",
            "saved_at": "2024-05-01T12:00:00Z"
        }))
        .unwrap();
        assert!(!record.is_draft);
    }

    #[test]
    fn test_viewer_label_and_initial() {
        let mut viewer = Viewer::new("brent");
        assert_eq!(viewer.label(), "brent");
        assert_eq!(viewer.initial(), "B");

        viewer.display_name = Some("  ".into());
        assert_eq!(viewer.label(), "brent");

        viewer.display_name = Some("ölaf".into());
        assert_eq!(viewer.initial(), "Ö");

        assert_eq!(Viewer::new("").initial(), "?");
    }

    #[test]
    fn test_details_validation() {
        let ok = SnackDetails::new("  My Snack ", " hello ").validate().unwrap();
        assert_eq!(ok, SnackDetails::new("My Snack", "hello"));

        assert_eq!(
            SnackDetails::new("   ", "x").validate(),
            Err(EditorTypesError::EmptyName)
        );

        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            SnackDetails::new(long, "").validate(),
            Err(EditorTypesError::NameTooLong {
                max: MAX_NAME_LENGTH
            })
        );
        assert!(SnackDetails::new("a".repeat(MAX_NAME_LENGTH), "")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("solarized".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }

    #[test]
    fn test_metadata_submission_draft_default() {
        let submission: MetadataSubmission = serde_json::from_value(serde_json::json!({
            "details": { "name": "n", "description": "d" }
        }))
        .unwrap();
        assert!(!submission.draft);
        assert_eq!(submission.details.name, "n");
    }
}
