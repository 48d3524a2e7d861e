use editor_types::{SaveStatus, Theme, GIT_IMPORT_CREATOR};

use super::actions::ToolbarAction;

pub const DEFAULT_LOGO_LIGHT: &str = "/assets/snack-icon.svg";
pub const DEFAULT_LOGO_DARK: &str = "/assets/snack-icon-dark.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleVariant {
    Editable,
    /// Read-only title for snacks imported from git.
    Import,
}

pub fn title_variant(
    creator_username: Option<&str>,
    name: &str,
    description: &str,
) -> TitleVariant {
    if creator_username == Some(GIT_IMPORT_CREATOR) && !name.is_empty() && !description.is_empty()
    {
        TitleVariant::Import
    } else {
        TitleVariant::Editable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveButtonState {
    pub disabled: bool,
    pub loading: bool,
    pub label: &'static str,
}

impl SaveButtonState {
    pub fn from_props(save_status: SaveStatus, is_resolving: bool) -> Self {
        let is_publishing = save_status.is_publishing();
        let is_published = save_status.is_published();

        let label = if is_publishing {
            "Saving…"
        } else if is_published {
            "Saved"
        } else {
            "Save"
        };

        Self {
            disabled: is_publishing || is_resolving || is_published,
            loading: is_publishing,
            label,
        }
    }
}

pub fn export_disabled(is_downloading: bool, save_status: SaveStatus) -> bool {
    is_downloading || save_status.is_publishing()
}

/// Icon buttons between search and save, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub title: &'static str,
    pub label: &'static str,
    pub action: ToolbarAction,
}

impl ActionButton {
    pub fn disabled(&self, export_is_disabled: bool) -> bool {
        self.action == ToolbarAction::Export && export_is_disabled
    }
}

pub const ACTION_BUTTONS: [ActionButton; 3] = [
    ActionButton {
        title: "Run on device",
        label: "Run",
        action: ToolbarAction::RunOnDevice,
    },
    ActionButton {
        title: "Export to expo-cli",
        label: "Export",
        action: ToolbarAction::Export,
    },
    ActionButton {
        title: "Show embed code",
        label: "Embed",
        action: ToolbarAction::Embed,
    },
];

/// The modal needs both the user's intent and the parent's permission.
pub fn auth_modal_visible(is_logging_in: bool, is_auth_modal_visible: bool) -> bool {
    is_logging_in && is_auth_modal_visible
}

/// Logo sources per theme. Provide one through context to override the bundled assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoSet {
    pub light: String,
    pub dark: String,
}

impl LogoSet {
    pub fn resolve(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

impl Default for LogoSet {
    fn default() -> Self {
        Self {
            light: DEFAULT_LOGO_LIGHT.to_string(),
            dark: DEFAULT_LOGO_DARK.to_string(),
        }
    }
}
