//! Editor toolbar: logo, title, action buttons, user menu and login modal.
//!
//! Everything here is driven by props from the host. The only state the
//! toolbar owns is whether the user asked to log in, which gates the auth
//! modal together with the host's own visibility flag.

use dioxus::prelude::*;
use editor_types::{MetadataSubmission, SaveHistory, SaveStatus, Viewer};

pub mod actions;
pub mod state;

pub use actions::{dispatch, ToolbarAction, ToolbarEvents, ToolbarHandlers};
pub use state::{
    auth_modal_visible, export_disabled, title_variant, ActionButton, LogoSet, SaveButtonState,
    TitleVariant, ACTION_BUTTONS,
};

use crate::components::icons::{EmbedIcon, ExportIcon, RunIcon};
use crate::components::styles::TOOLBAR_STYLES;
use crate::components::{
    Button, ButtonVariant, EditorImportTitle, EditorTitle, IconButton, ModalAuthentication,
    SearchButton, ToolbarShell, ToolbarTitleShell, UserMenu,
};
use crate::preferences::use_preferences;

#[component]
pub fn EditorToolbar(
    name: String,
    description: String,
    created_at: Option<String>,
    #[props(default)] save_status: SaveStatus,
    #[props(default)] save_history: SaveHistory,
    viewer: Option<Viewer>,
    #[props(default)] is_downloading: bool,
    #[props(default)] is_resolving: bool,
    #[props(default)] is_auth_modal_visible: bool,
    #[props(default)] is_edit_modal_visible: bool,
    on_submit_metadata: EventHandler<MetadataSubmission>,
    on_show_previous_saves: EventHandler<()>,
    on_show_edit_modal: EventHandler<()>,
    on_dismiss_edit_modal: EventHandler<()>,
    on_show_auth_modal: EventHandler<()>,
    on_dismiss_auth_modal: EventHandler<()>,
    on_show_embed_code: EventHandler<()>,
    on_download_code: EventHandler<()>,
    on_show_qr_code: EventHandler<()>,
    on_publish: EventHandler<()>,
    creator_username: Option<String>,
) -> Element {
    let is_logging_in = use_signal(|| false);
    let preferences = use_preferences();
    let logos = try_use_context::<LogoSet>().unwrap_or_default();

    let events = ToolbarEvents {
        is_logging_in,
        on_show_qr_code,
        on_download_code,
        on_show_embed_code,
        on_publish,
        on_show_auth_modal,
        on_dismiss_auth_modal,
    };

    let theme = preferences.read().theme;
    let logo_src = logos.resolve(theme).to_string();
    let variant = title_variant(creator_username.as_deref(), &name, &description);
    let save = SaveButtonState::from_props(save_status, is_resolving);
    let export_is_disabled = export_disabled(is_downloading, save_status);
    let modal_visible = auth_modal_visible(is_logging_in(), is_auth_modal_visible);

    rsx! {
        style { {TOOLBAR_STYLES} }
        ToolbarShell {
            ToolbarTitleShell {
                img {
                    class: "editor-toolbar-logo",
                    src: "{logo_src}",
                    alt: "Snack",
                }
                {match variant {
                    TitleVariant::Editable => rsx! {
                        EditorTitle {
                            name: name.clone(),
                            description: description.clone(),
                            created_at: created_at.clone(),
                            save_history: save_history.clone(),
                            save_status,
                            viewer: viewer.clone(),
                            on_log_in_click: move |_| events.run(ToolbarAction::RequestLogin),
                            is_edit_modal_visible,
                            on_submit_metadata,
                            on_show_previous_saves,
                            on_show_edit_modal,
                            on_dismiss_edit_modal,
                        }
                    },
                    TitleVariant::Import => rsx! {
                        EditorImportTitle {
                            name: name.clone(),
                            description: description.clone(),
                        }
                    },
                }}
            }
            div {
                class: "editor-toolbar-buttons",
                SearchButton { responsive: true }
                for button in ACTION_BUTTONS {
                    IconButton {
                        key: "{button.label}",
                        responsive: true,
                        title: "{button.title}",
                        label: "{button.label}",
                        disabled: button.disabled(export_is_disabled),
                        onclick: move |_| events.run(button.action),
                        {action_icon(button.action)}
                    }
                }
                Button {
                    variant: ButtonVariant::Accent,
                    disabled: save.disabled,
                    loading: save.loading,
                    class: "editor-toolbar-save",
                    onclick: move |_| events.run(ToolbarAction::Publish),
                    "{save.label}"
                }
                UserMenu {
                    viewer: viewer.clone(),
                    on_log_in_click: move |_| events.run(ToolbarAction::RequestLogin),
                }
                ModalAuthentication {
                    visible: modal_visible,
                    on_dismiss: move |_| events.run(ToolbarAction::EndLogin),
                    on_complete: move |_| events.run(ToolbarAction::EndLogin),
                }
            }
        }
    }
}

fn action_icon(action: ToolbarAction) -> Element {
    match action {
        ToolbarAction::RunOnDevice => rsx! { RunIcon {} },
        ToolbarAction::Export => rsx! { ExportIcon {} },
        _ => rsx! { EmbedIcon {} },
    }
}
