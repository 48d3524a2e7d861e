use chrono::Utc;
use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use editor_types::{MetadataSubmission, SaveHistory, SaveRecord, SaveStatus};
use gloo_timers::future::TimeoutFuture;

use editor_ui::{EditorToolbar, PreferencesProvider};

const SIMULATED_PUBLISH_MS: u32 = 1200;
const SIMULATED_DOWNLOAD_MS: u32 = 800;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        PreferencesProvider {
            EditorHost {}
        }
    }
}

/// Stand-in for the editor page: owns the toolbar's props and fakes the slow flows.
#[component]
fn EditorHost() -> Element {
    let mut name = use_signal(|| "Hello World".to_string());
    let mut description = use_signal(|| "Write universal code with Expo".to_string());
    let mut save_status = use_signal(SaveStatus::default);
    let mut save_history = use_signal(SaveHistory::new);
    let mut is_downloading = use_signal(|| false);
    let mut is_auth_modal_visible = use_signal(|| false);
    let mut is_edit_modal_visible = use_signal(|| false);
    let mut notice = use_signal(|| None::<String>);

    let on_submit_metadata = move |submission: MetadataSubmission| {
        info!("metadata updated (draft: {})", submission.draft);
        name.set(submission.details.name);
        description.set(submission.details.description);
        save_status.set(SaveStatus::Edited);
    };

    let on_download_code = move |_: ()| {
        if is_downloading() {
            return;
        }
        spawn(async move {
            is_downloading.set(true);
            TimeoutFuture::new(SIMULATED_DOWNLOAD_MS).await;
            is_downloading.set(false);
            notice.set(Some("Project exported".to_string()));
        });
    };

    let on_publish = move |_: ()| {
        if save_status().is_publishing() {
            return;
        }
        spawn(async move {
            save_status.set(SaveStatus::Publishing);
            TimeoutFuture::new(SIMULATED_PUBLISH_MS).await;
            let next_id = format!("save-{}", save_history.read().len() + 1);
            save_history.write().push(SaveRecord {
                id: next_id,
                saved_at: Utc::now(),
                is_draft: false,
            });
            save_status.set(SaveStatus::Published);
        });
    };

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column;",
            EditorToolbar {
                name: name(),
                description: description(),
                save_status: save_status(),
                save_history: save_history(),
                is_downloading: is_downloading(),
                is_resolving: false,
                is_auth_modal_visible: is_auth_modal_visible(),
                is_edit_modal_visible: is_edit_modal_visible(),
                on_submit_metadata,
                on_show_previous_saves: move |_| {
                    notice.set(Some(format!("{} previous saves", save_history.read().len())));
                },
                on_show_edit_modal: move |_| is_edit_modal_visible.set(true),
                on_dismiss_edit_modal: move |_| is_edit_modal_visible.set(false),
                on_show_auth_modal: move |_| is_auth_modal_visible.set(true),
                on_dismiss_auth_modal: move |_| is_auth_modal_visible.set(false),
                on_show_embed_code: move |_| notice.set(Some("Embed code copied".to_string())),
                on_download_code,
                on_show_qr_code: move |_| notice.set(Some("Scan the QR code with Expo Go".to_string())),
                on_publish,
            }
            if let Some(message) = notice() {
                div {
                    style: "padding: 0.75rem 1rem; font-size: 0.875rem; color: var(--text-secondary, #6b7280);",
                    "{message}"
                }
            }
        }
    }
}
