use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use editor_types::{
    latest_save, MetadataSubmission, SaveHistory, SaveRecord, SaveStatus, SnackDetails, Viewer,
};

use crate::components::button::{Button, ButtonVariant};

const UNTITLED_NAME: &str = "Untitled snack";

/// Editable name/description with save status, previous saves and the edit modal.
#[component]
pub fn EditorTitle(
    name: String,
    description: String,
    created_at: Option<String>,
    #[props(default)] save_history: SaveHistory,
    save_status: SaveStatus,
    viewer: Option<Viewer>,
    on_log_in_click: EventHandler<()>,
    is_edit_modal_visible: bool,
    on_submit_metadata: EventHandler<MetadataSubmission>,
    on_show_previous_saves: EventHandler<()>,
    on_show_edit_modal: EventHandler<()>,
    on_dismiss_edit_modal: EventHandler<()>,
) -> Element {
    let status_text = title_status_text(
        save_status,
        &save_history,
        created_at.as_deref(),
        Utc::now(),
    );
    let display_name = if name.trim().is_empty() {
        UNTITLED_NAME.to_string()
    } else {
        name.clone()
    };
    let has_history = !save_history.is_empty();
    let is_anonymous = viewer.is_none();

    rsx! {
        div {
            class: "editor-title",
            div {
                class: "editor-title-row",
                span { class: "editor-title-name", title: "{display_name}", "{display_name}" }
                button {
                    class: "link-button",
                    title: "Edit name and description",
                    onclick: move |_| {
                        debug!("opening edit modal");
                        on_show_edit_modal.call(());
                    },
                    "Edit"
                }
            }
            if !description.is_empty() {
                span { class: "editor-title-description", "{description}" }
            }
            div {
                class: "editor-title-status",
                span { "{status_text}" }
                if has_history {
                    button {
                        class: "link-button",
                        onclick: move |_| on_show_previous_saves.call(()),
                        "Previous saves"
                    }
                }
                if is_anonymous {
                    button {
                        class: "link-button",
                        onclick: move |_| on_log_in_click.call(()),
                        "Log in to save your changes"
                    }
                }
            }
        }

        if is_edit_modal_visible {
            EditDetailsModal {
                name: name.clone(),
                description: description.clone(),
                on_submit: on_submit_metadata,
                on_dismiss: on_dismiss_edit_modal,
            }
        }
    }
}

/// Mounted only while open, so every opening starts from the current props.
#[component]
fn EditDetailsModal(
    name: String,
    description: String,
    on_submit: EventHandler<MetadataSubmission>,
    on_dismiss: EventHandler<()>,
) -> Element {
    let mut draft_name = use_signal(|| name.clone());
    let mut draft_description = use_signal(|| description.clone());
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: MouseEvent| {
        let details = SnackDetails::new(draft_name(), draft_description());
        match details.validate() {
            Ok(details) => {
                error.set(None);
                on_submit.call(MetadataSubmission {
                    details,
                    draft: false,
                });
                on_dismiss.call(());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            class: "modal-scrim",
            onclick: move |_| on_dismiss.call(()),
            div {
                class: "modal-dialog",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),
                h2 { "Edit details" }
                label { "Name" }
                input {
                    r#type: "text",
                    value: "{draft_name}",
                    oninput: move |e| draft_name.set(e.value()),
                }
                if let Some(message) = error() {
                    span { class: "modal-error", "{message}" }
                }
                label { "Description" }
                textarea {
                    rows: "3",
                    value: "{draft_description}",
                    oninput: move |e| draft_description.set(e.value()),
                }
                div {
                    class: "modal-actions",
                    Button {
                        onclick: move |_| on_dismiss.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Accent,
                        onclick: submit,
                        "Done"
                    }
                }
            }
        }
    }
}

pub fn title_status_text(
    save_status: SaveStatus,
    save_history: &[SaveRecord],
    created_at: Option<&str>,
    now: DateTime<Utc>,
) -> String {
    match save_status {
        SaveStatus::Publishing => return "Saving changes…".to_string(),
        SaveStatus::SavingDraft => return "Saving draft…".to_string(),
        status if status.has_unsaved_changes() => return "Unsaved changes".to_string(),
        _ => {}
    }

    if let Some(record) = latest_save(save_history) {
        let prefix = if record.is_draft {
            "Draft saved"
        } else {
            "Last saved"
        };
        return format!("{prefix} {}", relative_time(record.saved_at, now));
    }

    created_at
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|created| format!("Created {}", relative_time(created.with_timezone(&Utc), now)))
        .unwrap_or_else(|| "Not saved yet".to_string())
}

pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 30 {
        plural(days, "day")
    } else {
        format!("on {}", then.format("%b %-d, %Y"))
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn record(minutes_ago: i64, is_draft: bool) -> SaveRecord {
        SaveRecord {
            id: format!("save-{minutes_ago}"),
            saved_at: now() - Duration::minutes(minutes_ago),
            is_draft,
        }
    }

    #[test]
    fn relative_time_buckets() {
        assert_eq!(relative_time(now(), now()), "just now");
        assert_eq!(relative_time(now() - Duration::seconds(30), now()), "just now");
        assert_eq!(relative_time(now() - Duration::minutes(1), now()), "1 minute ago");
        assert_eq!(relative_time(now() - Duration::minutes(5), now()), "5 minutes ago");
        assert_eq!(relative_time(now() - Duration::hours(1), now()), "1 hour ago");
        assert_eq!(relative_time(now() - Duration::hours(23), now()), "23 hours ago");
        assert_eq!(relative_time(now() - Duration::days(2), now()), "2 days ago");
        assert_eq!(
            relative_time(Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap(), now()),
            "on Jan 3, 2024"
        );
    }

    #[test]
    fn in_flight_states_win() {
        let history = vec![record(5, false)];
        assert_eq!(
            title_status_text(SaveStatus::Publishing, &history, None, now()),
            "Saving changes…"
        );
        assert_eq!(
            title_status_text(SaveStatus::SavingDraft, &history, None, now()),
            "Saving draft…"
        );
        assert_eq!(
            title_status_text(SaveStatus::Edited, &history, None, now()),
            "Unsaved changes"
        );
    }

    #[test]
    fn latest_save_then_created_then_nothing() {
        let history = vec![record(90, false), record(5, true)];
        assert_eq!(
            title_status_text(SaveStatus::Published, &history, None, now()),
            "Draft saved 5 minutes ago"
        );
        assert_eq!(
            title_status_text(
                SaveStatus::Idle,
                &[],
                Some("2024-06-15T10:00:00Z"),
                now()
            ),
            "Created 2 hours ago"
        );
        assert_eq!(
            title_status_text(SaveStatus::Idle, &[], Some("yesterday"), now()),
            "Not saved yet"
        );
        assert_eq!(
            title_status_text(SaveStatus::Idle, &[], None, now()),
            "Not saved yet"
        );
    }
}
