use dioxus::prelude::*;
use editor_types::{Theme, Viewer};

use crate::components::button::{Button, ButtonVariant};
use crate::preferences::{set_theme, use_preferences};

pub const PROFILE_URL_BASE: &str = "https://snack.expo.dev/@";

pub fn profile_url(username: &str) -> String {
    format!("{PROFILE_URL_BASE}{username}")
}

#[component]
pub fn UserMenu(viewer: Option<Viewer>, on_log_in_click: EventHandler<()>) -> Element {
    let preferences = use_preferences();
    let mut menu_open = use_signal(|| false);

    let Some(viewer) = viewer else {
        return rsx! {
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| on_log_in_click.call(()),
                "Log in"
            }
        };
    };

    let theme = preferences.read().theme;
    let dark_label = if theme == Theme::Dark {
        "Light theme"
    } else {
        "Dark theme"
    };
    let profile = profile_url(&viewer.username);
    let label = viewer.label().to_string();
    let initial = viewer.initial();

    rsx! {
        div {
            class: "user-menu",
            button {
                class: "user-avatar",
                title: "{label}",
                onclick: move |_| menu_open.set(!menu_open()),
                if let Some(picture) = viewer.picture.clone() {
                    img { src: "{picture}", alt: "{label}" }
                } else {
                    "{initial}"
                }
            }
            if menu_open() {
                div {
                    class: "user-menu-panel",
                    span { class: "user-menu-header", "Signed in as {viewer.username}" }
                    a {
                        class: "user-menu-item",
                        href: "{profile}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "My snacks"
                    }
                    button {
                        class: "user-menu-item",
                        onclick: move |_| {
                            set_theme(preferences, theme.toggled());
                            menu_open.set(false);
                        },
                        "{dark_label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_url_points_at_user_page() {
        assert_eq!(profile_url("brent"), "https://snack.expo.dev/@brent");
    }
}
