//! Login prompt shown over the editor.
//!
//! The actual sign-in happens on the login page; this modal only offers the
//! way there. Completing and dismissing are reported separately so the
//! parent can tell them apart, although the toolbar treats both the same.

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::components::button::{Button, ButtonVariant};

pub const LOGIN_URL: &str = "https://expo.dev/login";

#[component]
pub fn ModalAuthentication(
    visible: bool,
    on_dismiss: EventHandler<()>,
    on_complete: EventHandler<()>,
) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-scrim",
            "data-testid": "auth-modal",
            tabindex: "-1",
            // Escape is only heard by a focused element.
            onmounted: move |e: MountedEvent| async move {
                if e.set_focus(true).await.is_err() {
                    debug!("auth modal could not take focus");
                }
            },
            onclick: move |_| on_dismiss.call(()),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    on_dismiss.call(());
                }
            },
            div {
                class: "modal-dialog",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),
                h2 { "Log in to Snack" }
                p { "Log in or create an account to save your snacks and access them from any device." }
                a {
                    class: "button button-accent",
                    href: LOGIN_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    onclick: move |_| on_complete.call(()),
                    "Log in"
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_dismiss.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn ModalHost(visible: bool) -> Element {
        rsx! {
            ModalAuthentication {
                visible,
                on_dismiss: |_| {},
                on_complete: |_| {},
            }
        }
    }

    fn render_modal(visible: bool) -> String {
        let mut dom = VirtualDom::new_with_props(ModalHost, ModalHostProps { visible });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn visible_modal_renders_focusable_scrim() {
        let html = render_modal(true);
        assert!(html.contains("data-testid=\"auth-modal\""));
        assert!(html.contains("tabindex=\"-1\""));
        assert!(html.contains(LOGIN_URL));
    }

    #[test]
    fn hidden_modal_renders_nothing() {
        let html = render_modal(false);
        assert!(!html.contains("auth-modal"));
        assert!(!html.contains("Log in to Snack"));
    }
}
