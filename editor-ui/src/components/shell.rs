use dioxus::prelude::*;

#[component]
pub fn ToolbarShell(children: Element) -> Element {
    rsx! {
        div {
            class: "toolbar-shell",
            role: "toolbar",
            {children}
        }
    }
}

#[component]
pub fn ToolbarTitleShell(children: Element) -> Element {
    rsx! {
        div { class: "toolbar-title-shell", {children} }
    }
}
