use dioxus::prelude::*;

#[component]
pub fn EditorImportTitle(name: String, description: String) -> Element {
    rsx! {
        div {
            class: "editor-title",
            div {
                class: "editor-title-row",
                span { class: "editor-title-name", title: "{name}", "{name}" }
                span { class: "import-badge", "Imported from git" }
            }
            span { class: "editor-title-description", title: "{description}", "{description}" }
        }
    }
}
