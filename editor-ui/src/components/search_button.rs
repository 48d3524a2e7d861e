use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use url::Url;

use crate::components::button::IconButton;
use crate::components::icons::SearchIcon;

pub const SEARCH_URL: &str = "https://snack.expo.dev/search";

/// Search page URL for a query, `None` when the query is blank.
pub fn search_url(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Url::parse_with_params(SEARCH_URL, &[("q", query)])
        .ok()
        .map(String::from)
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.open_with_url_and_target(url, "_blank").is_err() {
        log::warn!("Failed to open {}", url);
    }
}

#[component]
pub fn SearchButton(#[props(default)] responsive: bool) -> Element {
    let mut is_open = use_signal(|| false);
    let mut query = use_signal(String::new);

    rsx! {
        if is_open() {
            input {
                class: "search-field",
                r#type: "search",
                placeholder: "Search snacks",
                autofocus: true,
                value: "{query}",
                oninput: move |e| query.set(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        if let Some(url) = search_url(&query()) {
                            debug!("searching snacks: {}", url);
                            open_in_new_tab(&url);
                            query.set(String::new());
                            is_open.set(false);
                        }
                    } else if e.key() == Key::Escape {
                        is_open.set(false);
                    }
                },
                onblur: move |_| {
                    if query().trim().is_empty() {
                        is_open.set(false);
                    }
                },
            }
        } else {
            IconButton {
                responsive: responsive,
                title: "Search snacks",
                label: "Search",
                onclick: move |_| is_open.set(true),
                SearchIcon {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_query() {
        assert_eq!(
            search_url("  react navigation & tabs ").as_deref(),
            Some("https://snack.expo.dev/search?q=react+navigation+%26+tabs")
        );
    }

    #[test]
    fn blank_query_has_no_url() {
        assert_eq!(search_url(""), None);
        assert_eq!(search_url("   "), None);
    }
}
