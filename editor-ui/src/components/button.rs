use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    Primary,
    #[default]
    Secondary,
    Accent,
}

impl ButtonVariant {
    fn class_name(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button-primary",
            ButtonVariant::Secondary => "button-secondary",
            ButtonVariant::Accent => "button-accent",
        }
    }
}

/// Text button with an optional spinner in front of the label.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class_name = format!("button {} {}", variant.class_name(), class);

    rsx! {
        button {
            class: "{class_name}",
            disabled: disabled,
            "aria-busy": loading,
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            if loading {
                span { class: "button-spinner" }
            }
            {children}
        }
    }
}

/// Icon with a small caption underneath. `responsive` hides the caption on narrow screens.
#[component]
pub fn IconButton(
    title: String,
    label: String,
    #[props(default)] responsive: bool,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: if responsive { "icon-button responsive" } else { "icon-button" },
            title: "{title}",
            aria_label: "{title}",
            disabled: disabled,
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            span { class: "icon-button-icon", {children} }
            span { class: "icon-button-label", "{label}" }
        }
    }
}
