//! Inline error annotation rendered beneath a form control.

use dioxus::prelude::*;

/// Class list for a control, adding `has-error` when it failed validation
pub fn control_class(base: &str, has_error: bool) -> String {
    if has_error {
        format!("{} has-error", base)
    } else {
        base.to_string()
    }
}

/// Renders `message` as a `.error-message` element, or nothing
#[component]
pub fn ErrorAnnotation(message: Option<String>) -> Element {
    rsx! {
        if let Some(msg) = message {
            div { class: "error-message", role: "alert", "{msg}" }
        }
    }
}

/// Softer inline note that does not indicate a failure (e.g. age advisory)
#[component]
pub fn Advisory(message: Option<String>) -> Element {
    rsx! {
        if let Some(msg) = message {
            div { class: "advisory-message", "{msg}" }
        }
    }
}
