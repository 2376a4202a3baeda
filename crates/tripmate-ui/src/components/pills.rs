//! Selectable Pills Component
//!
//! Grid of clickable pills where any number can be selected at once.
//! Selected pills get the `selected` class.

use dioxus::prelude::*;

/// Properties for the TogglePills component
#[derive(Clone, PartialEq, Props)]
pub struct TogglePillsProps {
    /// Labels of all pills, in display order
    pub options: Vec<String>,
    /// Labels currently selected
    pub selected: Vec<String>,
    /// Handler called with the label of the clicked pill
    pub on_toggle: EventHandler<String>,
}

/// Displays a wrapping grid of multi-select pills
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TogglePills {
///         options: catalog.clone(),
///         selected: selector.read().selected().as_slice().to_vec(),
///         on_toggle: move |label: String| { selector.write().toggle(&label); }
///     }
/// }
/// ```
#[component]
pub fn TogglePills(props: TogglePillsProps) -> Element {
    rsx! {
        div {
            class: "toggle-pills",
            role: "group",
            for (index, label) in props.options.iter().enumerate() {
                TogglePill {
                    key: "{pill_key(index, label)}",
                    label: label.clone(),
                    selected: props.selected.contains(label),
                    on_click: {
                        let label = label.clone();
                        let on_toggle = props.on_toggle;
                        move |_| on_toggle.call(label.clone())
                    },
                }
            }
        }
    }
}

/// Properties for a single pill
#[derive(Clone, PartialEq, Props)]
pub struct TogglePillProps {
    /// The pill label
    pub label: String,
    /// Whether this pill is selected
    #[props(default = false)]
    pub selected: bool,
    /// Handler called when clicked
    pub on_click: EventHandler<()>,
}

#[component]
pub fn TogglePill(props: TogglePillProps) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: pill_class(props.selected),
            "aria-pressed": if props.selected { "true" } else { "false" },
            onclick: move |_| props.on_click.call(()),
            "{props.label}"
        }
    }
}

// Labels may repeat in caller data; the position keeps sibling keys unique.
fn pill_key(index: usize, label: &str) -> String {
    format!("{}:{}", index, label)
}

fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill interest-item selected"
    } else {
        "pill interest-item"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pill_class_reflects_selection() {
        assert!(pill_class(true).ends_with("selected"));
        assert!(!pill_class(false).contains("selected"));
    }

    #[test]
    fn pill_keys_unique_for_repeated_labels() {
        let labels = ["Food", "Food", "Hiking"];
        let keys: Vec<String> = labels
            .iter()
            .enumerate()
            .map(|(i, l)| pill_key(i, l))
            .collect();
        assert_eq!(keys, vec!["0:Food", "1:Food", "2:Hiking"]);
    }
}
