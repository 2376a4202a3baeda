//! Tag Chips
//!
//! Removable chips rendered from a list. The whole list is re-rendered from
//! `tags` on every change.

use dioxus::prelude::*;

/// Properties for the TagList component
#[derive(Clone, PartialEq, Props)]
pub struct TagListProps {
    /// Tags in display order
    pub tags: Vec<String>,
    /// Handler called with the tag whose remove button was clicked
    pub on_remove: EventHandler<String>,
    /// CSS class of each chip
    #[props(default = "tag".to_string())]
    pub tag_class: String,
}

#[component]
pub fn TagList(props: TagListProps) -> Element {
    rsx! {
        div { class: "tag-list",
            for tag in props.tags.iter() {
                div { key: "{tag}", class: "{props.tag_class}",
                    span { class: "tag-text", "{tag}" }
                    button {
                        r#type: "button",
                        class: "tag-remove",
                        "aria-label": "Remove {tag}",
                        onclick: {
                            let tag = tag.clone();
                            let on_remove = props.on_remove;
                            move |_| on_remove.call(tag.clone())
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}

/// Properties for the TagInput component
#[derive(Clone, PartialEq, Props)]
pub struct TagInputProps {
    /// Element id of the text input
    pub id: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Whether the input border should be marked
    #[props(default = false)]
    pub has_error: bool,
    /// Handler called with the raw text when Add is pressed; returns whether
    /// the tag was accepted (the input is cleared only then)
    pub on_add: Callback<String, bool>,
}

/// Text input with an Add button; Enter also adds
#[component]
pub fn TagInput(props: TagInputProps) -> Element {
    let mut input_value = use_signal(String::new);
    let on_add = props.on_add;

    let class = if props.has_error {
        "input-field has-error"
    } else {
        "input-field"
    };

    rsx! {
        div { class: "tag-input",
            input {
                id: "{props.id}",
                class: class,
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{input_value}",
                oninput: move |e| input_value.set(e.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        evt.prevent_default();
                        submit_tag(input_value, on_add);
                    }
                },
            }
            button {
                r#type: "button",
                class: "btn-secondary",
                onclick: move |_| submit_tag(input_value, on_add),
                "Add"
            }
        }
    }
}

fn submit_tag(mut input_value: Signal<String>, on_add: Callback<String, bool>) {
    let raw = input_value.read().clone();
    if on_add.call(raw) {
        input_value.set(String::new());
    } else {
        tracing::debug!("Tag input rejected");
    }
}
