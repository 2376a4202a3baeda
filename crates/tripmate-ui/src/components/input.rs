//! Input Field Components
//!
//! Labelled text inputs and selects that carry their own error annotation,
//! plus the search box used on the plans page.

use dioxus::prelude::*;

use super::annotation::{control_class, ErrorAnnotation};

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Element id, also used for label association
    pub id: String,
    /// Label text
    pub label: String,
    /// Current input value
    pub value: String,
    /// Handler called with the new value on every keystroke
    pub oninput: EventHandler<String>,
    /// Optional handler called when the value is committed (change event)
    #[props(default)]
    pub onchange: Option<EventHandler<String>>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, date, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Validation annotation for this field
    #[props(default)]
    pub error: Option<String>,
    /// Extra content rendered after the annotation (e.g. an advisory)
    #[props(default)]
    pub children: Element,
}

/// Text input with label and inline annotation
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     TextField {
///         id: "name".to_string(),
///         label: "Full name".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         error: report().error_for(Field::Name).map(str::to_string),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let class = control_class("input-field", props.error.is_some());
    let onchange = props.onchange;

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
                onchange: move |e| {
                    if let Some(handler) = &onchange {
                        handler.call(e.value());
                    }
                },
            }
            ErrorAnnotation { message: props.error.clone() }
            {props.children}
        }
    }
}

/// Properties for the SelectField component
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    /// Element id, also used for label association
    pub id: String,
    /// Label text
    pub label: String,
    /// Currently selected value (empty selects the placeholder)
    pub value: String,
    /// `(value, text)` pairs rendered after the placeholder
    pub options: Vec<(String, String)>,
    /// Text of the empty first option
    pub placeholder: String,
    /// Handler called with the newly selected value
    pub onchange: EventHandler<String>,
    /// Whether the select is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Validation annotation for this field
    #[props(default)]
    pub error: Option<String>,
}

/// Select with a placeholder option, label and inline annotation
///
/// The option list is rebuilt from `options` on every render.
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let class = control_class("input-field select-field", props.error.is_some());

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            select {
                id: "{props.id}",
                class: "{class}",
                disabled: props.disabled,
                value: "{props.value}",
                onchange: move |e| props.onchange.call(e.value()),
                option { value: "", selected: props.value.is_empty(), "{props.placeholder}" }
                for (value, text) in props.options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == props.value,
                        "{text}"
                    }
                }
            }
            ErrorAnnotation { message: props.error.clone() }
        }
    }
}

/// Search input with icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called on every keystroke
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Search plans...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                id: "search",
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
