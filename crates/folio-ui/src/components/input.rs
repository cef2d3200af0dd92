//! Form Field Components
//!
//! Labelled inputs for the contact form. A field shows its validation
//! state through a status class (`field-valid` / `field-invalid`) that the
//! caller derives from the form model; the component only reports input
//! and blur events back.

use dioxus::prelude::*;
use folio_core::FieldStatus;

use super::class_list;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Field name, also used to derive the element id
    pub name: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when the field loses focus
    pub onblur: EventHandler<()>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub status: FieldStatus,
}

/// Element id for the field called `name`
pub fn field_id(name: &str) -> String {
    format!("field-{}", name)
}

/// Class string for a field control in the given validation state
pub fn field_class(base: &str, status: FieldStatus) -> String {
    class_list(base, Some(status.class()))
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         name: "email".to_string(),
///         value: form.read().value("email").unwrap_or_default().to_string(),
///         oninput: move |v| form.write().input("email", v),
///         onblur: move |_| { form.write().blur("email"); },
///         input_type: "email".to_string(),
///         status: form.read().status("email").unwrap_or_default(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = field_id(&props.name);
    let class = field_class("input-field", props.status);

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                name: "{props.name}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| props.onblur.call(()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub name: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    pub onblur: EventHandler<()>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub status: FieldStatus,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = field_id(&props.name);
    let class = field_class("input-field textarea", props.status);

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                name: "{props.name}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| props.onblur.call(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_id_from_name() {
        assert_eq!(field_id("email"), "field-email");
    }

    #[test]
    fn field_class_by_status() {
        assert_eq!(field_class("input-field", FieldStatus::Unchecked), "input-field");
        assert_eq!(field_class("input-field", FieldStatus::Valid), "input-field field-valid");
        assert_eq!(
            field_class("input-field textarea", FieldStatus::Invalid),
            "input-field textarea field-invalid"
        );
    }
}
