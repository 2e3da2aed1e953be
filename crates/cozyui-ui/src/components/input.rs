//! Input Field Components
//!
//! Text inputs, textareas and labels following the design system:
//! - Paper background with a 2px line border
//! - Terracotta border on focus
//! - Destructive red border when flagged as invalid
//! - Labels pair externally via `r#for`, shadcn-style

use dioxus::prelude::*;

use super::merge_class;

/// Form label in the handwritten heading font
#[derive(Clone, PartialEq, Props)]
pub struct LabelProps {
    /// The id of the control this label describes
    pub r#for: String,
    /// Label content
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Label(props: LabelProps) -> Element {
    let full_class = merge_class("label", &props.class);

    rsx! {
        label { class: "{full_class}", r#for: "{props.r#for}", {props.children} }
    }
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text (displayed muted)
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Marks the field invalid (destructive border)
    #[props(default = false)]
    pub error: bool,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Label { r#for: "email".to_string(), "E-posta" }
///     Input {
///         id: "email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         input_type: "email".to_string(),
///         placeholder: "ornek@eposta.com".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        input {
            id: props.id.as_deref().unwrap_or(""),
            class: field_class("input", props.error, &props.class),
            r#type: "{props.input_type}",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            required: props.required,
            disabled: props.disabled,
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    /// Marks the field invalid (destructive border)
    #[props(default = false)]
    pub error: bool,
    /// Whether the textarea is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        textarea {
            id: props.id.as_deref().unwrap_or(""),
            class: field_class("input textarea", props.error, &props.class),
            rows: "{props.rows}",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            required: props.required,
            disabled: props.disabled,
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}

/// Compose a field's class list from its base, error flag and extras
pub(crate) fn field_class(base: &str, error: bool, extra: &Option<String>) -> String {
    let flagged = if error {
        format!("{} input-error", base)
    } else {
        base.to_string()
    };
    merge_class(&flagged, extra)
}
