//! Checkbox Component
//!
//! The native input is kept for form semantics but drawn as a rounded box
//! with a check overlay, muted border unchecked, terracotta fill checked.

use dioxus::prelude::*;

use super::merge_class;

/// Properties for the Checkbox component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    /// Whether the box is checked
    #[props(default = false)]
    pub checked: bool,
    /// Handler called with the new checked state
    #[props(default)]
    pub onchange: Option<EventHandler<bool>>,
    /// Whether the checkbox is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the checkbox is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled checkbox
///
/// # Example
///
/// ```rust,ignore
/// let mut accepted = use_signal(|| false);
///
/// rsx! {
///     Checkbox {
///         id: "terms".to_string(),
///         checked: accepted(),
///         onchange: move |v| accepted.set(v),
///     }
///     Label { r#for: "terms".to_string(), "Şartları kabul ediyorum" }
/// }
/// ```
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let wrapper_class = merge_class("checkbox-wrapper", &props.class);

    rsx! {
        span { class: "{wrapper_class}",
            input {
                id: props.id.as_deref().unwrap_or(""),
                class: "checkbox-input",
                r#type: "checkbox",
                checked: props.checked,
                required: props.required,
                disabled: props.disabled,
                onchange: move |e| {
                    if let Some(handler) = &props.onchange {
                        handler.call(e.checked());
                    }
                },
            }
            span { class: "checkbox-check", "aria-hidden": "true", "\u{2713}" }
        }
    }
}
