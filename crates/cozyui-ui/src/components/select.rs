//! Select Component
//!
//! Native select restyled for the cozy look: the browser arrow is hidden
//! and a chevron ornament is drawn over the right edge instead.

use dioxus::prelude::*;

use super::input::field_class;

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    /// Currently selected value
    pub value: String,
    /// Handler called when the selection changes
    pub onchange: EventHandler<String>,
    /// The `option` elements
    pub children: Element,
    /// Marks the field invalid (destructive border)
    #[props(default = false)]
    pub error: bool,
    /// Whether the select is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the select is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Dropdown select field
///
/// # Example
///
/// ```rust,ignore
/// let mut topic = use_signal(|| "genel".to_string());
///
/// rsx! {
///     Select {
///         value: topic(),
///         onchange: move |v| topic.set(v),
///         option { value: "genel", "Genel Soru" }
///         option { value: "teklif", "Proje Teklifi" }
///     }
/// }
/// ```
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div { class: "select-wrapper",
            select {
                id: props.id.as_deref().unwrap_or(""),
                class: field_class("input select", props.error, &props.class),
                value: "{props.value}",
                required: props.required,
                disabled: props.disabled,
                onchange: move |e| props.onchange.call(e.value()),
                {props.children}
            }
            span { class: "select-chevron", "aria-hidden": "true", "\u{25BE}" }
        }
    }
}
