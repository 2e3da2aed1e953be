//! Dialog Components
//!
//! Modal dialog with a blurred backdrop. Closes on backdrop click or the
//! corner X; clicks inside the panel never leak to the backdrop.

use dioxus::prelude::*;

use super::{merge_class, CloseButton};

/// Modal dialog
///
/// # Example
///
/// ```rust,ignore
/// let mut open = use_signal(|| false);
///
/// rsx! {
///     Dialog {
///         show: open(),
///         on_close: move |_| open.set(false),
///         DialogHeader {
///             DialogTitle { "Hoşgeldin!" }
///             DialogDescription { "Tamamen özelleştirilebilir bir modal." }
///         }
///         DialogFooter {
///             Button { onclick: move |_| open.set(false), "Anlaşıldı" }
///         }
///     }
/// }
/// ```
#[component]
pub fn Dialog(
    /// Whether the dialog is visible
    show: bool,
    /// Called on backdrop click or the close button
    on_close: EventHandler<()>,
    /// Dialog panel content
    children: Element,
) -> Element {
    if !show {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "dialog-panel",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                CloseButton { onclick: move |_| on_close.call(()) }
                {children}
            }
        }
    }
}

/// Properties shared by the dialog sections
#[derive(Clone, PartialEq, Props)]
pub struct DialogSectionProps {
    /// Section content
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Title block at the top of the panel
#[component]
pub fn DialogHeader(props: DialogSectionProps) -> Element {
    rsx! {
        div { class: merge_class("dialog-header", &props.class), {props.children} }
    }
}

/// Handwritten-style dialog heading
#[component]
pub fn DialogTitle(props: DialogSectionProps) -> Element {
    rsx! {
        h2 { class: merge_class("dialog-title", &props.class), {props.children} }
    }
}

/// Muted text under the title
#[component]
pub fn DialogDescription(props: DialogSectionProps) -> Element {
    rsx! {
        p { class: merge_class("dialog-description", &props.class), {props.children} }
    }
}

/// Action row at the bottom of the panel
#[component]
pub fn DialogFooter(props: DialogSectionProps) -> Element {
    rsx! {
        div { class: merge_class("dialog-footer", &props.class), {props.children} }
    }
}
