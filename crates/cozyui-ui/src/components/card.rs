//! Card Components
//!
//! Content containers with the soft-shadow cozy look. The family mirrors
//! the usual composition: Card wraps CardHeader / CardContent / CardFooter,
//! with CardTitle and CardDescription for the header text.

use dioxus::prelude::*;

use super::merge_class;

/// Properties shared by the card family: children plus optional classes
#[derive(Clone, PartialEq, Props)]
pub struct CardSectionProps {
    /// Section content
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Surface container with border, cozy radius and soft shadow
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         CardHeader {
///             CardTitle { "Görevler" }
///             CardDescription { "Bugünün planı" }
///         }
///         CardContent { p { "..." } }
///         CardFooter { Button { "Kaydet" } }
///     }
/// }
/// ```
#[component]
pub fn Card(props: CardSectionProps) -> Element {
    rsx! {
        div { class: merge_class("card", &props.class), {props.children} }
    }
}

/// Top section of a card, padded, usually title + description
#[component]
pub fn CardHeader(props: CardSectionProps) -> Element {
    rsx! {
        div { class: merge_class("card-header", &props.class), {props.children} }
    }
}

/// Handwritten-style card heading
#[component]
pub fn CardTitle(props: CardSectionProps) -> Element {
    rsx! {
        h3 { class: merge_class("card-title", &props.class), {props.children} }
    }
}

/// Muted one-liner under the title
#[component]
pub fn CardDescription(props: CardSectionProps) -> Element {
    rsx! {
        p { class: merge_class("card-description", &props.class), {props.children} }
    }
}

/// Main body of a card
#[component]
pub fn CardContent(props: CardSectionProps) -> Element {
    rsx! {
        div { class: merge_class("card-content", &props.class), {props.children} }
    }
}

/// Bottom section, typically action buttons
#[component]
pub fn CardFooter(props: CardSectionProps) -> Element {
    rsx! {
        div { class: merge_class("card-footer", &props.class), {props.children} }
    }
}
