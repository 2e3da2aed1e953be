//! Button Components
//!
//! Button styles following the design system:
//! - Primary: Terracotta fill, hard ink shadow, lifts on hover
//! - Secondary: Sage fill with the same hard-shadow treatment
//! - Outline: Surface fill with ink border
//! - Ghost / Link: Chromeless actions
//! - Soft variants: Tinted fills that saturate on hover

use dioxus::prelude::*;

use super::merge_class;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary action - terracotta fill, hard shadow, hover lift
    #[default]
    Primary,
    /// Secondary action - sage fill, hard shadow
    Secondary,
    /// Surface fill with ink border
    Outline,
    /// Chromeless, tinted background on hover
    Ghost,
    /// Text-only with a dashed underline
    Link,
    /// Tinted terracotta fill
    Soft,
    /// Tinted sage fill
    SoftSecondary,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Link => "btn-link",
            ButtonVariant::Soft => "btn-soft",
            ButtonVariant::SoftSecondary => "btn-soft-secondary",
        }
    }
}

/// Button size variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    /// Standard height and padding
    #[default]
    Md,
    /// Compact, for toolbars and card corners
    Sm,
    /// Large call-to-action
    Lg,
    /// Square, icon-only
    Icon,
}

impl ButtonSize {
    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Md => "btn-md",
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Lg => "btn-lg",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Size variant
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Shows a spinner and disables the button while a task runs
    #[props(default = false)]
    pub loading: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component following the design system
///
/// # Design Notes
///
/// - Filled variants carry the hard `3px 3px 0` ink shadow
/// - Hover lifts the button 2px and deepens the shadow
/// - Active presses it back down flat
/// - Patrick Hand at heading weight, so buttons read as handwritten
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         onclick: move |_| save(),
///         "Kaydet"
///     }
///
///     Button {
///         variant: ButtonVariant::Outline,
///         size: ButtonSize::Sm,
///         "Detaylar"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = format!("btn {} {}", props.variant.class(), props.size.class());
    let full_class = merge_class(&base, &props.class);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled || props.loading,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if props.loading {
                span { class: "btn-spinner", "aria-hidden": "true" }
            }
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, theme toggle, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = merge_class("icon-btn", &props.class);

    rsx! {
        button {
            class: "{full_class}",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
