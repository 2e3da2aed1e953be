//! Image Components
//!
//! Framed images in four moods:
//! - Default: cozy radius, thin border, soft shadow
//! - Retro: ink border with the hard offset shadow
//! - Polaroid: white frame, tilted, handwritten caption at the bottom
//! - Circle: round avatar crop

use dioxus::prelude::*;

use super::merge_class;

/// Image frame variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ImageVariant {
    /// Cozy radius, thin border, soft shadow
    #[default]
    Default,
    /// Ink border with the hard offset shadow
    Retro,
    /// White frame with room for a caption, slightly rotated
    Polaroid,
    /// Round crop for avatars
    Circle,
}

impl ImageVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ImageVariant::Default => "img-default",
            ImageVariant::Retro => "img-retro",
            ImageVariant::Polaroid => "img-polaroid",
            ImageVariant::Circle => "img-circle",
        }
    }
}

/// Properties for the Image component
#[derive(Clone, PartialEq, Props)]
pub struct ImageProps {
    /// Image source URL
    pub src: String,
    /// Alt text
    pub alt: String,
    /// Frame variant
    #[props(default)]
    pub variant: ImageVariant,
    /// Caption, rendered only in the polaroid frame
    #[props(default)]
    pub caption: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Framed image
///
/// A polaroid with a caption renders as a `figure` so the caption sits
/// inside the frame's bottom margin; every other combination is a plain
/// `img` with the variant class.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Image {
///         src: "/photos/forest.jpg".to_string(),
///         alt: "Orman yürüyüşü".to_string(),
///         variant: ImageVariant::Polaroid,
///         caption: "Orman Gezisi '24".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Image(props: ImageProps) -> Element {
    let full_class = merge_class(props.variant.class(), &props.class);

    if props.variant == ImageVariant::Polaroid {
        if let Some(caption) = &props.caption {
            return rsx! {
                figure { class: "{full_class}",
                    img { class: "img-polaroid-photo", src: "{props.src}", alt: "{props.alt}" }
                    figcaption { class: "img-polaroid-caption", "{caption}" }
                }
            };
        }
    }

    rsx! {
        img { class: "{full_class}", src: "{props.src}", alt: "{props.alt}" }
    }
}
