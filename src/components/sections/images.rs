//! Section 08: one image component, four frames.

use cozyui_ui::{Image, ImageVariant};
use dioxus::prelude::*;

#[component]
pub fn Images() -> Element {
    rsx! {
        section { id: "images", class: "showcase-section",
            h2 { class: "section-title", "08. Görseller" }

            div { class: "three-col",
                div { class: "image-demo",
                    span { class: "variant-tag variant-tag-primary", "Variant: Retro" }
                    Image {
                        src: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?q=80&w=2671&auto=format&fit=crop".to_string(),
                        alt: "Takım Çalışması".to_string(),
                        variant: ImageVariant::Retro,
                    }
                    p { class: "image-note", "Sert gölge ve kalın kenarlık ile \"retro\" görünüm." }
                }

                div { class: "image-demo",
                    span { class: "variant-tag variant-tag-sage", "Variant: Polaroid" }
                    Image {
                        src: "https://images.unsplash.com/photo-1542273917363-3b1817f69a2d?q=80&w=2674&auto=format&fit=crop".to_string(),
                        alt: "Doğa Yürüyüşü".to_string(),
                        variant: ImageVariant::Polaroid,
                        caption: "Orman Gezisi '24".to_string(),
                    }
                }

                div { class: "image-demo",
                    span { class: "variant-tag variant-tag-ink", "Variant: Default" }
                    Image {
                        src: "https://images.unsplash.com/photo-1493612276216-ee3925520721?q=80&w=2564&auto=format&fit=crop".to_string(),
                        alt: "Masa Düzeni".to_string(),
                    }

                    div { class: "circle-row",
                        div {
                            span { class: "variant-tag variant-tag-sub", "Variant: Circle" }
                            Image {
                                src: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=2864&auto=format&fit=crop".to_string(),
                                alt: "Profil".to_string(),
                                variant: ImageVariant::Circle,
                                class: "avatar-lg".to_string(),
                            }
                        }
                        p { class: "image-note", "Profil fotoğrafları veya avatarlar için yuvarlak varyant." }
                    }
                }
            }
        }
    }
}
