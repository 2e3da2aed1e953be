//! Section 02: the two button families, retro and soft, side by side.

use cozyui_ui::{Button, ButtonVariant, Card};
use dioxus::prelude::*;

#[component]
pub fn Buttons() -> Element {
    rsx! {
        section { id: "buttons", class: "showcase-section",
            h2 { class: "section-title", "02. Butonlar" }

            div { class: "two-col",
                Card { class: "button-panel".to_string(),
                    h3 { class: "panel-title", "Retro / Sert Gölge" }
                    div { class: "button-stack",
                        Button { class: "btn-block".to_string(), "Primary Action" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            class: "btn-block".to_string(),
                            "Secondary Action"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "btn-block".to_string(),
                            "Outline Style"
                        }
                    }
                }

                Card { class: "button-panel".to_string(),
                    h3 { class: "panel-title", "Modern / Yumuşak" }
                    div { class: "button-stack",
                        Button {
                            variant: ButtonVariant::Soft,
                            class: "btn-block".to_string(),
                            "Soft Primary"
                        }
                        Button {
                            variant: ButtonVariant::SoftSecondary,
                            class: "btn-block".to_string(),
                            "Soft Secondary"
                        }
                        Button {
                            variant: ButtonVariant::Link,
                            class: "btn-block".to_string(),
                            "Sadece Link Metni"
                        }
                    }
                }
            }
        }
    }
}
