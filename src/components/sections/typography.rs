//! Section 01: the two-font system behind the hand-drawn look.

use cozyui_ui::{Card, CardContent};
use dioxus::prelude::*;

#[component]
pub fn Typography() -> Element {
    rsx! {
        section { id: "typography", class: "showcase-section",
            div { class: "section-heading",
                h2 { class: "section-title", "01. Tipografi" }
                span { class: "section-tag", "Font Ailesi" }
            }

            Card {
                CardContent {
                    div { class: "type-grid",
                        div { class: "type-samples",
                            h1 { "Merhaba Dünya" }
                            h2 { "Samimi Tasarımlar" }
                            h3 { "UI Bileşenleri" }
                        }
                        div { class: "font-panel",
                            p { class: "font-name-hand", "Patrick Hand" }
                            p { class: "font-note",
                                "Başlıklar için kullanılan bu font, tasarıma organik ve "
                                "insani bir dokunuş katar."
                            }
                            p { class: "font-name-body", "Nunito (Body)" }
                            p { class: "font-note",
                                "Okunabilirlik için gövde metinlerinde Nunito kullanılır. "
                                "Yumuşak köşeleri genel tasarımla uyum sağlar."
                            }
                        }
                    }
                }
            }
        }
    }
}
