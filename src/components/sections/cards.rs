//! Section 03: three card recipes built from the same primitives.

use cozyui_ui::{Card, CardContent, CardHeader, CardTitle};
use dioxus::prelude::*;

#[component]
pub fn Cards() -> Element {
    rsx! {
        section { id: "cards", class: "showcase-section",
            h2 { class: "section-title", "03. Kartlar" }

            div { class: "three-col",
                // Blog teaser
                Card { class: "blog-card".to_string(),
                    div { class: "blog-cover", span { class: "blog-cover-mark", "♥" } }
                    CardContent { class: "blog-body".to_string(),
                        span { class: "blog-tag", "Blog" }
                        h3 { class: "blog-title", "Minimalizm" }
                        p { class: "blog-text",
                            "Sadeleşmek sadece eşyaları azaltmak değil, zihni berraklaştırmaktır."
                        }
                        span { class: "blog-more", "Oku →" }
                    }
                }

                // Quote
                Card { class: "quote-card".to_string(),
                    div { class: "quote-mark", "aria-hidden": "true", "“" }
                    p { class: "quote-text", "Basitlik, karmaşıklığın en son noktasıdır." }
                    div { class: "quote-author", "- Leonardo da Vinci" }
                }

                // Task list
                Card {
                    CardHeader { CardTitle { "Görevler" } }
                    CardContent {
                        ul { class: "task-list",
                            li { class: "task-item task-done",
                                span { class: "task-box task-box-checked", "✓" }
                                span { class: "task-text", "Toplantı notları" }
                            }
                            li { class: "task-item",
                                span { class: "task-box" }
                                span { class: "task-text", "Dioxus bileşenleri" }
                            }
                            li { class: "task-item",
                                span { class: "task-box" }
                                span { class: "task-text", "Dokümantasyon" }
                            }
                        }
                    }
                }
            }
        }
    }
}
