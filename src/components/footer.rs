//! Page footer: brand mark, link row, colophon.

use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                h4 { class: "footer-brand", "CozyUI." }
                div { class: "footer-links",
                    a { href: "#", "Hakkımızda" }
                    a { href: "#", "Lisans" }
                    a { href: "#", "Github" }
                    a { href: "#", "Twitter" }
                }
                p { class: "footer-note", "© 2025 CozyUI Component Library. Sevgiyle kodlandı." }
            }
        }
    }
}
