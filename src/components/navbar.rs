//! Sticky top navigation: brand, section anchors, theme toggle.

use cozyui_ui::{Button, ButtonSize, IconButton};
use dioxus::prelude::*;

use crate::context::use_theme_mode;

/// Anchor targets for the showcase sections, in page order.
const SECTION_LINKS: [(&str, &str); 8] = [
    ("#typography", "Yazı"),
    ("#buttons", "Buton"),
    ("#cards", "Kart"),
    ("#inputs", "Girdi"),
    ("#popups", "Popup"),
    ("#charts", "Grafik"),
    ("#forms", "Form"),
    ("#images", "Görsel"),
];

#[component]
pub fn Navbar() -> Element {
    let mut mode = use_theme_mode();

    let toggle_theme = move |_| {
        let next = mode().toggled();
        tracing::debug!("Theme switched to {:?}", next);
        mode.set(next);
    };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                a { class: "navbar-brand", href: "#", "CozyUI." }

                div { class: "navbar-links",
                    for (href, label) in SECTION_LINKS {
                        a { class: "navbar-link", href: href, {label} }
                    }
                }

                div { class: "navbar-actions",
                    IconButton {
                        aria_label: "Tema Değiştir".to_string(),
                        class: "theme-toggle".to_string(),
                        onclick: toggle_theme,
                        if mode().is_dark() { "☀️" } else { "🌙" }
                    }
                    Button {
                        size: ButtonSize::Sm,
                        class: "btn-download".to_string(),
                        "İndir"
                    }
                }
            }
        }
    }
}
