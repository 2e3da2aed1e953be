//! Hero banner with the version badge and the two calls to action.

use cozyui_ui::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-badge", "✨ v2.0 Şimdi Yayında" }
            h1 { class: "hero-title",
                "Dijital dünyaya"
                br {}
                span { class: "hero-accent", "sıcaklık" }
                " katın."
            }
            p { class: "hero-subtitle",
                "Modern web için elle çizilmiş hissi veren, samimi ve erişilebilir "
                "bileşen kütüphanesi."
            }
            div { class: "hero-actions",
                Button { size: ButtonSize::Lg, "Keşfetmeye Başla" }
                Button { size: ButtonSize::Lg, variant: ButtonVariant::Outline, "Github" }
            }
        }
    }
}
