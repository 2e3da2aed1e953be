//! Section 05: the dialog, opened from a teaser panel.

use cozyui_ui::{
    Button, ButtonSize, ButtonVariant, Dialog, DialogDescription, DialogFooter, DialogHeader,
    DialogTitle,
};
use dioxus::prelude::*;

#[component]
pub fn Popups() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        section { id: "popups", class: "showcase-section",
            h2 { class: "section-title", "05. Popuplar" }

            div { class: "popup-teaser",
                div { class: "popup-bell", "🔔" }
                h3 { class: "popup-teaser-title", "Bildirim Modalı" }
                p { class: "popup-teaser-text",
                    "Kullanıcı etkileşimi için özelleştirilmiş, arka planı "
                    "bulanıklaştıran diyalog pencereleri."
                }
                Button {
                    size: ButtonSize::Lg,
                    onclick: move |_| {
                        tracing::debug!("Demo dialog opened");
                        open.set(true);
                    },
                    "Örneği Görüntüle"
                }
            }

            Dialog {
                show: open(),
                on_close: move |_| {
                    tracing::debug!("Demo dialog dismissed");
                    open.set(false);
                },
                DialogHeader {
                    DialogTitle { "Cozy UI'ya Hoşgeldin! 👋" }
                    DialogDescription {
                        "Bu, tamamen özelleştirilebilir ve erişilebilir bir modal bileşenidir."
                    }
                }
                div { class: "tip-box",
                    "💡 İpucu: Modalı kapatmak için dışarıya tıklayabilir veya sağ "
                    "üstteki çarpı ikonunu kullanabilirsiniz."
                }
                DialogFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| open.set(false),
                        "İptal"
                    }
                    Button { onclick: move |_| open.set(false), "Anlaşıldı" }
                }
            }
        }
    }
}
