//! Section 07: contact form with a simulated submission.

use std::time::Duration;

use cozyui_ui::{Button, ButtonSize, Card, CardContent, Checkbox, Input, Label, Select, TextArea};
use dioxus::prelude::*;

#[component]
pub fn Forms() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(|| "Genel Sorular".to_string());
    let mut message = use_signal(String::new);
    let mut consent = use_signal(|| false);
    let mut submitted = use_signal(|| false);

    let submit = move |e: Event<FormData>| {
        e.prevent_default();
        tracing::info!("Contact form submitted (simulated)");
        submitted.set(true);
        // Flip back after three seconds; nothing is actually sent
        spawn(async move {
            tokio::time::sleep(Duration::from_secs(3)).await;
            submitted.set(false);
        });
    };

    rsx! {
        section { id: "forms", class: "showcase-section",
            h2 { class: "section-title", "07. Formlar" }

            Card { class: "form-card".to_string(),
                div { class: "form-card-header",
                    h3 { "Bize Ulaşın" }
                    p { "Projeleriniz için teklif alın veya sadece merhaba deyin." }
                }

                CardContent { class: "form-body".to_string(),
                    if submitted() {
                        div { class: "form-success",
                            div { class: "success-icon", "✓" }
                            h4 { "Mesajınız Alındı!" }
                            p { "En kısa sürede size geri dönüş yapacağız." }
                        }
                    } else {
                        form { class: "contact-form", onsubmit: submit,
                            div { class: "form-grid",
                                div { class: "field",
                                    Label { r#for: "form-name".to_string(), "Adınız Soyadınız" }
                                    Input {
                                        id: "form-name".to_string(),
                                        value: name(),
                                        oninput: move |v| name.set(v),
                                        placeholder: "John Doe".to_string(),
                                        required: true,
                                    }
                                }
                                div { class: "field",
                                    Label { r#for: "form-email".to_string(), "E-posta Adresiniz" }
                                    Input {
                                        id: "form-email".to_string(),
                                        value: email(),
                                        oninput: move |v| email.set(v),
                                        input_type: "email".to_string(),
                                        placeholder: "ornek@site.com".to_string(),
                                        required: true,
                                    }
                                }
                            }

                            div { class: "field",
                                Label { r#for: "form-subject".to_string(), "Konu" }
                                Select {
                                    id: "form-subject".to_string(),
                                    value: subject(),
                                    onchange: move |v| subject.set(v),
                                    option { value: "Genel Sorular", "Genel Sorular" }
                                    option { value: "Proje Teklifi", "Proje Teklifi" }
                                    option { value: "Teknik Destek", "Teknik Destek" }
                                }
                            }

                            div { class: "field",
                                Label { r#for: "form-message".to_string(), "Mesajınız" }
                                TextArea {
                                    id: "form-message".to_string(),
                                    value: message(),
                                    oninput: move |v| message.set(v),
                                    placeholder: "Size nasıl yardımcı olabiliriz?".to_string(),
                                    rows: 5,
                                    required: true,
                                }
                            }

                            div { class: "consent-box",
                                Checkbox {
                                    id: "form-terms".to_string(),
                                    checked: consent(),
                                    onchange: move |v| consent.set(v),
                                    required: true,
                                }
                                Label {
                                    r#for: "form-terms".to_string(),
                                    class: "consent-label".to_string(),
                                    strong { "Kişisel Verilerin Korunması Kanunu" }
                                    " kapsamında verilerimin işlenmesini onaylıyorum."
                                }
                            }

                            Button {
                                size: ButtonSize::Lg,
                                button_type: "submit".to_string(),
                                class: "btn-block btn-submit".to_string(),
                                "Mesajı Gönder 🚀"
                            }
                        }
                    }
                }
            }
        }
    }
}
