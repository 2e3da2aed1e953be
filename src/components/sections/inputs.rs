//! Section 04: text fields, select, textarea and checkbox states.

use cozyui_ui::{Card, Checkbox, Input, Label, Select, TextArea};
use dioxus::prelude::*;

#[component]
pub fn Inputs() -> Element {
    let mut standard = use_signal(String::new);
    let mut broken_mail = use_signal(|| "hatali@mail".to_string());
    let mut choice = use_signal(|| "Seçenek 1".to_string());
    let mut note = use_signal(String::new);
    let mut accepted = use_signal(|| false);

    rsx! {
        section { id: "inputs", class: "showcase-section",
            h2 { class: "section-title", "04. Girdiler" }

            div { class: "two-col",
                Card { class: "field-panel".to_string(),
                    div { class: "field",
                        Label { r#for: "input-default".to_string(), "Standart Input" }
                        Input {
                            id: "input-default".to_string(),
                            value: standard(),
                            oninput: move |v| standard.set(v),
                            placeholder: "Bir şeyler yazın...".to_string(),
                        }
                    }

                    div { class: "field",
                        Label {
                            r#for: "input-error".to_string(),
                            class: "label-error".to_string(),
                            "Hatalı Durum"
                        }
                        Input {
                            id: "input-error".to_string(),
                            value: broken_mail(),
                            oninput: move |v| broken_mail.set(v),
                            error: true,
                            placeholder: "Yanlış format...".to_string(),
                        }
                        p { class: "field-hint-error", "Lütfen geçerli bir mail girin." }
                    }

                    div { class: "field",
                        Label { r#for: "input-disabled".to_string(), "Devre Dışı" }
                        Input {
                            id: "input-disabled".to_string(),
                            value: String::new(),
                            oninput: move |_| {},
                            disabled: true,
                            placeholder: "Buraya yazamazsınız...".to_string(),
                        }
                    }
                }

                Card { class: "field-panel".to_string(),
                    div { class: "field",
                        Label { r#for: "select-demo".to_string(), "Seçim Kutusu" }
                        Select {
                            id: "select-demo".to_string(),
                            value: choice(),
                            onchange: move |v| choice.set(v),
                            option { value: "Seçenek 1", "Seçenek 1" }
                            option { value: "Seçenek 2", "Seçenek 2" }
                            option { value: "Seçenek 3", "Seçenek 3" }
                        }
                    }

                    div { class: "field",
                        Label { r#for: "textarea-demo".to_string(), "Metin Alanı" }
                        TextArea {
                            id: "textarea-demo".to_string(),
                            value: note(),
                            oninput: move |v| note.set(v),
                            placeholder: "Uzun bir açıklama giriniz...".to_string(),
                            rows: 3,
                        }
                    }

                    div { class: "check-row",
                        Checkbox {
                            id: "terms-demo".to_string(),
                            checked: accepted(),
                            onchange: move |v| accepted.set(v),
                        }
                        Label { r#for: "terms-demo".to_string(), "Şartları okudum ve kabul ediyorum" }
                    }
                }
            }
        }
    }
}
