//! Section 06: the market line chart, the coffee bars and the stat cards.

use cozyui_chart::HoverSample;
use cozyui_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    ChartSurface,
};
use dioxus::prelude::*;

use crate::data::{
    COFFEE_CUPS, HAPPINESS_LABEL, MARKET_CHANGE_LABEL, MARKET_CLOSING_LABEL, MARKET_DATA,
    SESSION_HOURS, TOTAL_USERS_LABEL,
};

#[component]
pub fn Charts() -> Element {
    let mut hovered: Signal<Option<HoverSample>> = use_signal(|| None);

    // The header mirrors the hovered price; idle shows the closing figure
    let price_label = match hovered() {
        Some(sample) => sample.label,
        None => MARKET_CLOSING_LABEL.to_string(),
    };

    rsx! {
        section { id: "charts", class: "showcase-section",
            h2 { class: "section-title", "06. Grafikler" }

            // Market line chart
            Card {
                CardHeader { class: "market-header".to_string(),
                    div { class: "market-header-row",
                        div {
                            CardTitle { class: "market-title".to_string(),
                                span { class: "market-title-icon", "📈" }
                                "Piyasa Hareketleri"
                            }
                            CardDescription {
                                "BIST 100 Endeksi - Gerçek Zamanlı Veri (Simülasyon)"
                            }
                        }
                        div { class: "market-readout",
                            div { class: "market-price-block",
                                p { class: "market-price", {price_label} }
                                p { class: "market-delta", "▲ {MARKET_CHANGE_LABEL}" }
                            }
                            Button {
                                size: ButtonSize::Sm,
                                variant: ButtonVariant::Outline,
                                "Detaylar"
                            }
                        }
                    }
                }
                CardContent { class: "market-body".to_string(),
                    div { class: "chart-frame",
                        div { class: "grid-lines", "aria-hidden": "true",
                            div { class: "grid-line" }
                            div { class: "grid-line" }
                            div { class: "grid-line" }
                            div { class: "grid-line" }
                            div { class: "grid-line" }
                        }
                        ChartSurface {
                            data: MARKET_DATA.to_vec(),
                            on_hover: move |sample| hovered.set(sample),
                        }
                    }
                    div { class: "x-axis",
                        for hour in SESSION_HOURS {
                            span { {hour} }
                        }
                    }
                }
            }

            div { class: "two-col",
                // Weekly coffee bars, tooltips are pure CSS
                Card {
                    CardHeader {
                        CardTitle {
                            span { class: "market-title-icon", "📊" }
                            "Haftalık Kahve Tüketimi"
                        }
                        CardDescription { "Fincan bazında günlük veriler" }
                    }
                    CardContent {
                        div { class: "bar-chart",
                            for (cups, day) in COFFEE_CUPS {
                                div { class: "bar-col",
                                    div { class: "bar-wrap",
                                        div { class: "bar-tooltip", "{cups} Fincan" }
                                        div {
                                            class: "bar",
                                            style: format!("height: {}px;", f64::from(cups) * 1.5),
                                        }
                                    }
                                    span { class: "bar-label", {day} }
                                }
                            }
                        }
                    }
                }

                // Stat cards
                div { class: "stat-stack",
                    Card { class: "stat-card stat-card-sage".to_string(),
                        CardContent { class: "stat-body".to_string(),
                            div {
                                p { class: "stat-label", "Toplam Kullanıcı" }
                                p { class: "stat-value", {TOTAL_USERS_LABEL} }
                            }
                            div { class: "stat-icon", span { "👥" } }
                        }
                    }
                    Card { class: "stat-card stat-card-warm".to_string(),
                        CardContent { class: "stat-body".to_string(),
                            div {
                                p { class: "stat-label", "Mutluluk Oranı" }
                                p { class: "stat-value", {HAPPINESS_LABEL} }
                            }
                            div { class: "stat-icon", span { "😊" } }
                        }
                    }
                    div { class: "coming-soon", "Daha fazla grafik yakında..." }
                }
            }
        }
    }
}
