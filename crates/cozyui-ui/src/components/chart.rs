//! Interactive Chart Surface
//!
//! Renders a sample series as a filled area + stroked line SVG and tracks
//! the pointer: hovering snaps to the nearest sample and draws a dashed
//! guide line, a marker circle and a clamped tooltip with the formatted
//! value. All geometry and hit-testing live in `cozyui-chart`; this
//! component wires them to Dioxus events.
//!
//! The SVG uses a fixed logical coordinate system (500×150 by default) and
//! stretches to its container, so pointer positions are rescaled through
//! the container's cached on-screen rect before hit-testing.

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

use cozyui_chart::{ContainerRect, HoverSample, HoverState, PlotArea, SeriesProjection};

use super::merge_class;

/// Properties for the ChartSurface component
#[derive(Clone, PartialEq, Props)]
pub struct ChartSurfaceProps {
    /// Ordered samples, oldest first; at least two are needed to draw
    pub data: Vec<f64>,
    /// Logical plot dimensions the samples project into
    #[props(default)]
    pub area: PlotArea,
    /// Notified with the hovered sample, or `None` when the pointer leaves
    #[props(default)]
    pub on_hover: Option<EventHandler<Option<HoverSample>>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Interactive line chart
///
/// # Example
///
/// ```rust,ignore
/// let mut hovered = use_signal(|| Option::<HoverSample>::None);
///
/// rsx! {
///     ChartSurface {
///         data: vec![8200.0, 8350.0, 8900.0, 9450.0],
///         on_hover: move |sample| hovered.set(sample),
///     }
/// }
/// ```
#[component]
pub fn ChartSurface(props: ChartSurfaceProps) -> Element {
    let mut hover = use_signal(HoverState::default);
    let mut container: Signal<Option<ContainerRect>> = use_signal(|| None);
    let mut anchor: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let data = props.data.clone();
    let area = props.area;
    let projection = use_memo(use_reactive!(|data, area| {
        match SeriesProjection::project(&data, area) {
            Ok(projection) => Some(projection),
            Err(e) => {
                tracing::warn!("chart cannot render: {e}");
                None
            }
        }
    }));

    // SVG ids resolve document-wide, so each mounted surface gets its own
    // gradient id. Pinned with use_hook so re-renders keep the same one.
    let fill_id = use_hook(next_fill_id);

    // The container's on-screen rect is cached and refreshed on mount and
    // resize rather than queried per pointer event; page scrolling does
    // not move a desktop window's content horizontally.
    let remeasure = move || {
        if let Some(mounted) = anchor() {
            spawn(async move {
                match mounted.get_client_rect().await {
                    Ok(rect) => {
                        container.set(Some(ContainerRect {
                            left: rect.origin.x,
                            width: rect.size.width,
                        }));
                    }
                    Err(e) => tracing::warn!("chart container rect unavailable: {e:?}"),
                }
            });
        }
    };

    let on_hover = props.on_hover;
    let on_mouse_move = move |e: Event<MouseData>| {
        let Some(rect) = container() else { return };
        let Some(projection) = projection() else { return };

        let before = hover.peek().sample().cloned();
        let pointer_x = e.client_coordinates().x;
        hover.with_mut(|state| state.pointer_moved(&projection, pointer_x, rect));
        let after = hover.peek().sample().cloned();

        if before != after {
            if let Some(handler) = &on_hover {
                handler.call(after);
            }
        }
    };

    let on_mouse_leave = move |_| {
        let was_hovering = hover.peek().is_hovering();
        hover.with_mut(|state| state.pointer_left());
        if was_hovering {
            if let Some(handler) = &on_hover {
                handler.call(None);
            }
        }
    };

    let surface_class = merge_class("chart-surface", &props.class);

    let Some(projected) = projection() else {
        return rsx! {
            div { class: "{surface_class} chart-surface-empty",
                p { class: "chart-empty-note", "Grafik için yeterli veri yok" }
            }
        };
    };

    let line_points = projected.polyline_points();
    let fill_points = projected.area_points();
    let plot = projected.area();

    rsx! {
        div {
            class: "{surface_class}",
            onmounted: move |e: Event<MountedData>| {
                anchor.set(Some(e.data()));
                remeasure();
            },
            onresize: move |_| remeasure(),
            onmousemove: on_mouse_move,
            onmouseleave: on_mouse_leave,

            svg {
                class: "chart-svg",
                view_box: "0 0 {plot.width} {plot.height}",
                "preserveAspectRatio": "none",

                defs {
                    linearGradient {
                        id: "{fill_id}",
                        "x1": "0", "x2": "0", "y1": "0", "y2": "1",
                        stop {
                            "offset": "0%",
                            "stop-color": "var(--color-secondary)",
                            "stop-opacity": "0.2",
                        }
                        stop {
                            "offset": "100%",
                            "stop-color": "var(--color-secondary)",
                            "stop-opacity": "0",
                        }
                    }
                }

                polygon { points: "{fill_points}", fill: "url(#{fill_id})" }

                polyline {
                    points: "{line_points}",
                    fill: "none",
                    stroke: "var(--color-secondary)",
                    "stroke-width": "3",
                    "vector-effect": "non-scaling-stroke",
                    "stroke-linecap": "round",
                    "stroke-linejoin": "round",
                }

                if let Some(sample) = hover().sample().cloned() {
                    g {
                        line {
                            x1: "{sample.x}", y1: "0",
                            x2: "{sample.x}", y2: "{plot.height}",
                            stroke: "var(--color-ink)",
                            "stroke-width": "1",
                            "stroke-dasharray": "4 4",
                            "opacity": "0.5",
                            "vector-effect": "non-scaling-stroke",
                        }
                        circle {
                            cx: "{sample.x}", cy: "{sample.y}", r: "6",
                            fill: "var(--color-paper)",
                            stroke: "var(--color-secondary)",
                            "stroke-width": "3",
                        }
                    }
                }
            }

            if let Some(sample) = hover().sample().cloned() {
                ChartTooltip { sample: sample, area: plot }
            }
        }
    }
}

/// Properties for the tooltip overlay
#[derive(Clone, PartialEq, Props)]
pub struct ChartTooltipProps {
    /// The hovered sample to describe
    pub sample: HoverSample,
    /// Logical plot dimensions, for coordinate conversion
    pub area: PlotArea,
}

/// Tooltip box floated over the chart
///
/// Rendered as HTML on top of the SVG (not inside it) so the text stays
/// crisp when the plot stretches. The clamped logical anchor converts to
/// percentages of the container.
#[component]
pub fn ChartTooltip(props: ChartTooltipProps) -> Element {
    let (left, top) = tooltip_position(&props.sample, props.area);

    rsx! {
        div {
            class: "chart-tooltip",
            style: "left: {left}%; top: {top}%;",
            "{props.sample.label}"
        }
    }
}

/// Convert the clamped tooltip anchor into container percentages
fn tooltip_position(sample: &HoverSample, area: PlotArea) -> (f64, f64) {
    let (x, y) = sample.tooltip_anchor(area);
    (x / area.width * 100.0, y / area.height * 100.0)
}

static FILL_ID_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Next document-unique id for a surface's gradient def
fn next_fill_id() -> String {
    format!("cozy-chart-fill-{}", FILL_ID_SEQ.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_at(x: f64, y: f64) -> HoverSample {
        HoverSample {
            x,
            y,
            value: 1.0,
            label: "₺1".to_string(),
        }
    }

    #[test]
    fn tooltip_position_is_percent_of_the_plot() {
        // Anchor lands at (260, 25) in a 500×150 plot.
        let (left, top) = tooltip_position(&sample_at(250.0, 75.0), PlotArea::default());
        assert!((left - 52.0).abs() < 1e-9);
        assert!((top - (25.0 / 150.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn tooltip_position_clamps_inside_the_plot() {
        let (left, top) = tooltip_position(&sample_at(500.0, 0.0), PlotArea::default());
        assert!((left - 76.0).abs() < 1e-9);
        assert_eq!(top, 0.0);
    }

    #[test]
    fn fill_ids_differ_per_surface() {
        let first = next_fill_id();
        let second = next_fill_id();
        assert!(first.starts_with("cozy-chart-fill-"));
        assert_ne!(first, second);
    }
}
