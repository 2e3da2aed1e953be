//! Pointer-to-sample resolution and the hover state machine
//!
//! The chart container reports pointer positions in device pixels. Hover
//! resolution rescales them into the logical plot space, clamps positions
//! that land outside the container (fast pointer movement can overshoot),
//! and snaps to the nearest sample by even ordinal bucketing, the same
//! spacing the projection uses, so the round trip is exact.
//!
//! Hover is a two-state machine: `Idle` (no descriptor) and `Hovering`
//! (descriptor present). Each pointer move replaces the descriptor
//! wholesale; pointer leave always returns to `Idle`.

use crate::format::currency_label;
use crate::projection::{PlotArea, SeriesProjection};

/// Horizontal gap between the hovered point and the tooltip's left edge.
const TOOLTIP_OFFSET: f64 = 10.0;

/// Logical tooltip box width used for right-edge clamping.
pub const TOOLTIP_WIDTH: f64 = 120.0;

/// Logical tooltip box height used for top-edge clamping.
pub const TOOLTIP_HEIGHT: f64 = 50.0;

/// On-screen placement of the rendered chart container, in device pixels.
///
/// Only the horizontal extent matters: vertical position never influences
/// which sample is nearest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    /// Left edge of the container in viewport coordinates.
    pub left: f64,
    /// Rendered width of the container.
    pub width: f64,
}

/// The sample the pointer currently nearest-matches, in logical plot
/// coordinates, with its display label already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverSample {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub label: String,
}

impl HoverSample {
    /// Anchor for the tooltip box, clamped so the tooltip never overflows
    /// the right or top edge of the plot.
    pub fn tooltip_anchor(&self, area: PlotArea) -> (f64, f64) {
        let x = (self.x + TOOLTIP_OFFSET).min(area.width - TOOLTIP_WIDTH);
        let y = (self.y - TOOLTIP_HEIGHT).max(0.0);
        (x, y)
    }
}

/// Hover state owned by a single chart surface instance.
///
/// Transitions:
/// - `Idle → Hovering` on a pointer move that resolves to a sample
/// - `Hovering → Hovering` on subsequent moves (descriptor replaced)
/// - any state `→ Idle` on pointer leave
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(HoverSample),
}

impl HoverState {
    /// Feed a pointer-move event into the state machine.
    ///
    /// An unresolvable pointer (zero-width container, out-of-range index
    /// after the defensive guard) leaves the state unchanged; it never
    /// clears an existing descriptor.
    pub fn pointer_moved(
        &mut self,
        projection: &SeriesProjection,
        pointer_x: f64,
        rect: ContainerRect,
    ) {
        if let Some(sample) = resolve(projection, pointer_x, rect) {
            *self = HoverState::Hovering(sample);
        }
    }

    /// Feed a pointer-leave event: unconditionally back to `Idle`.
    pub fn pointer_left(&mut self) {
        *self = HoverState::Idle;
    }

    /// The current descriptor, if hovering.
    pub fn sample(&self) -> Option<&HoverSample> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering(sample) => Some(sample),
        }
    }

    pub fn is_hovering(&self) -> bool {
        matches!(self, HoverState::Hovering(_))
    }
}

/// Resolve a pointer position against a projection.
///
/// `pointer_x` is the pointer's viewport x coordinate; `rect` locates the
/// chart container in the same coordinate space. Positions outside the
/// container clamp to the nearest edge rather than failing.
pub fn resolve(
    projection: &SeriesProjection,
    pointer_x: f64,
    rect: ContainerRect,
) -> Option<HoverSample> {
    let area = projection.area();
    if rect.width <= 0.0 || area.width <= 0.0 {
        return None;
    }

    let local_x = pointer_x - rect.left;
    let svg_x = (local_x / rect.width) * area.width;
    let clamped = svg_x.clamp(0.0, area.width);

    // Nearest-neighbor by even ordinal bucketing; projections always hold
    // at least two points, so the divisor is never zero.
    let step = area.width / (projection.len() - 1) as f64;
    let index = (clamped / step).round() as usize;

    let point = projection.point(index)?;
    Some(HoverSample {
        x: point.x,
        y: point.y,
        value: point.value,
        label: currency_label(point.value),
    })
}
