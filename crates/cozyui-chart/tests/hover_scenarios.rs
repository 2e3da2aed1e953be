//! End-to-end hover scenarios over the showcase market dataset
//!
//! These tests drive the projection and hover state machine exactly the way
//! the chart surface does at runtime: a 30-sample closing-price series in a
//! 1000px-wide container, pointer events in device pixels.

use cozyui_chart::{
    resolve, ChartError, ContainerRect, HoverState, PlotArea, SeriesProjection, PLOT_WIDTH,
};

/// Closing prices backing the showcase market chart, oldest first.
const MARKET: [f64; 30] = [
    8200.0, 8240.0, 8220.0, 8280.0, 8350.0, 8320.0, 8400.0, 8450.0, 8420.0, 8480.0, 8550.0,
    8500.0, 8600.0, 8650.0, 8620.0, 8700.0, 8750.0, 8720.0, 8800.0, 8850.0, 8900.0, 8850.0,
    8950.0, 9050.0, 9000.0, 9100.0, 9150.0, 9120.0, 9250.0, 9450.0,
];

fn market_projection() -> SeriesProjection {
    SeriesProjection::project(&MARKET, PlotArea::default()).unwrap()
}

fn container() -> ContainerRect {
    ContainerRect {
        left: 0.0,
        width: 1000.0,
    }
}

// ============================================================================
// Pointer Resolution Scenarios
// ============================================================================

/// Pointer at the horizontal center of a 1000px container lands between
/// samples 14 and 15; the quotient 250 / (500/29) computes to just under
/// 14.5, so nearest-sample rounding settles on index 14.
#[test]
fn test_center_of_container_resolves_to_sample_14() {
    let sample = resolve(&market_projection(), 500.0, container()).unwrap();
    assert_eq!(sample.value, 8620.0);
    assert_eq!(sample.label, "₺8,620");
}

/// The left edge of the container is always the first sample.
#[test]
fn test_left_edge_resolves_to_the_first_sample() {
    let sample = resolve(&market_projection(), 0.0, container()).unwrap();
    assert_eq!(sample.value, MARKET[0]);
    assert_eq!(sample.x, 0.0);
}

/// The right edge of the container is always the most recent sample.
#[test]
fn test_right_edge_resolves_to_the_latest_sample() {
    let sample = resolve(&market_projection(), 1000.0, container()).unwrap();
    assert_eq!(sample.value, 9450.0);
    assert_eq!(sample.label, "₺9,450");
    assert_eq!(sample.x, PLOT_WIDTH);
}

/// Pointers that overshoot the container resolve exactly like the edges.
#[test]
fn test_overshooting_pointers_match_the_edges() {
    let projection = market_projection();

    let at_left = resolve(&projection, 0.0, container()).unwrap();
    let past_left = resolve(&projection, -300.0, container()).unwrap();
    assert_eq!(past_left, at_left);

    let at_right = resolve(&projection, 1000.0, container()).unwrap();
    let past_right = resolve(&projection, 2500.0, container()).unwrap();
    assert_eq!(past_right, at_right);
}

/// Nearest-sample rounding: 50 device px is 25 logical px, 1.45 steps from
/// the origin, so it snaps back to sample 1; 60 device px is 1.74 steps,
/// so it snaps forward to sample 2.
#[test]
fn test_pointer_between_samples_snaps_to_the_nearest() {
    let projection = market_projection();

    let back = resolve(&projection, 50.0, container()).unwrap();
    assert_eq!(back.value, MARKET[1]);

    let forward = resolve(&projection, 60.0, container()).unwrap();
    assert_eq!(forward.value, MARKET[2]);
}

/// The descriptor's marker position is the projected point, not the raw
/// pointer position.
#[test]
fn test_descriptor_carries_the_projected_marker_position() {
    let projection = market_projection();
    let sample = resolve(&projection, 500.0, container()).unwrap();
    let point = projection.point(14).unwrap();
    assert_eq!(sample.x, point.x);
    assert_eq!(sample.y, point.y);
}

// ============================================================================
// State Machine Scenarios
// ============================================================================

/// A full hover session: idle, sweep across three positions, leave.
#[test]
fn test_hover_session_replaces_descriptors_then_idles() {
    let projection = market_projection();
    let mut state = HoverState::Idle;
    assert!(!state.is_hovering());

    state.pointer_moved(&projection, 0.0, container());
    assert_eq!(state.sample().unwrap().value, MARKET[0]);

    state.pointer_moved(&projection, 500.0, container());
    assert_eq!(state.sample().unwrap().value, 8620.0);

    state.pointer_moved(&projection, 1000.0, container());
    assert_eq!(state.sample().unwrap().value, 9450.0);

    state.pointer_left();
    assert_eq!(state, HoverState::Idle);
    assert!(state.sample().is_none());
}

/// Pointer leave is a no-op on an already idle chart.
#[test]
fn test_pointer_leave_from_idle_stays_idle() {
    let mut state = HoverState::Idle;
    state.pointer_left();
    assert_eq!(state, HoverState::Idle);
}

// ============================================================================
// Tooltip Placement Scenarios
// ============================================================================

/// Hovering the latest sample pins the tooltip against the right edge.
#[test]
fn test_tooltip_clamps_against_the_right_edge_on_the_latest_sample() {
    let sample = resolve(&market_projection(), 1000.0, container()).unwrap();
    let (x, _) = sample.tooltip_anchor(PlotArea::default());
    assert_eq!(x, 380.0);
}

/// The series peak projects near the plot top, so its tooltip clamps to 0.
#[test]
fn test_tooltip_clamps_against_the_top_edge_on_the_peak() {
    let projection = market_projection();
    let sample = resolve(&projection, 1000.0, container()).unwrap();

    // 9450 is the maximum; headroom keeps it below the frame but well
    // within one tooltip height of it.
    assert!(sample.y < 50.0);
    let (_, y) = sample.tooltip_anchor(PlotArea::default());
    assert_eq!(y, 0.0);
}

// ============================================================================
// Degenerate Series Scenarios
// ============================================================================

/// A single closing price cannot chart; the error names the sample count.
#[test]
fn test_single_sample_series_is_rejected() {
    let outcome = SeriesProjection::project(&[9450.0], PlotArea::default());
    assert_eq!(outcome.unwrap_err(), ChartError::NotEnoughSamples(1));
}

/// An empty series reports zero samples.
#[test]
fn test_empty_series_is_rejected() {
    let outcome = SeriesProjection::project(&[], PlotArea::default());
    assert_eq!(outcome.unwrap_err(), ChartError::NotEnoughSamples(0));
}

/// A NaN slipped into the feed is rejected with its position.
#[test]
fn test_non_finite_sample_is_rejected_with_its_index() {
    let mut corrupted = MARKET.to_vec();
    corrupted[7] = f64::NAN;
    let outcome = SeriesProjection::project(&corrupted, PlotArea::default());
    assert_eq!(outcome.unwrap_err(), ChartError::NonFiniteSample(7));
}
