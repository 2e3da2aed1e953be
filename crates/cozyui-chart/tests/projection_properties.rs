//! Property-based tests for chart projection and hover resolution
//!
//! Uses proptest to verify the geometric invariants of sample projection,
//! the clamping behavior of pointer hit-testing, and the formatting rules
//! for lira labels across randomly generated inputs.

use proptest::prelude::*;

use cozyui_chart::{
    currency_label, group_thousands, resolve, ContainerRect, PlotArea, SeriesProjection,
    PLOT_HEIGHT, PLOT_WIDTH, TOOLTIP_HEIGHT, TOOLTIP_WIDTH,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate a series of positive lira-scale samples, at least two entries
fn lira_series_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..100_000.0, 2..64)
}

/// Generate an on-screen container placement with a usable width
fn container_strategy() -> impl Strategy<Value = ContainerRect> {
    (-1000.0f64..1000.0, 1.0f64..4000.0)
        .prop_map(|(left, width)| ContainerRect { left, width })
}

/// Whole-lira amounts that f64 represents exactly (well under 2^53 kuruş)
fn whole_lira_strategy() -> impl Strategy<Value = u64> {
    0u64..1_000_000_000_000
}

/// Amounts in kuruş, so fractional labels can be checked exactly
fn kurus_strategy() -> impl Strategy<Value = u64> {
    0u64..10_000_000_000
}

/// Reference grouping built right-to-left in chunks of three, independent
/// of the production implementation
fn reference_grouping(whole: u64) -> String {
    let digits: Vec<char> = whole.to_string().chars().rev().collect();
    let mut grouped = String::new();
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*d);
    }
    grouped.chars().rev().collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Projected x coordinates are strictly increasing and span [0, width]
    #[test]
    fn x_coordinates_strictly_increase_and_span_the_plot(samples in lira_series_strategy()) {
        let projection = SeriesProjection::project(&samples, PlotArea::default()).unwrap();
        let points = projection.points();

        prop_assert_eq!(points[0].x, 0.0);
        prop_assert_eq!(points[points.len() - 1].x, PLOT_WIDTH);
        for pair in points.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }
    }

    /// Every projected y lies within the plot for positive series
    #[test]
    fn y_coordinates_stay_inside_the_plot(samples in lira_series_strategy()) {
        let projection = SeriesProjection::project(&samples, PlotArea::default()).unwrap();
        for point in projection.points() {
            prop_assert!(point.y >= 0.0, "y={} below plot top", point.y);
            prop_assert!(point.y <= PLOT_HEIGHT, "y={} past plot bottom", point.y);
        }
    }

    /// Higher samples never plot below lower ones
    #[test]
    fn y_order_inverts_value_order(samples in lira_series_strategy()) {
        let projection = SeriesProjection::project(&samples, PlotArea::default()).unwrap();
        let points = projection.points();

        for a in points {
            for b in points {
                if a.value < b.value {
                    prop_assert!(a.y >= b.y, "value {} at y={} vs value {} at y={}",
                        a.value, a.y, b.value, b.y);
                }
            }
        }
    }

    /// Projection is pure: the same series always projects identically
    #[test]
    fn projection_is_deterministic(samples in lira_series_strategy()) {
        let first = SeriesProjection::project(&samples, PlotArea::default()).unwrap();
        let second = SeriesProjection::project(&samples, PlotArea::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// An all-equal series renders as a flat line at mid-height
    #[test]
    fn equal_series_projects_to_mid_height(value in 0.0f64..100_000.0, len in 2usize..64) {
        let samples = vec![value; len];
        let projection = SeriesProjection::project(&samples, PlotArea::default()).unwrap();
        for point in projection.points() {
            prop_assert!((point.y - PLOT_HEIGHT / 2.0).abs() < 1e-6,
                "y={} is not mid-height for flat value {}", point.y, value);
        }
    }

    /// The polyline string parses back to exactly the projected points
    #[test]
    fn polyline_string_round_trips(samples in lira_series_strategy()) {
        let projection = SeriesProjection::project(&samples, PlotArea::default()).unwrap();
        let rendered = projection.polyline_points();

        let parsed: Vec<(f64, f64)> = rendered
            .split(' ')
            .map(|pair| {
                let (x, y) = pair.split_once(',').unwrap();
                (x.parse().unwrap(), y.parse().unwrap())
            })
            .collect();

        prop_assert_eq!(parsed.len(), projection.len());
        for (point, (x, y)) in projection.points().iter().zip(parsed) {
            prop_assert_eq!(point.x, x);
            prop_assert_eq!(point.y, y);
        }
    }

    /// The area outline closes along the plot's bottom edge
    #[test]
    fn area_outline_is_closed_at_the_bottom(samples in lira_series_strategy()) {
        let projection = SeriesProjection::project(&samples, PlotArea::default()).unwrap();
        let outline = projection.area_points();

        // prop_assert! stringifies a bare condition into its failure
        // message, so braced format literals cannot sit in the condition.
        let bottom_left = format!("0,{PLOT_HEIGHT} ");
        let bottom_right = format!(" {PLOT_WIDTH},{PLOT_HEIGHT}");
        prop_assert!(outline.starts_with(&bottom_left));
        prop_assert!(outline.ends_with(&bottom_right));
        prop_assert_eq!(outline.split(' ').count(), projection.len() + 2);
    }

    /// Resolving the device position of any projected point recovers it
    #[test]
    fn hit_test_round_trips_every_index(
        samples in lira_series_strategy(),
        rect in container_strategy(),
    ) {
        let projection = SeriesProjection::project(&samples, PlotArea::default()).unwrap();

        for (i, point) in projection.points().iter().enumerate() {
            let pointer_x = rect.left + (point.x / PLOT_WIDTH) * rect.width;
            let sample = resolve(&projection, pointer_x, rect).unwrap();
            prop_assert_eq!(sample.value, samples[i], "index {} did not round-trip", i);
        }
    }

    /// Container edges resolve to the first and last sample
    #[test]
    fn container_edges_resolve_to_the_end_samples(
        samples in lira_series_strategy(),
        rect in container_strategy(),
    ) {
        let projection = SeriesProjection::project(&samples, PlotArea::default()).unwrap();

        let leftmost = resolve(&projection, rect.left, rect).unwrap();
        prop_assert_eq!(leftmost.value, samples[0]);

        let rightmost = resolve(&projection, rect.left + rect.width, rect).unwrap();
        prop_assert_eq!(rightmost.value, samples[samples.len() - 1]);
    }

    /// Out-of-bounds pointers resolve exactly like the nearest edge
    #[test]
    fn out_of_bounds_pointers_clamp_to_the_edges(
        samples in lira_series_strategy(),
        rect in container_strategy(),
        overshoot in 1.0f64..5000.0,
    ) {
        let projection = SeriesProjection::project(&samples, PlotArea::default()).unwrap();

        let at_left = resolve(&projection, rect.left, rect).unwrap();
        let past_left = resolve(&projection, rect.left - overshoot, rect).unwrap();
        prop_assert_eq!(past_left, at_left);

        let at_right = resolve(&projection, rect.left + rect.width, rect).unwrap();
        let past_right = resolve(&projection, rect.left + rect.width + overshoot, rect).unwrap();
        prop_assert_eq!(past_right, at_right);
    }

    /// The tooltip box always fits inside the plot
    #[test]
    fn tooltip_anchor_keeps_the_box_inside_the_plot(
        samples in lira_series_strategy(),
        rect in container_strategy(),
        pointer_x in -2000.0f64..6000.0,
    ) {
        let projection = SeriesProjection::project(&samples, PlotArea::default()).unwrap();
        if let Some(sample) = resolve(&projection, pointer_x, rect) {
            let (x, y) = sample.tooltip_anchor(PlotArea::default());
            prop_assert!(x + TOOLTIP_WIDTH <= PLOT_WIDTH);
            prop_assert!(y >= 0.0);
            prop_assert!(y + TOOLTIP_HEIGHT <= PLOT_HEIGHT);
        }
    }

    /// Whole-lira labels match an independently built grouping
    #[test]
    fn whole_lira_grouping_matches_reference(whole in whole_lira_strategy()) {
        prop_assert_eq!(group_thousands(whole as f64), reference_grouping(whole));
    }

    /// Fractional labels agree with exact kuruş arithmetic
    #[test]
    fn kurus_labels_match_exact_arithmetic(cents in kurus_strategy()) {
        let whole = cents / 100;
        let frac = cents % 100;

        let mut expected = reference_grouping(whole);
        if frac > 0 {
            if frac % 10 == 0 {
                expected.push_str(&format!(".{}", frac / 10));
            } else {
                expected.push_str(&format!(".{frac:02}"));
            }
        }

        prop_assert_eq!(group_thousands(cents as f64 / 100.0), expected);
    }

    /// Labels strip to a parseable number: commas are pure decoration
    #[test]
    fn labels_parse_back_after_stripping_commas(whole in whole_lira_strategy()) {
        let label = currency_label(whole as f64);
        let bare = label.trim_start_matches('₺').replace(',', "");
        prop_assert_eq!(bare.parse::<f64>().unwrap(), whole as f64);
    }
}

// ============================================================================
// Standard Tests (non-property-based)
// ============================================================================

#[test]
fn all_zero_series_falls_back_to_mid_height() {
    // Zero is the one flat series where multiplicative padding collapses
    // the range entirely; the explicit guard takes over.
    let projection = SeriesProjection::project(&[0.0, 0.0, 0.0], PlotArea::default()).unwrap();
    for point in projection.points() {
        assert_eq!(point.y, PLOT_HEIGHT / 2.0);
    }
}

#[test]
fn two_sample_series_uses_the_full_width() {
    let projection = SeriesProjection::project(&[5.0, 10.0], PlotArea::default()).unwrap();
    assert_eq!(projection.points()[0].x, 0.0);
    assert_eq!(projection.points()[1].x, PLOT_WIDTH);
}
