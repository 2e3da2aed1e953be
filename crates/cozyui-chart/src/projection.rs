//! Sample-to-plot projection
//!
//! Maps an ordered sequence of samples onto a fixed logical rectangle:
//! - x encodes ordinal position, evenly spaced across the full width
//!   (the horizontal axis is *not* a time axis)
//! - y encodes the value, inverted so larger values plot higher, with 2%
//!   headroom on both ends of the value range so extrema never touch the
//!   top/bottom frame
//!
//! The projection is a pure function of its input: projecting the same
//! sequence twice yields identical points.

use crate::error::ChartError;

/// Default logical plot width.
pub const PLOT_WIDTH: f64 = 500.0;

/// Default logical plot height.
pub const PLOT_HEIGHT: f64 = 150.0;

/// Headroom factors applied to the raw value range. The minimum shrinks by
/// 2% and the maximum grows by 2%, a fixed policy of the surface.
const RANGE_PAD_LOW: f64 = 0.98;
const RANGE_PAD_HIGH: f64 = 1.02;

/// The logical coordinate system samples are projected into.
///
/// Device-independent; the host scales the rendered SVG to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
        }
    }
}

/// One sample mapped into the plot area, keeping the original value for
/// hover labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// An entire sample sequence projected into a [`PlotArea`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesProjection {
    points: Vec<ProjectedPoint>,
    area: PlotArea,
}

impl SeriesProjection {
    /// Project `samples` into `area`.
    ///
    /// Requires at least two finite samples. When the padded value range
    /// collapses to zero width (an all-zero sequence is the concrete
    /// trigger), every point sits at the vertical midpoint instead of
    /// dividing by zero: a deliberately flat line.
    pub fn project(samples: &[f64], area: PlotArea) -> Result<Self, ChartError> {
        if samples.len() < 2 {
            return Err(ChartError::NotEnoughSamples(samples.len()));
        }
        if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::NonFiniteSample(index));
        }

        let raw_min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let raw_max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = raw_min * RANGE_PAD_LOW;
        let max = raw_max * RANGE_PAD_HIGH;
        let range = max - min;
        let degenerate = !range.is_finite() || range.abs() < f64::EPSILON;

        let last = (samples.len() - 1) as f64;
        let points = samples
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let x = (i as f64 / last) * area.width;
                let normalized = if degenerate {
                    0.5
                } else {
                    (value - min) / range
                };
                let y = area.height - normalized * area.height;
                ProjectedPoint { x, y, value }
            })
            .collect();

        Ok(Self { points, area })
    }

    /// The projected points, one per input sample, in input order.
    pub fn points(&self) -> &[ProjectedPoint] {
        &self.points
    }

    /// The point at `index`, if it exists.
    pub fn point(&self, index: usize) -> Option<&ProjectedPoint> {
        self.points.get(index)
    }

    /// Number of projected points (equals the input length).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: projections are only constructed from ≥2 samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The logical area the points were projected into.
    pub fn area(&self) -> PlotArea {
        self.area
    }

    /// SVG `points` string for the stroked polyline.
    pub fn polyline_points(&self) -> String {
        crate::path::polyline_points(&self.points)
    }

    /// SVG `points` string for the filled area polygon (polyline closed to
    /// the baseline).
    pub fn area_points(&self) -> String {
        crate::path::area_points(&self.points, self.area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_sequences() {
        assert_eq!(
            SeriesProjection::project(&[], PlotArea::default()),
            Err(ChartError::NotEnoughSamples(0))
        );
        assert_eq!(
            SeriesProjection::project(&[10.0], PlotArea::default()),
            Err(ChartError::NotEnoughSamples(1))
        );
    }

    #[test]
    fn rejects_non_finite_samples() {
        assert_eq!(
            SeriesProjection::project(&[1.0, f64::NAN, 3.0], PlotArea::default()),
            Err(ChartError::NonFiniteSample(1))
        );
        assert_eq!(
            SeriesProjection::project(&[f64::INFINITY, 3.0], PlotArea::default()),
            Err(ChartError::NonFiniteSample(0))
        );
    }

    #[test]
    fn x_spans_the_full_width() {
        let projection =
            SeriesProjection::project(&[1.0, 2.0, 3.0, 4.0, 5.0], PlotArea::default()).unwrap();
        let points = projection.points();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[4].x, PLOT_WIDTH);
        assert_eq!(points[2].x, PLOT_WIDTH / 2.0);
    }

    #[test]
    fn larger_values_plot_higher() {
        let projection = SeriesProjection::project(&[10.0, 20.0], PlotArea::default()).unwrap();
        let points = projection.points();
        // Inverted axis: the larger value has the smaller y.
        assert!(points[1].y < points[0].y);
    }

    #[test]
    fn extrema_stay_inside_the_frame() {
        let projection =
            SeriesProjection::project(&[100.0, 900.0, 300.0], PlotArea::default()).unwrap();
        for point in projection.points() {
            assert!(point.y > 0.0, "headroom keeps the max off the top edge");
            assert!(point.y < PLOT_HEIGHT, "headroom keeps the min off the bottom edge");
        }
    }

    #[test]
    fn equal_positive_values_sit_at_mid_height() {
        // 2% padding on both sides leaves the value exactly halfway.
        let projection =
            SeriesProjection::project(&[500.0, 500.0, 500.0], PlotArea::default()).unwrap();
        for point in projection.points() {
            assert!((point.y - PLOT_HEIGHT / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn all_zero_values_flatten_to_mid_height() {
        // Padding cannot widen a zero range, so the explicit fallback kicks in.
        let projection = SeriesProjection::project(&[0.0, 0.0, 0.0], PlotArea::default()).unwrap();
        for point in projection.points() {
            assert!(point.y.is_finite(), "no NaN may escape the projection");
            assert!((point.y - PLOT_HEIGHT / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn honors_a_custom_plot_area() {
        let area = PlotArea {
            width: 1000.0,
            height: 400.0,
        };
        let projection = SeriesProjection::project(&[1.0, 2.0], area).unwrap();
        assert_eq!(projection.points()[1].x, 1000.0);
        assert_eq!(projection.area(), area);
    }

    #[test]
    fn projection_is_pure() {
        let samples = [8200.0, 8350.0, 8320.0, 9450.0];
        let first = SeriesProjection::project(&samples, PlotArea::default()).unwrap();
        let second = SeriesProjection::project(&samples, PlotArea::default()).unwrap();
        assert_eq!(first, second);
    }
}
