//! SVG point-string builders
//!
//! The chart renders as two SVG elements sharing the projected points: a
//! `polyline` for the stroke and a `polygon` for the gradient fill. Both
//! take a `points` attribute of space-separated `x,y` pairs.

use std::fmt::Write as _;

use crate::projection::{PlotArea, ProjectedPoint};

/// Space-separated `x,y` pairs for the stroked polyline.
pub fn polyline_points(points: &[ProjectedPoint]) -> String {
    let mut out = String::with_capacity(points.len() * 12);
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", point.x, point.y);
    }
    out
}

/// Polyline points closed down to the baseline, for the filled area polygon.
///
/// Prefixes `0,H` and appends `W,H` so the fill reaches the bottom corners.
pub fn area_points(points: &[ProjectedPoint], area: PlotArea) -> String {
    format!(
        "0,{} {} {},{}",
        area.height,
        polyline_points(points),
        area.width,
        area.height
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<ProjectedPoint> {
        vec![
            ProjectedPoint {
                x: 0.0,
                y: 150.0,
                value: 1.0,
            },
            ProjectedPoint {
                x: 250.0,
                y: 75.0,
                value: 2.0,
            },
            ProjectedPoint {
                x: 500.0,
                y: 0.0,
                value: 3.0,
            },
        ]
    }

    #[test]
    fn polyline_joins_pairs_with_spaces() {
        assert_eq!(polyline_points(&fixture()), "0,150 250,75 500,0");
    }

    #[test]
    fn area_closes_to_the_baseline() {
        assert_eq!(
            area_points(&fixture(), PlotArea::default()),
            "0,150 0,150 250,75 500,0 500,150"
        );
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(polyline_points(&[]), "");
    }
}
