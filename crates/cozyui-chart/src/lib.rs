//! CozyUI Chart Core
//!
//! Geometry and hit-testing for the interactive chart surface, kept free of
//! any UI framework so it can be tested headlessly.
//!
//! ## Overview
//!
//! The chart surface turns an ordered sequence of samples into a plot inside
//! a fixed logical coordinate system (500×150 by default) and resolves the
//! pointer to the nearest sample while the user hovers:
//!
//! - **Projection**: each sample becomes a `(x, y)` point; x encodes ordinal
//!   position (evenly spaced), y encodes the value with 2% headroom so the
//!   line never touches the frame.
//! - **Hover resolution**: a pointer position in device pixels is rescaled
//!   into the logical space, clamped, and bucketed to the nearest sample.
//! - **Rendering helpers**: SVG point strings for the stroked polyline and
//!   the filled area polygon, plus a clamped tooltip anchor.
//!
//! ## Quick Start
//!
//! ```
//! use cozyui_chart::{ContainerRect, HoverState, PlotArea, SeriesProjection};
//!
//! let samples = [8200.0, 8350.0, 8900.0, 9450.0];
//! let projection = SeriesProjection::project(&samples, PlotArea::default())?;
//!
//! let mut hover = HoverState::Idle;
//! hover.pointer_moved(&projection, 512.0, ContainerRect { left: 12.0, width: 1000.0 });
//! assert!(hover.is_hovering());
//!
//! hover.pointer_left();
//! assert_eq!(hover, HoverState::Idle);
//! # Ok::<(), cozyui_chart::ChartError>(())
//! ```

pub mod error;
pub mod format;
pub mod hover;
pub mod path;
pub mod projection;

// Re-exports
pub use error::ChartError;
pub use format::{currency_label, group_thousands};
pub use hover::{resolve, ContainerRect, HoverSample, HoverState, TOOLTIP_HEIGHT, TOOLTIP_WIDTH};
pub use path::{area_points, polyline_points};
pub use projection::{PlotArea, ProjectedPoint, SeriesProjection, PLOT_HEIGHT, PLOT_WIDTH};
