//! Page components for the CozyUI showcase.

mod showcase;

pub use showcase::Showcase;
