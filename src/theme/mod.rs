//! Theme system for the CozyUI showcase.

mod colors;
mod config;
mod styles;

pub use config::ThemeConfig;
pub use styles::GLOBAL_STYLES;
