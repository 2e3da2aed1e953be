//! Theme-mode context for the CozyUI showcase.
//!
//! Provides the light/dark color scheme to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let mode = use_signal(ThemeMode::startup);
//! use_context_provider(|| mode);
//!
//! // In child components
//! let mode = use_theme_mode();
//! ```

use dioxus::prelude::*;

/// Color scheme of the showcase.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Mode requested on the command line (`--dark`).
    pub fn startup() -> Self {
        if crate::get_start_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Class for the root element. The `dark` marker swaps the CSS custom
    /// properties for the whole tree.
    pub fn root_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "cozy-root",
            ThemeMode::Dark => "cozy-root dark",
        }
    }
}

/// Hook to access the theme mode from context.
///
/// Returns a reactive signal; writing to it re-renders every reader.
pub fn use_theme_mode() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn root_class_carries_the_dark_marker() {
        assert_eq!(ThemeMode::Light.root_class(), "cozy-root");
        assert_eq!(ThemeMode::Dark.root_class(), "cozy-root dark");
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }
}
