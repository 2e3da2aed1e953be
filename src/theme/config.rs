//! Theme tokens, loadable from a JSON file via `--theme`.
//!
//! The file mirrors the token groups of the built-in palette: colors,
//! dark-scheme color overrides, box shadows, and the corner radius. Every
//! section is optional; omitted sections keep their built-in values.

use serde::{Deserialize, Serialize};

use super::colors;

/// Named color tokens for one scheme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorTokens {
    pub paper: String,
    pub surface: String,
    pub ink: String,
    pub sub: String,
    pub primary: String,
    pub primary_dark: String,
    pub secondary: String,
    pub destructive: String,
    pub line: String,
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            paper: colors::PAPER.to_string(),
            surface: colors::SURFACE.to_string(),
            ink: colors::INK.to_string(),
            sub: colors::SUB.to_string(),
            primary: colors::PRIMARY.to_string(),
            primary_dark: colors::PRIMARY_DARK.to_string(),
            secondary: colors::SECONDARY.to_string(),
            destructive: colors::DESTRUCTIVE.to_string(),
            line: colors::LINE.to_string(),
        }
    }
}

impl ColorTokens {
    /// The built-in dark scheme. Accents stay put; paper and ink swap for
    /// warm stone tones.
    pub fn dark() -> Self {
        Self {
            paper: colors::DARK_PAPER.to_string(),
            surface: colors::DARK_SURFACE.to_string(),
            ink: colors::DARK_INK.to_string(),
            sub: colors::DARK_SUB.to_string(),
            line: colors::DARK_LINE.to_string(),
            ..Self::default()
        }
    }

    fn custom_properties(&self) -> String {
        format!(
            "  --color-paper: {};\n  --color-surface: {};\n  --color-ink: {};\n  --color-sub: {};\n  --color-primary: {};\n  --color-primary-dark: {};\n  --color-secondary: {};\n  --color-destructive: {};\n  --color-line: {};\n",
            self.paper,
            self.surface,
            self.ink,
            self.sub,
            self.primary,
            self.primary_dark,
            self.secondary,
            self.destructive,
            self.line,
        )
    }
}

/// Box-shadow tokens: the soft ambient shadow and the hard offset shadow
/// of the retro look.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowTokens {
    pub soft: String,
    pub hard: String,
    #[serde(rename = "hard-hover")]
    pub hard_hover: String,
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            soft: "0 8px 30px rgba(0,0,0,0.04)".to_string(),
            hard: format!("3px 3px 0px 0px {}", colors::INK),
            hard_hover: format!("5px 5px 0px 0px {}", colors::INK),
        }
    }
}

/// Corner radius tokens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusTokens {
    pub cozy: String,
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            cozy: "16px".to_string(),
        }
    }
}

/// The full token set behind the showcase's look.
///
/// `css_variables()` renders these as CSS custom properties; the stylesheet
/// in [`styles`](super::styles) only ever refers to the variables, so a
/// `--theme` file recolors everything without touching a single rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub colors: ColorTokens,
    pub dark_colors: ColorTokens,
    pub box_shadow: ShadowTokens,
    pub border_radius: RadiusTokens,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            colors: ColorTokens::default(),
            dark_colors: ColorTokens::dark(),
            box_shadow: ShadowTokens::default(),
            border_radius: RadiusTokens::default(),
        }
    }
}

impl ThemeConfig {
    /// Render the `:root` and `.dark` custom-property blocks that precede
    /// the global stylesheet.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n{}  --shadow-soft: {};\n  --shadow-hard: {};\n  --shadow-hard-hover: {};\n  --radius-cozy: {};\n}}\n.dark {{\n{}}}\n",
            self.colors.custom_properties(),
            self.box_shadow.soft,
            self.box_shadow.hard,
            self.box_shadow.hard_hover,
            self.border_radius.cozy,
            self.dark_colors.custom_properties(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_matches_the_named_constants() {
        let config = ThemeConfig::default();
        assert_eq!(config.colors.primary, colors::PRIMARY);
        assert_eq!(config.colors.paper, colors::PAPER);
        assert_eq!(config.dark_colors.paper, colors::DARK_PAPER);
        // Accents are shared between schemes
        assert_eq!(config.dark_colors.primary, colors::PRIMARY);
        assert_eq!(config.dark_colors.secondary, colors::SECONDARY);
        assert_eq!(config.border_radius.cozy, "16px");
    }

    #[test]
    fn empty_json_yields_the_built_in_palette() {
        let config: ThemeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_named_keys() {
        let config: ThemeConfig = serde_json::from_str(
            r##"{ "colors": { "primary": "#336699" }, "borderRadius": { "cozy": "4px" } }"##,
        )
        .unwrap();
        assert_eq!(config.colors.primary, "#336699");
        assert_eq!(config.colors.paper, colors::PAPER);
        assert_eq!(config.border_radius.cozy, "4px");
        assert_eq!(config.box_shadow, ShadowTokens::default());
    }

    #[test]
    fn json_round_trip_preserves_tokens() {
        let config = ThemeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ThemeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn serialized_form_uses_camel_case_and_kebab_shadow_keys() {
        let json = serde_json::to_string(&ThemeConfig::default()).unwrap();
        assert!(json.contains("\"darkColors\""));
        assert!(json.contains("\"primaryDark\""));
        assert!(json.contains("\"hard-hover\""));
    }

    #[test]
    fn css_variables_emit_both_scheme_blocks() {
        let css = ThemeConfig::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary: #E07A5F;"));
        assert!(css.contains("--shadow-hard: 3px 3px 0px 0px #2D2D2D;"));
        assert!(css.contains("--radius-cozy: 16px;"));
        assert!(css.contains(".dark {"));
        assert!(css.contains("--color-paper: #1C1917;"));
    }
}
