//! Color constants for the CozyUI palette.
//!
//! Warm paper-and-ink aesthetic with terracotta and sage accents.

#![allow(dead_code)]

// === PAPER (Backgrounds) ===
pub const PAPER: &str = "#FDFBF7";
pub const SURFACE: &str = "#FFFFFF";
pub const LINE: &str = "#E5E7EB";
pub const ACCENT_CARD: &str = "#FFF8F0";

// === INK (Text) ===
pub const INK: &str = "#2D2D2D";
pub const SUB: &str = "#6B7280";

// === TERRACOTTA (Primary accent) ===
pub const PRIMARY: &str = "#E07A5F";
pub const PRIMARY_DARK: &str = "#D06348";

// === SAGE (Secondary accent) ===
pub const SECONDARY: &str = "#81B29A";

// === SEMANTIC ===
pub const DESTRUCTIVE: &str = "#E63946";

// === DARK MODE ===
pub const DARK_PAPER: &str = "#1C1917";
pub const DARK_SURFACE: &str = "#292524";
pub const DARK_INK: &str = "#E7E5E4";
pub const DARK_SUB: &str = "#A8A29E";
pub const DARK_LINE: &str = "#44403C";
pub const DARK_ACCENT_CARD: &str = "#2e2a27";
