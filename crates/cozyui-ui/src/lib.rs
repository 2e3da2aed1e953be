//! CozyUI Components
//!
//! This crate provides Dioxus UI components following the warm, hand-drawn
//! aesthetic of the CozyUI design system.
//!
//! ## Design Philosophy
//!
//! The UI aims for paper-and-ink warmth instead of sterile flatness:
//! - **Paper (#FDFBF7)**: Warm off-white page background
//! - **Ink (#2D2D2D)**: Text and the hard offset shadows
//! - **Terracotta (#E07A5F)**: Primary actions, accents
//! - **Sage (#81B29A)**: Secondary actions, charts, success states
//!
//! ## Texture
//!
//! Components lean on a handful of shared ingredients:
//! - "Patrick Hand" for headings, "Nunito" for body text
//! - 16px "cozy" corner radius on cards and buttons
//! - Hard `3px 3px 0 #2D2D2D` shadows that lift on hover
//! - Dashed underlines and borders instead of straight chrome
//!
//! All colors are consumed through `--color-*` custom properties so a host
//! page can restyle or dark-flip the entire set without touching markup.

pub mod components;

pub use components::*;
