//! Reusable CozyUI components
//!
//! Each component renders semantic markup with plain CSS classes and
//! consumes the design tokens through `--color-*` custom properties:
//! - Patrick Hand for headings, Nunito for body text
//! - Hard offset shadows and the 16px cozy radius
//! - Terracotta primary / sage secondary accents

mod button;
mod card;
mod chart;
mod checkbox;
mod dialog;
mod image;
mod input;
mod select;

pub use button::*;
pub use card::*;
pub use chart::*;
pub use checkbox::*;
pub use dialog::*;
pub use image::*;
pub use input::*;
pub use select::*;

/// Join a component's base class list with the caller's optional extras
pub(crate) fn merge_class(base: &str, extra: &Option<String>) -> String {
    match extra.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::merge_class;

    #[test]
    fn merge_class_keeps_base_without_extras() {
        assert_eq!(merge_class("card", &None), "card");
        assert_eq!(merge_class("card", &Some(String::new())), "card");
    }

    #[test]
    fn merge_class_appends_extras() {
        assert_eq!(
            merge_class("card", &Some("quote-card".to_string())),
            "card quote-card"
        );
        assert_eq!(
            merge_class("dialog-footer", &Some("wide".to_string())),
            "dialog-footer wide"
        );
    }
}
