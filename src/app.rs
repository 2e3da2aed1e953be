use dioxus::prelude::*;

use crate::context::ThemeMode;
use crate::pages::Showcase;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides the theme-mode context, injects the resolved theme tokens and
/// the global stylesheet, and renders the showcase page.
#[component]
pub fn App() -> Element {
    let mode: Signal<ThemeMode> = use_signal(ThemeMode::startup);

    // Provide theme mode to all child components
    use_context_provider(|| mode);

    // Tokens were resolved once at startup (--theme or built-in palette)
    let theme_css = use_hook(|| crate::get_theme().css_variables());

    rsx! {
        style { {theme_css} }
        style { {GLOBAL_STYLES} }
        div { class: mode().root_class(), Showcase {} }
    }
}
