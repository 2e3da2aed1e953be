//! The showcase page: every component family on one long scroll.

use dioxus::prelude::*;

use crate::components::sections::{
    Buttons, Cards, Charts, Forms, Images, Inputs, Popups, Typography,
};
use crate::components::{Footer, Hero, Navbar};

/// Single demo page, navigated by the navbar anchors.
#[component]
pub fn Showcase() -> Element {
    rsx! {
        Navbar {}
        main { class: "showcase-main",
            Hero {}
            hr { class: "section-divider" }
            Typography {}
            Buttons {}
            Cards {}
            Inputs {}
            Popups {}
            Charts {}
            Forms {}
            Images {}
        }
        Footer {}
    }
}
