//! Theme toggle control.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

/// Single toggle button flipping between dark and light mode.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();

    let label = if theme.theme().is_dark() {
        "Light mode"
    } else {
        "Dark mode"
    };

    rsx! {
        button {
            id: "theme-toggle",
            class: "theme-toggle",
            onclick: move |_| theme.toggle(),
            "{label}"
        }
    }
}
