//! Navigation component for the web UI.

use dioxus::prelude::*;

use super::theme_toggle::ThemeToggle;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "dashboard", "insight")
    pub active: String,
}

/// Navigation bar with the brand, page links, and the theme toggle.
#[component]
pub fn Nav(props: NavProps) -> Element {
    rsx! {
        nav {
            ul {
                li {
                    strong { "TradeMind" }
                }
            }
            ul {
                li {
                    if props.active == "dashboard" {
                        a { href: "/", "aria-current": "page", strong { "Dashboard" } }
                    } else {
                        a { href: "/", "Dashboard" }
                    }
                }
                li {
                    if props.active == "insight" {
                        a { href: "/insight", "aria-current": "page", strong { "AI Insight" } }
                    } else {
                        a { href: "/insight", "AI Insight" }
                    }
                }
                li {
                    ThemeToggle {}
                }
            }
        }
    }
}
