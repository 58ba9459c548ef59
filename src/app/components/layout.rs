//! Layout component wrapping all pages.

use dioxus::prelude::*;

use super::nav::Nav;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let git_sha = env!("TMUI_GIT_SHA");
    let full_title = format!("{} - TradeMind", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/trademind.css")
        }

        // Body content
        Nav { active: props.nav_active.clone() }
        main { class: "container",
            {props.children}
        }
        footer { class: "container footer",
            small { "TradeMind v{version} ({git_sha})" }
        }
    }
}
