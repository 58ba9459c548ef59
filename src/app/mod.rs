//! Dioxus web application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the application.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod theme;

use pages::{Dashboard, Insight};
use theme::use_theme_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Initialize theme context at app root (handles localStorage + body class)
    use_theme_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/insight")]
    Insight {},
}
