//! Theme context with localStorage persistence.
//!
//! Wires [`ThemeController`] into the Dioxus app: a context provider
//! resolves the startup theme once at mount, and a single effect keeps the
//! document body class in sync with the current theme.

use dioxus::prelude::*;

use crate::prefs::PlatformStore;
use crate::theme::{Theme, ThemeController};

/// Body class marking the light theme. Dark is the unmarked default.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: Signal<ThemeController<PlatformStore>>,
}

impl ThemeContext {
    /// Current theme
    pub fn theme(&self) -> Theme {
        self.controller.read().current()
    }

    /// Flip the theme and persist the new choice. The body class follows
    /// reactively via the provider's sync effect.
    pub fn toggle(&self) {
        let mut controller = self.controller;
        controller.write().toggle();
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() {
    let controller = use_signal(|| {
        ThemeController::start(PlatformStore::default(), os_prefers_dark())
    });

    use_context_provider(|| ThemeContext { controller });

    // Single sync point: runs at mount and after every toggle.
    use_effect(move || {
        sync_theme_to_page(controller.read().current());
    });
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

// ============ WASM-only helpers ============

/// OS-level color-scheme preference. Dark when the query is unavailable,
/// matching the app's unmarked default.
#[cfg(target_arch = "wasm32")]
fn os_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(true)
}

#[cfg(not(target_arch = "wasm32"))]
fn os_prefers_dark() -> bool {
    true
}

#[cfg(target_arch = "wasm32")]
fn sync_theme_to_page(theme: Theme) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        if theme.is_light() {
            let _ = body.class_list().add_1(LIGHT_MODE_CLASS);
        } else {
            let _ = body.class_list().remove_1(LIGHT_MODE_CLASS);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn sync_theme_to_page(_theme: Theme) {}
