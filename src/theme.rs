//! Theme resolution and toggling.
//!
//! Pure logic only; the Dioxus layer in [`crate::app::theme`] owns the
//! document class and the context plumbing.

use crate::prefs::PreferenceStore;

/// Effective color theme. Dark is the app default; light is marked on the
/// page with the `light-mode` body class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark_flag(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Theme shown on first paint: the persisted choice when one exists,
/// otherwise the OS color-scheme preference.
pub fn resolve_startup_theme(stored: Option<bool>, os_prefers_dark: bool) -> Theme {
    Theme::from_dark_flag(stored.unwrap_or(os_prefers_dark))
}

/// Owns the current theme and keeps the preference store in sync.
///
/// Invariant: after any [`ThemeController::toggle`], the stored value is
/// `true` exactly when the current theme is dark.
pub struct ThemeController<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolves the startup theme from the injected store.
    pub fn start(store: S, os_prefers_dark: bool) -> Self {
        let current = resolve_startup_theme(store.get(), os_prefers_dark);
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and persists the new choice.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.flipped();
        self.store.set(self.current.is_dark());
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;

    #[test]
    fn stored_preference_wins_over_os() {
        assert_eq!(resolve_startup_theme(Some(true), false), Theme::Dark);
        assert_eq!(resolve_startup_theme(Some(false), true), Theme::Light);
    }

    #[test]
    fn absent_preference_follows_os() {
        assert_eq!(resolve_startup_theme(None, true), Theme::Dark);
        assert_eq!(resolve_startup_theme(None, false), Theme::Light);
    }

    #[test]
    fn toggle_persists_dark_flag() {
        let store = std::rc::Rc::new(MemoryStore::default());
        let mut controller = ThemeController::start(store.clone(), true);
        assert_eq!(controller.current(), Theme::Dark);

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(store.get(), Some(false));

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(store.get(), Some(true));
    }
}
