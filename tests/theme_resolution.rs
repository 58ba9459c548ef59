//! Theme preference resolution tests.
//!
//! Drives the theme controller against an in-memory preference store,
//! covering startup resolution, toggle persistence, and malformed-value
//! fallback.

use std::rc::Rc;

use trademind_ui::prefs::{parse_stored_preference, MemoryStore, PreferenceStore};
use trademind_ui::theme::{resolve_startup_theme, Theme, ThemeController};

#[test]
fn stored_false_loads_light() {
    let controller = ThemeController::start(MemoryStore::with_value(false), true);
    assert_eq!(controller.current(), Theme::Light);
}

#[test]
fn stored_true_loads_dark() {
    let controller = ThemeController::start(MemoryStore::with_value(true), false);
    assert_eq!(controller.current(), Theme::Dark);
}

#[test]
fn absent_key_follows_os_preference() {
    let dark_os = ThemeController::start(MemoryStore::default(), true);
    assert_eq!(dark_os.current(), Theme::Dark);

    let light_os = ThemeController::start(MemoryStore::default(), false);
    assert_eq!(light_os.current(), Theme::Light);
}

#[test]
fn malformed_value_falls_back_to_os_preference() {
    // A corrupted stored value parses to an error; resolution must treat it
    // exactly like an absent key instead of aborting.
    let stored = parse_stored_preference("not-a-bool").ok();
    assert_eq!(stored, None);

    assert_eq!(resolve_startup_theme(stored, true), Theme::Dark);
    assert_eq!(resolve_startup_theme(stored, false), Theme::Light);
}

#[test]
fn even_number_of_toggles_is_identity() {
    let store = Rc::new(MemoryStore::with_value(true));
    let mut controller = ThemeController::start(store.clone(), false);

    let initial_theme = controller.current();
    let initial_stored = store.get();

    for _ in 0..4 {
        controller.toggle();
    }

    assert_eq!(controller.current(), initial_theme);
    // After any toggle the stored flag tracks the theme, so an even count
    // lands back on the starting value.
    assert_eq!(store.get(), initial_stored);
}

#[test]
fn absent_key_dark_os_toggle_sequence() {
    // Startup: nothing stored, OS prefers dark -> dark, no marker.
    let store = Rc::new(MemoryStore::default());
    let mut controller = ThemeController::start(store.clone(), true);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(store.get(), None);

    // First toggle -> light, stored "false".
    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(store.get(), Some(false));

    // Second toggle -> dark again, stored "true".
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(store.get(), Some(true));
}

#[test]
fn marker_presence_mirrors_stored_negation() {
    // The light marker is present iff the stored flag is false.
    for stored in [true, false] {
        let controller = ThemeController::start(MemoryStore::with_value(stored), true);
        assert_eq!(controller.current().is_light(), !stored);
    }
}
