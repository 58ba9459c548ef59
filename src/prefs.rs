//! Persisted dark-mode preference.
//!
//! The preference is a single boolean stored under the `dark_mode` key in
//! browser local storage, serialized as a bare JSON boolean (`"true"` /
//! `"false"`). Access goes through the [`PreferenceStore`] trait so the
//! theme logic can be exercised with an in-memory store instead of a real
//! browser storage backend.

use serde::Deserialize;
use thiserror::Error;

/// Local storage key holding the persisted dark-mode choice.
pub const DARK_MODE_KEY: &str = "dark_mode";

/// A stored value that is not a JSON boolean.
///
/// Callers treat this the same as an absent key and fall back to the OS
/// color-scheme preference; it never aborts theme initialization.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("stored dark-mode preference is not a boolean: {raw:?}")]
pub struct MalformedPreference {
    pub raw: String,
}

/// Wire form of the stored preference: a bare JSON boolean.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
struct StoredPreference(bool);

/// Parses raw storage text into the dark-mode flag.
pub fn parse_stored_preference(raw: &str) -> Result<bool, MalformedPreference> {
    serde_json::from_str::<StoredPreference>(raw)
        .map(|pref| pref.0)
        .map_err(|_| MalformedPreference { raw: raw.to_string() })
}

/// Serialized form written back to storage.
pub fn encode_preference(dark_mode: bool) -> &'static str {
    if dark_mode {
        "true"
    } else {
        "false"
    }
}

/// Durable store for the user's dark-mode choice.
pub trait PreferenceStore {
    /// Last persisted choice, if a usable one exists. Malformed values
    /// read as `None`.
    fn get(&self) -> Option<bool>;

    /// Persist the choice, overwriting any prior value.
    fn set(&self, dark_mode: bool);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<S> {
    fn get(&self) -> Option<bool> {
        (**self).get()
    }

    fn set(&self, dark_mode: bool) {
        (**self).set(dark_mode);
    }
}

/// In-memory store, used in tests and as the non-wasm fallback.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: std::cell::Cell<Option<bool>>,
}

impl MemoryStore {
    pub fn with_value(dark_mode: bool) -> Self {
        let store = Self::default();
        store.value.set(Some(dark_mode));
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Option<bool> {
        self.value.get()
    }

    fn set(&self, dark_mode: bool) {
        self.value.set(Some(dark_mode));
    }
}

/// Store used by the running app: browser local storage on wasm, memory
/// elsewhere (native builds have no durable page storage).
#[cfg(target_arch = "wasm32")]
pub type PlatformStore = LocalStorageStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = MemoryStore;

// ============ WASM-only store ============

/// Browser local storage backend.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorageStore {
    fn get(&self) -> Option<bool> {
        let raw = local_storage()?.get_item(DARK_MODE_KEY).ok().flatten()?;
        match parse_stored_preference(&raw) {
            Ok(dark_mode) => Some(dark_mode),
            Err(err) => {
                tracing::warn!("ignoring stored theme preference: {err}");
                None
            }
        }
    }

    fn set(&self, dark_mode: bool) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(DARK_MODE_KEY, encode_preference(dark_mode));
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
