//! # Browser local storage
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the web platform. It is a
//! zero-size handle that looks up `window.localStorage` on every call, so it
//! is `Clone`/`Copy` friendly and safe to construct inside event handlers.
//!
//! All failures (no window, storage disabled, quota exceeded) degrade to "no
//! value" for reads and a logged no-op for writes.

use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping `{key}`");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected `{key}`");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
