//! # Key-value storage
//!
//! Everything the portal persists goes through the [`KeyValueStore`] trait: a
//! string-keyed, string-valued store with the same shape as the browser's
//! `window.localStorage`. Backends live in sibling modules:
//!
//! | Backend | Module | Used by |
//! |---------|--------|---------|
//! | [`MemoryStore`](crate::MemoryStore) | `memory` | tests |
//! | [`FileStore`](crate::FileStore) | `file_store` | desktop, one file per key |
//! | `LocalStore` | `local` | web (`wasm32` + `web` feature) |
//!
//! The raw methods never fail: an unavailable backend behaves like an empty
//! store, the same way a browser with storage disabled does. Parse failures
//! are a different matter and surface through [`get_json`](KeyValueStore::get_json)
//! as [`Error::Json`].
//!
//! ## Well-known keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`USER_KEY`] | JSON [`User`](crate::User) of the active session |
//! | [`GAT_QUESTIONS_KEY`] | JSON array of [`GatQuestion`](crate::GatQuestion) |
//! | [`CONFIG_KEY`] | TOML [`PortalConfig`](crate::PortalConfig) |

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::PortalConfig;
use crate::error::{Error, Result};

pub const USER_KEY: &str = "user";
pub const GAT_QUESTIONS_KEY: &str = "gatQuestions";
pub const CONFIG_KEY: &str = "portal.toml";

/// String key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Read and parse a JSON value. `Ok(None)` when the key is absent.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| Error::Json {
                key: key.to_string(),
                source,
            })
    }

    /// Serialize a value as JSON and store it.
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|source| Error::Encode {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &raw);
        Ok(())
    }

    /// Read the portal configuration, falling back to defaults when absent.
    fn get_config(&self) -> Result<PortalConfig> {
        match self.get(CONFIG_KEY) {
            Some(raw) => Ok(PortalConfig::from_toml(&raw)?),
            None => Ok(PortalConfig::default()),
        }
    }

    /// Write the portal configuration as TOML.
    fn set_config(&self, config: &PortalConfig) -> Result<()> {
        self.set(CONFIG_KEY, &config.to_toml()?);
        Ok(())
    }
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
