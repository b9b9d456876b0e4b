use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::KeyValueStore;

/// In-memory KeyValueStore for tests and as a fallback when no platform
/// storage is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{CONFIG_KEY, USER_KEY};
    use crate::Error;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());

        store.set("a", "1");
        assert_eq!(store.get("a").as_deref(), Some("1"));

        store.set("a", "2");
        assert_eq!(store.get("a").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.remove("a");
        assert!(store.get("a").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v");
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        assert_eq!(store.get_json::<Vec<u32>>("nums").unwrap(), None);

        store.set_json("nums", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(store.get("nums").as_deref(), Some("[1,2,3]"));
        assert_eq!(
            store.get_json::<Vec<u32>>("nums").unwrap(),
            Some(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "{not json");

        match store.get_json::<crate::User>(USER_KEY) {
            Err(Error::Json { key, .. }) => assert_eq!(key, USER_KEY),
            other => panic!("expected a JSON error, got {other:?}"),
        }
    }

    #[test]
    fn test_config_defaults_when_absent() {
        let store = MemoryStore::new();
        let config = store.get_config().unwrap();
        assert_eq!(config, crate::PortalConfig::default());

        store.set(CONFIG_KEY, "[dashboard]\nload_delay_ms = 10\n");
        assert_eq!(store.get_config().unwrap().dashboard.load_delay_ms, 10);

        store.set(CONFIG_KEY, "[dashboard]\nload_delay_ms = \"soon\"\n");
        assert!(matches!(store.get_config(), Err(Error::Toml(_))));
    }

    #[test]
    fn test_appearance_survives_restart() {
        let store = MemoryStore::new();
        let mut prefs = crate::Preferences::from_config(&store.get_config().unwrap());
        prefs.toggle_dark_mode();
        prefs.toggle_language();

        let config = store.get_config().unwrap().with_preferences(&prefs);
        store.set_config(&config).unwrap();

        let reloaded = crate::Preferences::from_config(&store.get_config().unwrap());
        assert_eq!(reloaded, prefs);
        assert!(reloaded.dark_mode);
        assert_eq!(reloaded.language, crate::Language::Ar);
        assert_eq!(store.get_config().unwrap().dashboard.load_delay_ms, 1000);
    }
}
