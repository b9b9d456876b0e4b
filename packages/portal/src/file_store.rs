//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on desktop. Each key is a file
//! under the base directory whose contents are the stored value, so the
//! layout mirrors what the browser keeps in local storage:
//!
//! ```text
//! <base_dir>/
//! ├── user            # JSON user of the active session
//! ├── gatQuestions    # JSON array of GAT questions
//! └── portal.toml     # optional configuration
//! ```
//!
//! Use `dirs::data_dir()` on the caller side to obtain a platform base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/examportal/` |
//! | Linux | `~/.local/share/examportal/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\examportal\` |

use std::path::PathBuf;

use crate::storage::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are flat names; never let one escape the base directory.
        self.base.join(key.replace(['/', '\\'], "_"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Cannot create store directory {}: {e}", self.base.display());
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::warn!("Cannot write `{key}`: {e}");
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use crate::User;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("examportal_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        let session = SessionStore::new(store);
        session.save(&User::new("s1", "Sara")).unwrap();

        // Re-open from same directory
        let reopened = SessionStore::new(FileStore::new(dir.clone()));
        let user = reopened.restore().unwrap().unwrap();
        assert_eq!(user.name, "Sara");
        assert!(dir.join("user").exists());

        reopened.clear();
        assert!(reopened.restore().unwrap().is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_keys_stay_inside_base() {
        let store = FileStore::new(PathBuf::from("/tmp/base"));
        assert_eq!(store.key_path("../etc"), PathBuf::from("/tmp/base/.._etc"));
    }
}
