//! Session persistence: the signed-in [`User`] under the `user` key.

use crate::error::Result;
use crate::models::User;
use crate::storage::{KeyValueStore, USER_KEY};

/// Reads and writes the active session.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored user, if any. A malformed value is an error rather than an
    /// empty session so the caller can report it.
    pub fn restore(&self) -> Result<Option<User>> {
        self.store.get_json(USER_KEY)
    }

    pub fn save(&self, user: &User) -> Result<()> {
        self.store.set_json(USER_KEY, user)
    }

    pub fn clear(&self) {
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, MemoryStore};

    #[test]
    fn test_save_restore_clear() {
        let session = SessionStore::new(MemoryStore::new());
        assert!(session.restore().unwrap().is_none());

        let user = User::new("1001", "Ahmed").admin();
        session.save(&user).unwrap();
        assert_eq!(session.restore().unwrap(), Some(user));

        session.clear();
        assert!(session.restore().unwrap().is_none());
    }

    #[test]
    fn test_restore_malformed() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "undefined");
        let session = SessionStore::new(&store);
        assert!(matches!(session.restore(), Err(Error::Json { .. })));
    }
}
