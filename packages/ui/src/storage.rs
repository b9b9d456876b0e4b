//! Shared store constructor for all platforms.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`portal::LocalStore`]
//! - **Desktop** (native): one file per key under `<data_dir>/examportal/`

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_store() -> portal::LocalStore {
    portal::LocalStore::new()
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub fn make_store() -> portal::MemoryStore {
    portal::MemoryStore::new()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn make_store() -> portal::FileStore {
    let base = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("examportal");
    portal::FileStore::new(base)
}

/// Session handle over the platform store.
pub fn make_session() -> portal::SessionStore<impl portal::KeyValueStore> {
    portal::SessionStore::new(make_store())
}
