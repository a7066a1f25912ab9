use common::session::{MemorySessionStore, SessionStore};
use log::warn;
use web_sys::Storage;

/// Session token in `window.localStorage`, under a single key.
///
/// When local storage is unavailable (disabled cookies, private mode quota)
/// the token is kept in memory instead, so the session still works until the
/// page is reloaded.
pub struct BrowserSessionStore {
    key: String,
    fallback: MemorySessionStore,
}

impl BrowserSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fallback: MemorySessionStore::new(),
        }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Option<String> {
        match local_storage() {
            Some(storage) => storage.get_item(&self.key).ok().flatten(),
            None => self.fallback.get(),
        }
    }

    fn set(&self, token: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(&self.key, token).is_err() {
                    warn!("could not persist the session token");
                    self.fallback.set(token);
                }
            }
            None => {
                warn!("local storage unavailable, session will not survive a reload");
                self.fallback.set(token);
            }
        }
    }

    fn clear(&self) {
        self.fallback.clear();
        if let Some(storage) = local_storage() {
            if storage.remove_item(&self.key).is_err() {
                warn!("could not remove the session token");
            }
        }
    }
}
