use thrive_admin_shared::cache::{MemoryStore, SessionStore};
use web_sys::window;

/// `sessionStorage` of the current tab. Falls back to memory when the
/// browser refuses access (private mode, sandboxed iframes).
pub enum BrowserSession {
    Storage(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserSession {
    pub fn open() -> Self {
        match window().and_then(|win| win.session_storage().ok().flatten()) {
            Some(storage) => BrowserSession::Storage(storage),
            None => {
                web_sys::console::warn_1(
                    &"sessionStorage unavailable, caching in memory".into(),
                );
                BrowserSession::Memory(MemoryStore::default())
            },
        }
    }
}

impl SessionStore for BrowserSession {
    fn get_item(&self, key: &str) -> Option<String> {
        match self {
            BrowserSession::Storage(storage) => storage.get_item(key).ok().flatten(),
            BrowserSession::Memory(memory) => memory.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        match self {
            BrowserSession::Storage(storage) => storage.set_item(key, value).is_ok(),
            BrowserSession::Memory(memory) => memory.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) {
        match self {
            BrowserSession::Storage(storage) => {
                let _ = storage.remove_item(key);
            },
            BrowserSession::Memory(memory) => memory.remove_item(key),
        }
    }
}
