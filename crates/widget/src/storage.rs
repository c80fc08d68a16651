use starship_chat::SessionStore;
use web_sys::{Storage, Window};

/// Slot holding the per-tab session token.
const SESSION_STORAGE_KEY: &str = "starship.chat.session";

/// Per-tab session slot backed by `sessionStorage`.
///
/// Storage can be unavailable (sandboxed iframes, cookie-blocking modes);
/// the widget then falls back to a fresh token per page load, which the
/// server tolerates since the token is opaque to it.
pub struct BrowserSessionStore {
    storage: Option<Storage>,
}

impl BrowserSessionStore {
    pub fn new(window: &Window) -> Self {
        let storage = window.session_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("sessionStorage unavailable; session token will not survive navigation");
        }
        Self { storage }
    }
}

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<String> {
        self.storage
            .as_ref()?
            .get_item(SESSION_STORAGE_KEY)
            .ok()
            .flatten()
    }

    fn save(&self, token: &str) {
        if let Some(storage) = &self.storage
            && storage.set_item(SESSION_STORAGE_KEY, token).is_err()
        {
            log::warn!("failed to persist session token");
        }
    }
}
