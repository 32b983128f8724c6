//! # Local storage token store — browser-side persistence
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web platform**.
//! It keeps the token in `window.localStorage` under [`TOKEN_KEY`], so a login
//! survives page reloads and new tabs on the same origin.
//!
//! The struct is zero-sized and looks up `localStorage` on every call; the
//! `Storage` handle is not `Send`, so it is never held.
//!
//! Errors (no window, storage disabled, quota exceeded) are logged and
//! otherwise ignored. Reads degrade to "no token".

use crate::token::{non_empty, TokenStore, TOKEN_KEY};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        let storage = Self::storage()?;
        non_empty(storage.get_item(TOKEN_KEY).ok().flatten())
    }

    fn set(&self, token: &str) {
        if token.trim().is_empty() {
            self.clear();
            return;
        }
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable; token not persisted");
            return;
        };
        if let Err(e) = storage.set_item(TOKEN_KEY, token) {
            tracing::error!("Failed to persist token: {:?}", e);
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(TOKEN_KEY) {
            tracing::error!("Failed to clear token: {:?}", e);
        }
    }
}
