use std::sync::{Arc, Mutex};

use crate::token::{non_empty, TokenStore};

/// In-memory TokenStore for testing and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        let guard = self.token.lock().ok()?;
        non_empty(guard.clone())
    }

    fn set(&self, token: &str) {
        if token.trim().is_empty() {
            self.clear();
            return;
        }
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}
