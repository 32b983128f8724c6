//! Client-side persistent state for the storefront frontend.
//!
//! The only thing the frontend keeps between page loads is the authentication
//! token handed out by the backend on login. [`TokenStore`] abstracts where it
//! lives: browser local storage on the web, process memory everywhere else.

pub mod token;
pub use token::{TokenStore, TOKEN_KEY};

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageTokenStore;

use std::sync::Arc;

/// Create the platform-appropriate token store.
///
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - **Everything else**: an in-memory store that forgets on exit
pub fn default_token_store() -> Arc<dyn TokenStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(LocalStorageTokenStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(MemoryTokenStore::new())
    }
}
