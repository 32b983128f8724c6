/// Local storage key holding the backend-issued JWT.
pub const TOKEN_KEY: &str = "jwtToken";

/// Persistent home of the authentication token.
///
/// Implementations never fail loudly: a broken or unavailable backend reads
/// as "no token" and writes are dropped. An empty token is never stored;
/// `set("")` behaves like [`TokenStore::clear`].
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// Normalise a raw stored value: blank strings count as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
