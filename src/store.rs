//! Session token storage.

use std::sync::{Arc, RwLock};

use bytes::Bytes;

/// Holder of the opaque session token issued by the login endpoint.
///
/// One live value at a time, last write wins, nothing persists across
/// restarts. The store is owned by the composition root and shared as an
/// [`Arc`]: every holder of the same handle observes the most recent write.
/// Requests only read; the login flow is the only writer.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: RwLock<Option<Bytes>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for the common `Arc<SessionStore>` wiring.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Replace the stored token.
    pub fn store(&self, token: impl Into<Bytes>) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.into());
    }

    /// The most recently stored token, if any.
    pub fn get(&self) -> Option<Bytes> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert_eq!(SessionStore::new().get(), None);
    }

    #[test]
    fn last_write_wins() {
        let store = SessionStore::new();
        store.store(Bytes::from_static(b"first"));
        store.store(Bytes::from_static(b"second"));
        assert_eq!(store.get(), Some(Bytes::from_static(b"second")));
    }

    #[test]
    fn shared_handles_observe_writes() {
        let store = SessionStore::shared();
        let reader = Arc::clone(&store);
        store.store(Bytes::from_static(b"tok"));
        assert_eq!(reader.get(), Some(Bytes::from_static(b"tok")));
    }
}
