//! Key-Value Storage
//!
//! The durable client-side store the session survives reloads in.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::SyncResult;

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key caching the name returned at registration
pub const USER_NAME_KEY: &str = "userName";

/// Origin-scoped string storage (browser `localStorage` or an in-memory map)
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> SyncResult<()>;

    /// Remove every key
    fn clear(&self);
}

/// In-memory storage for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> SyncResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SyncResult<()> {
        (**self).set(key, value)
    }

    fn clear(&self) {
        (**self).clear()
    }
}
