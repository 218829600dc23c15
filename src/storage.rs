//! Browser Storage
//!
//! `localStorage` adapter for the session store.

use todo_sync::{KeyValueStorage, SyncError, SyncResult};

/// Origin-scoped `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> SyncResult<()> {
        let storage = local_storage().ok_or_else(|| SyncError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| SyncError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.clear() {
                tracing::warn!("failed to clear localStorage: {:?}", e);
            }
        }
    }
}
