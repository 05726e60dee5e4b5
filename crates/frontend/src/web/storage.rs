//! `localStorage` backend

use pageauth_core::{CoreError, CoreResult, StorageBackend};
use web_sys::Storage;

/// Raw string access to `window.localStorage`.
///
/// Values are stored as-is, without JSON quoting, so tokens written by other
/// scripts on the origin read back unchanged. When storage is unavailable
/// (privacy mode, sandboxed frames) reads find nothing and writes fail.
#[derive(Clone, Debug)]
pub struct LocalStorageBackend {
    storage: Option<Storage>,
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage is unavailable, tokens will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> CoreResult<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| CoreError::storage("localStorage is unavailable"))
    }
}

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> CoreResult<Option<String>> {
        let Some(storage) = self.storage.as_ref() else {
            return Ok(None);
        };
        storage
            .get_item(key)
            .map_err(|e| CoreError::storage(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| CoreError::storage(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> CoreResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| CoreError::storage(format!("{e:?}")))
    }
}
