//! Typed access to the persisted bearer token
//!
//! The token is the only value handed from a login page to later page loads.
//! Instead of scattering raw key lookups around, everything goes through
//! [`TokenStorage`], which is bound to a single key on a [`StorageBackend`].

use crate::error::{CoreError, CoreResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// A string key-value store scoped to one browser origin
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> CoreResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()>;

    fn remove_item(&self, key: &str) -> CoreResult<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get_item(&self, key: &str) -> CoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> CoreResult<()> {
        (**self).remove_item(key)
    }
}

/// In-memory backend for tests and for pages where browser storage is unavailable
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a backend with existing entries
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: RefCell::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> CoreResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Accessor for the token stored under one well-known key
#[derive(Debug, Clone)]
pub struct TokenStorage<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> TokenStorage<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the stored token. A failing backend reads as "no token".
    pub fn get(&self) -> Option<String> {
        match self.backend.get_item(&self.key) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read token from storage");
                None
            }
        }
    }

    /// Store a token, overwriting any previous value
    pub fn set(&self, token: &str) -> CoreResult<()> {
        self.backend.set_item(&self.key, token).map_err(|e| {
            CoreError::storage(format!("failed to write {:?}: {e}", self.key))
        })
    }

    /// Remove the stored token
    pub fn clear(&self) -> CoreResult<()> {
        self.backend.remove_item(&self.key).map_err(|e| {
            CoreError::storage(format!("failed to remove {:?}: {e}", self.key))
        })
    }
}

/// Value for the `Authorization` header.
///
/// A missing token is sent as the literal `null`, which is what pages have
/// always sent when nobody had logged in yet.
pub fn bearer_header_value(token: Option<&str>) -> String {
    format!("Bearer {}", token.unwrap_or("null"))
}
