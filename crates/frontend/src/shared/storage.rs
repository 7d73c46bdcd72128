//! Синхронное key-value хранилище на стороне клиента.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Durable client storage: get/set строк по ключу, без транзакций и TTL
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;

    fn remove_item(&self, key: &str);
}

pub type SharedStorage = Arc<dyn KeyValueStorage>;

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = local_storage().ok_or_else(|| "localStorage недоступен".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("{e:?}"))
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage for tests and non-browser targets
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::default();
        for (key, value) in items {
            let _ = storage.set_item(key, value);
        }
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip_and_remove() {
        let storage = MemoryStorage::with_items([("a", "1")]);
        let storage_obj: &dyn KeyValueStorage = &storage;

        assert_eq!(storage_obj.get_item("a"), Some("1".to_string()));
        storage_obj.set_item("a", "2").expect("set");
        assert_eq!(storage_obj.get_item("a"), Some("2".to_string()));
        storage_obj.remove_item("a");
        assert_eq!(storage_obj.get_item("a"), None);
    }

    #[test]
    fn memory_storage_clones_share_data() {
        let storage = MemoryStorage::default();
        let other = storage.clone();
        storage.set_item("k", "v").expect("set");
        assert_eq!(other.get_item("k"), Some("v".to_string()));
    }
}
