//! Персистентные UI-настройки (размер страницы, число колонок сетки).
//!
//! Значение читается из хранилища один раз при создании, каждое изменение
//! сразу пишется обратно. Некорректное или нулевое сохранённое значение
//! считается отсутствующим.

use leptos::prelude::*;
use log::warn;

use crate::config::UiConfig;
use crate::shared::storage::{KeyValueStorage, SharedStorage};

pub const PAGE_SIZE_KEY: &str = "crm_page_size";
pub const GRID_COLUMNS_KEY: &str = "crm_grid_columns";

#[derive(Clone)]
pub struct PreferenceStore {
    key: &'static str,
    value: RwSignal<u32>,
    storage: SharedStorage,
}

fn read_stored(storage: &dyn KeyValueStorage, key: &str) -> Option<u32> {
    storage
        .get_item(key)?
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|value| *value != 0)
}

impl PreferenceStore {
    pub fn new(storage: SharedStorage, key: &'static str, default: u32) -> Self {
        let initial = read_stored(storage.as_ref(), key).unwrap_or(default);
        Self {
            key,
            value: RwSignal::new(initial),
            storage,
        }
    }

    /// Текущее значение (с подпиской)
    pub fn get(&self) -> u32 {
        self.value.get()
    }

    pub fn get_untracked(&self) -> u32 {
        self.value.get_untracked()
    }

    pub fn set(&self, value: u32) {
        self.value.set(value);
        if let Err(e) = self.storage.set_item(self.key, &value.to_string()) {
            warn!("Failed to persist preference {}: {}", self.key, e);
        }
    }

    pub fn signal(&self) -> Signal<u32> {
        self.value.into()
    }
}

/// Настройки, общие для всех экранов сессии
#[derive(Clone)]
pub struct Preferences {
    pub page_size: PreferenceStore,
    pub grid_columns: PreferenceStore,
}

impl Preferences {
    pub fn new(storage: SharedStorage, ui: &UiConfig) -> Self {
        Self {
            page_size: PreferenceStore::new(storage.clone(), PAGE_SIZE_KEY, ui.page_size),
            grid_columns: PreferenceStore::new(storage, GRID_COLUMNS_KEY, ui.grid_columns),
        }
    }
}

pub fn use_preferences() -> Preferences {
    use_context::<Preferences>().expect("Preferences not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn test_set_then_get() {
        let storage = MemoryStorage::default();
        let store = PreferenceStore::new(Arc::new(storage.clone()), PAGE_SIZE_KEY, 24);

        assert_eq!(store.get_untracked(), 24);
        for value in [1, 48, 96, u32::MAX] {
            store.set(value);
            assert_eq!(store.get_untracked(), value);
            assert_eq!(storage.get_item(PAGE_SIZE_KEY), Some(value.to_string()));
        }
    }

    #[test]
    fn test_reads_initial_value_from_storage() {
        let storage = MemoryStorage::with_items([(GRID_COLUMNS_KEY, "4")]);
        let store = PreferenceStore::new(Arc::new(storage), GRID_COLUMNS_KEY, 3);
        assert_eq!(store.get_untracked(), 4);
    }

    #[test]
    fn test_malformed_value_degrades_to_default() {
        for raw in ["NaN", "0", "", "-5", "abc"] {
            let storage = MemoryStorage::with_items([(PAGE_SIZE_KEY, raw)]);
            let store = PreferenceStore::new(Arc::new(storage), PAGE_SIZE_KEY, 24);
            assert_eq!(store.get_untracked(), 24, "raw value {:?}", raw);
        }
    }

    #[test]
    fn test_value_survives_reconstruction() {
        let storage = MemoryStorage::default();
        let prefs = Preferences::new(Arc::new(storage.clone()), &UiConfig::default());
        prefs.grid_columns.set(5);

        let restored = Preferences::new(Arc::new(storage), &UiConfig::default());
        assert_eq!(restored.grid_columns.get_untracked(), 5);
        assert_eq!(restored.page_size.get_untracked(), 24);
    }
}
