//! Мультивыбор строк для групповых действий.
//!
//! Список - множество по `id`. Обновления только через `toggle`, который
//! возвращает новый вектор и не трогает предыдущий снимок.

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

impl SelectionEntry {
    pub fn new(id: i64, name: impl Into<String>, parent_id: Option<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
        }
    }
}

/// Есть запись с таким `id` - убрать её, иначе добавить в конец.
/// Сравнение только по `id`.
pub fn toggle(list: &[SelectionEntry], entry: SelectionEntry) -> Vec<SelectionEntry> {
    if is_selected(list, entry.id) {
        list.iter().filter(|e| e.id != entry.id).cloned().collect()
    } else {
        let mut next = Vec::with_capacity(list.len() + 1);
        next.extend_from_slice(list);
        next.push(entry);
        next
    }
}

pub fn is_selected(list: &[SelectionEntry], id: i64) -> bool {
    list.iter().any(|e| e.id == id)
}

/// Состояние режима выбора на экране
#[derive(Clone, Copy)]
pub struct SelectionList {
    entries: RwSignal<Vec<SelectionEntry>>,
    active: RwSignal<bool>,
}

impl Default for SelectionList {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionList {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            active: RwSignal::new(false),
        }
    }

    pub fn enter(&self) {
        self.active.set(true);
    }

    /// Выход из режима выбора отбрасывает список
    pub fn exit(&self) {
        self.active.set(false);
        self.entries.set(Vec::new());
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn is_active_untracked(&self) -> bool {
        self.active.get_untracked()
    }

    pub fn toggle(&self, entry: SelectionEntry) {
        let next = self.entries.with_untracked(|list| toggle(list, entry));
        self.entries.set(next);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.with(|list| is_selected(list, id))
    }

    pub fn entries(&self) -> Vec<SelectionEntry> {
        self.entries.get()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.entries
            .with_untracked(|list| list.iter().map(|e| e.id).collect())
    }

    pub fn len(&self) -> usize {
        self.entries.with(|list| list.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, name: &str) -> SelectionEntry {
        SelectionEntry::new(id, name, None)
    }

    #[test]
    fn test_toggle_by_id_ignores_name() {
        let list = toggle(&[], entry(5, "A"));
        assert_eq!(list, vec![entry(5, "A")]);

        let list = toggle(&list, entry(5, "B"));
        assert!(list.is_empty());
    }

    fn sorted_ids(list: &[SelectionEntry]) -> Vec<i64> {
        let mut ids: Vec<i64> = list.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let original = vec![entry(1, "a"), entry(2, "b"), entry(3, "c")];

        // отсутствующая запись: добавили в конец и убрали
        let once = toggle(&original, entry(9, "z"));
        assert_eq!(once.last(), Some(&entry(9, "z")));
        assert_eq!(toggle(&once, entry(9, "z")), original);

        // присутствующая: вернулась в конец, множество то же
        let once = toggle(&original, entry(2, "b"));
        assert_eq!(sorted_ids(&once), vec![1, 3]);
        let twice = toggle(&once, entry(2, "b"));
        assert_eq!(sorted_ids(&twice), sorted_ids(&original));
        assert_eq!(twice, vec![entry(1, "a"), entry(3, "c"), entry(2, "b")]);
    }

    #[test]
    fn test_toggle_sequence_stays_a_set() {
        let mut list = Vec::new();
        for id in [1, 2, 1, 3, 2, 2, 4, 1, 3] {
            list = toggle(&list, entry(id, "x"));
            let mut ids: Vec<i64> = list.iter().map(|e| e.id).collect();
            let len = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), len);
        }
        let ids: Vec<i64> = list.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 4, 1]);
    }

    #[test]
    fn test_toggle_keeps_input_untouched() {
        let original = vec![entry(1, "a")];
        let _ = toggle(&original, entry(1, "a"));
        assert_eq!(original, vec![entry(1, "a")]);
    }

    #[test]
    fn test_exit_discards_entries() {
        let selection = SelectionList::new();
        selection.enter();
        selection.toggle(entry(1, "a"));
        selection.toggle(SelectionEntry::new(7, "b", Some(1)));
        assert_eq!(selection.ids(), vec![1, 7]);
        assert!(selection.is_active_untracked());

        selection.exit();
        assert!(!selection.is_active_untracked());
        assert!(selection.ids().is_empty());
    }
}
