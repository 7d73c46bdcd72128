//! Реактивный фильтр коллекции.
//!
//! Каждый сеттер - прямое присваивание поля (last-write-wins), без проверок:
//! проверка делается при сборке запроса. Сброса нет, экран пересоздаёт стор.

use contracts::shared::{DateRange, DeletedVisibility, Filter, SortDirection, SortKey};
use leptos::prelude::*;

pub struct FilterStore<S, X>
where
    S: SortKey,
    X: Clone + Send + Sync + 'static,
{
    filter: RwSignal<Filter<S, X>>,
}

impl<S, X> Clone for FilterStore<S, X>
where
    S: SortKey,
    X: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, X> Copy for FilterStore<S, X>
where
    S: SortKey,
    X: Clone + Send + Sync + 'static,
{
}

impl<S, X> FilterStore<S, X>
where
    S: SortKey,
    X: Clone + Send + Sync + 'static,
{
    pub fn new(initial: Filter<S, X>) -> Self {
        Self {
            filter: RwSignal::new(initial),
        }
    }

    /// Снимок для запроса (без подписки)
    pub fn snapshot(&self) -> Filter<S, X> {
        self.filter.get_untracked()
    }

    /// Снимок с подпиской: для эффектов и отображения
    pub fn track(&self) -> Filter<S, X> {
        self.filter.get()
    }

    pub fn with<U>(&self, f: impl FnOnce(&Filter<S, X>) -> U) -> U {
        self.filter.with(f)
    }

    pub fn change_query(&self, query: impl Into<String>) {
        let query = query.into();
        if self.filter.with_untracked(|f| f.query == query) {
            return;
        }
        self.filter.update(|f| f.query = query);
    }

    /// Клик по тому же полю меняет направление, по новому - сортирует по возрастанию
    pub fn toggle_sort(&self, sort_by: S) {
        self.filter.update(|f| {
            if f.sort_by == sort_by {
                f.sort_direction = f.sort_direction.toggled();
            } else {
                f.sort_by = sort_by;
                f.sort_direction = SortDirection::Asc;
            }
        });
    }

    pub fn change_created_range(&self, range: DateRange) {
        self.filter.update(|f| f.created = range);
    }

    pub fn change_updated_range(&self, range: DateRange) {
        self.filter.update(|f| f.updated = range);
    }

    pub fn change_deleted(&self, deleted: DeletedVisibility) {
        self.filter.update(|f| f.deleted = deleted);
    }

    /// Поля конкретной сущности; сеттеры экранов построены поверх
    pub fn update_extra(&self, f: impl FnOnce(&mut X)) {
        self.filter.update(|filter| f(&mut filter.extra));
    }
}

impl<S, X> FilterStore<S, X>
where
    S: SortKey,
    X: Clone + Default + Send + Sync + 'static,
{
    pub fn with_defaults() -> Self {
        Self::new(Filter::default())
    }
}
