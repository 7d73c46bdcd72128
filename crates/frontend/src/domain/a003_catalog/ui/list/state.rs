//! Фильтры каталога. Обе коллекции (категории и позиции) скоупятся текущей
//! категорией следа.

use contracts::domain::a003_catalog::{
    CatalogFilterExtra, CatalogItem, CatalogSortBy, Category, CategoryFilterExtra, CategorySortBy,
};
use contracts::shared::NumericRange;

use crate::shared::collection::CollectionItem;
use crate::shared::state::FilterStore;

pub type CatalogFilterStore = FilterStore<CatalogSortBy, CatalogFilterExtra>;
pub type CategoryFilterStore = FilterStore<CategorySortBy, CategoryFilterExtra>;

pub fn create_filters() -> (CategoryFilterStore, CatalogFilterStore) {
    (
        CategoryFilterStore::with_defaults(),
        CatalogFilterStore::with_defaults(),
    )
}

impl CollectionItem for CatalogItem {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn parent_id(&self) -> Option<i64> {
        self.category_id
    }

    fn revision(&self) -> i64 {
        self.metadata.revision()
    }
}

impl CollectionItem for Category {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }

    // у категорий нет меток времени, меняются только счётчики
    fn revision(&self) -> i64 {
        (i64::from(self.children_count) << 32) | i64::from(self.items_count)
    }
}

impl FilterStore<CatalogSortBy, CatalogFilterExtra> {
    pub fn change_category(&self, category_id: Option<i64>) {
        self.update_extra(|x| x.category_id = category_id);
    }

    pub fn change_price_range(&self, range: NumericRange) {
        self.update_extra(|x| x.price = range);
    }
}

impl FilterStore<CategorySortBy, CategoryFilterExtra> {
    pub fn change_parent(&self, parent_id: Option<i64>) {
        self.update_extra(|x| x.parent_id = parent_id);
    }
}

/// Перевести оба фильтра на категорию `current` (`None` - корень)
pub fn scope_to(categories: &CategoryFilterStore, items: &CatalogFilterStore, current: Option<i64>) {
    categories.change_parent(current);
    items.change_category(current);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state::{breadcrumbs, Crumb};

    #[test]
    fn test_scope_follows_trail() {
        let (categories, items) = create_filters();

        let trail = breadcrumbs::push(&[], Crumb::new(3, "Аксессуары"));
        scope_to(&categories, &items, breadcrumbs::current(&trail));
        assert_eq!(items.snapshot().extra.category_id, Some(3));
        assert_eq!(categories.snapshot().extra.parent_id, Some(3));

        let trail = breadcrumbs::truncate_to(&trail, None);
        scope_to(&categories, &items, breadcrumbs::current(&trail));
        assert_eq!(items.snapshot().extra.category_id, None);
        assert_eq!(categories.snapshot().extra.parent_id, None);
    }

    #[test]
    fn test_category_revision_tracks_counters() {
        let mut category = Category {
            id: 1,
            name: "Экраны".to_string(),
            parent_id: None,
            children_count: 2,
            items_count: 5,
        };
        let before = category.revision();
        category.items_count = 6;
        assert_ne!(category.revision(), before);
        assert_eq!(category.parent_id(), None);
    }
}
